//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for hosts. It holds two components, each an explicit instance
//! over an injected [`KeyValueStore`]:
//!
//! - [`AccountDirectory`]: registration, confirmation, login, logout and the
//!   current session
//! - [`PreferenceStore`]: the theme flag
//!
//! ## Session Restoration
//!
//! [`AccountDirectory::open`] reads `currentUser` once and keeps it in memory.
//! Queries ([`is_authenticated`](AccountDirectory::is_authenticated),
//! [`user_initial`](AccountDirectory::user_initial),
//! [`user_email`](AccountDirectory::user_email)) answer from that cached copy;
//! `login` and `logout` update the cache and the store together.
//!
//! ## What the API Does NOT Do
//!
//! - **Navigation**: results name the next [`View`], the host moves there
//! - **Rendering or I/O**: results are data, never printed
//! - **Form checks**: see [`crate::forms`]
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `AccountDirectory<FileStore>`
//! - Testing: `AccountDirectory<MemoryStore>`

use crate::commands::{self, session};
use crate::error::Result;
use crate::model::{Account, Theme};
use crate::routes::{self, RouteDecision, View};
use crate::store::KeyValueStore;

pub struct AccountDirectory<S: KeyValueStore> {
    store: S,
    current: Option<Account>,
}

impl<S: KeyValueStore> AccountDirectory<S> {
    /// Build a directory over `store`, restoring any persisted session.
    ///
    /// Fails with `StorageCorrupted` if the persisted session cannot be decoded.
    pub fn open(store: S) -> Result<Self> {
        let current = commands::helpers::load_session(&store)?;
        Ok(Self { store, current })
    }

    pub fn register(&mut self, email: &str, password: &str) -> Result<CmdResult> {
        commands::register::run(&mut self.store, email, password)
    }

    pub fn confirm_email(&mut self, token: &str) -> Result<CmdResult> {
        commands::confirm::run(&mut self.store, token)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<CmdResult> {
        let result = commands::login::run(&mut self.store, email, password)?;
        if result.is_success() {
            self.current = result.account.clone();
        }
        Ok(result)
    }

    /// Ends the session. The result names [`View::Login`] as the next view.
    pub fn logout(&mut self) -> Result<CmdResult> {
        let result = commands::logout::run(&mut self.store)?;
        self.current = None;
        Ok(result)
    }

    pub fn is_authenticated(&self) -> bool {
        session::is_authenticated(self.current.as_ref())
    }

    pub fn user_initial(&self) -> String {
        session::user_initial(self.current.as_ref())
    }

    pub fn user_email(&self) -> String {
        session::user_email(self.current.as_ref())
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.current.as_ref()
    }

    /// Route protection for the current session.
    pub fn guard(&self, target: View) -> RouteDecision {
        routes::guard(target, self.is_authenticated())
    }

    pub fn accounts(&self) -> Result<Vec<Account>> {
        commands::helpers::load_accounts(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

pub struct PreferenceStore<S: KeyValueStore> {
    store: S,
    default_theme: Theme,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_default(store, Theme::default())
    }

    pub fn with_default(store: S, default_theme: Theme) -> Self {
        Self {
            store,
            default_theme,
        }
    }

    pub fn theme(&self) -> Result<Theme> {
        commands::theme::load(&self.store, self.default_theme)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        commands::theme::save(&mut self.store, theme)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        commands::theme::toggle(&mut self.store, self.default_theme)
    }

    pub fn toggle_label(&self) -> Result<&'static str> {
        Ok(self.theme()?.toggle_label())
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{AuthFailure, CmdMessage, CmdResult, MessageLevel};
