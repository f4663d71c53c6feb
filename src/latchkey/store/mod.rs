//! # Storage Layer
//!
//! Everything latchkey persists goes through the [`KeyValueStore`] trait: string
//! keys mapped to string values, with `get`, `set` and `remove`. The trait is the
//! seam that replaces the browser's `localStorage`.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with [`memory::MemoryStore`] (no filesystem needed)
//! - Keep the account and preference logic **decoupled** from persistence details
//!
//! ## Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | [`THEME_KEY`] | `light` or `dark`, stored raw |
//! | [`USERS_KEY`] | JSON array of accounts, insertion ordered |
//! | [`CURRENT_USER_KEY`] | JSON account of the active session, absent when signed out |
//! | [`LAST_CONFIRMATION_LINK_KEY`] | URL of the most recent confirmation link |
//!
//! Values are always overwritten whole. There is no append and no partial update.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one file per key under a data directory
//! - [`memory::MemoryStore`]: in-memory map for tests
//!
//! ## Storage Layout
//!
//! For `FileStore`:
//! ```text
//! <data-dir>/
//! ├── users                 # Account directory
//! ├── currentUser           # Active session
//! ├── theme                 # Theme preference
//! ├── lastConfirmationLink  # Host convenience
//! └── config.json           # Configuration (not part of the key space)
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

pub const THEME_KEY: &str = "theme";
pub const USERS_KEY: &str = "users";
pub const CURRENT_USER_KEY: &str = "currentUser";
pub const LAST_CONFIRMATION_LINK_KEY: &str = "lastConfirmationLink";

/// Abstract interface for durable string storage.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never set or was removed.
    /// A value that is not valid text is `StorageCorrupted`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
