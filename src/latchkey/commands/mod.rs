//! # Command Layer
//!
//! This module contains the **core business logic** of latchkey. Each operation
//! lives in its own submodule as plain functions over a
//! [`KeyValueStore`](crate::store::KeyValueStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Load the account directory or session, apply one transition, persist it
//! - Return a structured [`CmdResult`] with the outcome and messages
//! - Are completely UI-agnostic
//!
//! ## Outcomes Are Values
//!
//! A duplicate email, an unknown token, bad credentials and an unconfirmed
//! account are expected results, not errors. They come back as
//! `Ok(CmdResult)` with [`CmdResult::failure`] set to an [`AuthFailure`].
//! `Err` is reserved for the store: I/O failures and corrupted values.
//!
//! ## Navigation
//!
//! Commands never navigate. A result may carry [`CmdResult::next_view`], the
//! view the host should move to when it acts on the result.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests run
//! against [`MemoryStore`](crate::store::memory::MemoryStore).
//!
//! ## Command Modules
//!
//! - [`register`]: Add an unconfirmed account
//! - [`confirm`]: Confirm an account by token
//! - [`login`]: Start a session
//! - [`logout`]: End the session
//! - [`session`]: Session queries (authenticated, initial, email)
//! - [`theme`]: Theme preference
//! - [`link`]: Confirmation link bookkeeping
//! - [`doctor`]: Corruption check and reset
//! - [`config`]: Manage configuration
//! - [`init`]: Create the data directory
//! - [`helpers`]: Loading and saving the directory and session

use crate::model::Account;
use crate::routes::View;
use std::fmt;

pub mod config;
pub mod confirm;
pub mod doctor;
pub mod helpers;
pub mod init;
pub mod link;
pub mod login;
pub mod logout;
pub mod register;
pub mod session;
pub mod theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Expected, recoverable validation outcomes of account operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// Registration with an email that is already present
    DuplicateEmail,
    /// Confirmation with a token no account holds
    InvalidToken,
    /// Login with an email/password pair matching no account
    InvalidCredentials,
    /// Login with correct credentials on an unconfirmed account
    EmailNotConfirmed,
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthFailure::DuplicateEmail => write!(f, "This email is already registered"),
            AuthFailure::InvalidToken => write!(f, "Invalid confirmation token"),
            AuthFailure::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthFailure::EmailNotConfirmed => {
                write!(f, "Please confirm your email before logging in")
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// `None` on success
    pub failure: Option<AuthFailure>,
    /// Set by a successful registration
    pub confirmation_token: Option<String>,
    /// The account the operation acted on, when the host needs it
    pub account: Option<Account>,
    /// Where the host should go when acting on this result
    pub next_view: Option<View>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            messages: vec![CmdMessage::success(message)],
            ..Default::default()
        }
    }

    pub fn failed(failure: AuthFailure) -> Self {
        Self {
            failure: Some(failure),
            messages: vec![CmdMessage::error(failure.to_string())],
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// The primary human-readable message, empty if there is none.
    pub fn message(&self) -> &str {
        self.messages
            .first()
            .map(|m| m.content.as_str())
            .unwrap_or("")
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.confirmation_token = Some(token);
        self
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.account = Some(account);
        self
    }

    pub fn with_next_view(mut self, view: View) -> Self {
        self.next_view = Some(view);
        self
    }
}
