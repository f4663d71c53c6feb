//! Corruption check and recovery.
//!
//! Account operations fail with [`LatchkeyError::StorageCorrupted`] when
//! `users` or `currentUser` cannot be decoded. `doctor` reports which keys are
//! affected; with `reset` it removes them, which empties the directory and/or
//! ends the session.

use crate::commands::helpers::{load_accounts, load_session};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LatchkeyError, Result};
use crate::store::{KeyValueStore, CURRENT_USER_KEY, USERS_KEY};
use tracing::warn;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DoctorReport {
    pub corrupted_keys: Vec<String>,
}

pub fn check<S: KeyValueStore>(store: &S) -> Result<DoctorReport> {
    let mut report = DoctorReport::default();

    for outcome in [
        load_accounts(store).map(|_| ()),
        load_session(store).map(|_| ()),
    ] {
        match outcome {
            Ok(()) => {}
            Err(LatchkeyError::StorageCorrupted { key, .. }) => report.corrupted_keys.push(key),
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

pub fn run<S: KeyValueStore>(store: &mut S, reset: bool) -> Result<CmdResult> {
    let report = check(store)?;
    let mut result = CmdResult::default();

    if report.corrupted_keys.is_empty() {
        result.add_message(CmdMessage::success("No problems found."));
    } else {
        for key in &report.corrupted_keys {
            warn!(%key, "corrupted value");
            result.add_message(CmdMessage::warning(format!(
                "Value under '{}' is corrupted",
                key
            )));
        }
    }

    if let Ok(Some(session)) = load_session(store) {
        if !session.email_confirmed {
            result.add_message(CmdMessage::warning(format!(
                "Session for {} refers to an unconfirmed account and is ignored",
                session.email
            )));
        }
    }

    if reset && !report.corrupted_keys.is_empty() {
        for key in &report.corrupted_keys {
            store.remove(key)?;
            let what = match key.as_str() {
                USERS_KEY => "account directory emptied",
                CURRENT_USER_KEY => "session cleared",
                _ => "value removed",
            };
            warn!(%key, "reset corrupted value");
            result.add_message(CmdMessage::success(format!("Reset '{}': {}", key, what)));
        }
    } else if !report.corrupted_keys.is_empty() {
        result.add_message(CmdMessage::info("Run with --reset to remove corrupted values."));
    }

    Ok(result)
}
