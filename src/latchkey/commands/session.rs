//! Pure projections of the current session.

use crate::model::Account;

/// Placeholder avatar initial shown when there is no session.
pub const PLACEHOLDER_INITIAL: &str = "U";

/// A session counts only if its account is confirmed. Login already enforces
/// this; the recheck covers a hand-edited `currentUser` value.
pub fn is_authenticated(session: Option<&Account>) -> bool {
    session.is_some_and(|a| a.email_confirmed)
}

pub fn user_initial(session: Option<&Account>) -> String {
    session
        .and_then(|a| a.email.chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| PLACEHOLDER_INITIAL.to_string())
}

pub fn user_email(session: Option<&Account>) -> String {
    session.map(|a| a.email.clone()).unwrap_or_default()
}
