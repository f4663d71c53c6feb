use crate::commands::helpers::{load_accounts, save_session};
use crate::commands::{AuthFailure, CmdResult};
use crate::error::Result;
use crate::routes::View;
use crate::store::KeyValueStore;
use tracing::{info, warn};

/// Starts a session for the account matching `email` and `password` exactly.
///
/// Unknown email and wrong password both yield `InvalidCredentials`. Once the
/// pair is proven correct, an unconfirmed account yields `EmailNotConfirmed`.
/// On success the session is persisted and the account is returned in
/// [`CmdResult::account`].
pub fn run<S: KeyValueStore>(store: &mut S, email: &str, password: &str) -> Result<CmdResult> {
    let accounts = load_accounts(store)?;

    let Some(account) = accounts
        .into_iter()
        .find(|a| a.matches_credentials(email, password))
    else {
        warn!("login rejected: invalid credentials");
        return Ok(CmdResult::failed(AuthFailure::InvalidCredentials));
    };

    if !account.email_confirmed {
        warn!(email, "login rejected: email not confirmed");
        return Ok(CmdResult::failed(AuthFailure::EmailNotConfirmed));
    }

    save_session(store, &account)?;
    info!(email, "logged in");

    Ok(CmdResult::success("Logged in successfully!")
        .with_account(account)
        .with_next_view(View::Home))
}
