use crate::commands::helpers::{load_accounts, save_accounts};
use crate::commands::{AuthFailure, CmdResult};
use crate::error::Result;
use crate::routes::View;
use crate::store::KeyValueStore;
use tracing::{info, warn};

/// Marks the account holding `token` as confirmed.
///
/// Tokens stay on the account after use, so confirming again with the same
/// token succeeds again.
pub fn run<S: KeyValueStore>(store: &mut S, token: &str) -> Result<CmdResult> {
    let mut accounts = load_accounts(store)?;

    let Some(account) = accounts
        .iter_mut()
        .find(|a| a.confirmation_token == token)
    else {
        warn!("confirmation rejected: unknown token");
        return Ok(CmdResult::failed(AuthFailure::InvalidToken));
    };

    account.email_confirmed = true;
    let confirmed = account.clone();
    save_accounts(store, &accounts)?;
    info!(email = %confirmed.email, "email confirmed");

    Ok(CmdResult::success("Email confirmed successfully!")
        .with_account(confirmed)
        .with_next_view(View::Login))
}
