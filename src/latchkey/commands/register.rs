use crate::commands::helpers::{load_accounts, save_accounts};
use crate::commands::{AuthFailure, CmdResult};
use crate::error::Result;
use crate::model::Account;
use crate::routes::View;
use crate::store::KeyValueStore;
use crate::token;
use tracing::{info, warn};

pub fn run<S: KeyValueStore>(store: &mut S, email: &str, password: &str) -> Result<CmdResult> {
    let mut accounts = load_accounts(store)?;

    if accounts.iter().any(|a| a.email == email) {
        warn!(email, "registration rejected: email already registered");
        return Ok(CmdResult::failed(AuthFailure::DuplicateEmail));
    }

    let confirmation_token =
        token::generate_unique(|t| accounts.iter().any(|a| a.confirmation_token == t));
    let account = Account::new(
        email.to_string(),
        password.to_string(),
        confirmation_token.clone(),
    );
    accounts.push(account.clone());
    save_accounts(store, &accounts)?;

    info!(email, "account registered, awaiting confirmation");
    Ok(
        CmdResult::success("Registration successful. Check your email to confirm your account.")
            .with_token(confirmation_token)
            .with_account(account)
            .with_next_view(View::RegistrationSuccess),
    )
}
