//! Confirmation links.
//!
//! With no mail delivery, the host simulates the emailed link: after a
//! successful registration it builds `<origin>/confirm.html?token=<token>`,
//! remembers it under `lastConfirmationLink`, and shows it on demand.

use crate::error::{LatchkeyError, Result};
use crate::store::{KeyValueStore, LAST_CONFIRMATION_LINK_KEY};
use tracing::debug;
use url::Url;

const CONFIRM_PAGE: &str = "confirm.html";
const TOKEN_PARAM: &str = "token";

pub fn build(origin: &str, token: &str) -> Result<Url> {
    let mut url = confirm_page(origin)
        .map_err(|e| LatchkeyError::Config(format!("Invalid origin '{}': {}", origin, e)))?;
    url.query_pairs_mut().append_pair(TOKEN_PARAM, token);
    Ok(url)
}

/// Checks that links can be built on `origin`. Origins such as `mailto:` parse
/// as URLs but cannot carry a page path.
pub fn check_origin(origin: &str) -> std::result::Result<(), url::ParseError> {
    confirm_page(origin).map(|_| ())
}

fn confirm_page(origin: &str) -> std::result::Result<Url, url::ParseError> {
    let base = Url::parse(&format!("{}/", origin.trim_end_matches('/')))?;
    if base.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
    }
    base.join(CONFIRM_PAGE)
}

/// Accepts either a bare token or a confirmation link and returns the token.
pub fn token_from_input(input: &str) -> String {
    let input = input.trim();
    Url::parse(input)
        .ok()
        .and_then(|url| {
            url.query_pairs()
                .find(|(key, _)| key == TOKEN_PARAM)
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_else(|| input.to_string())
}

pub fn save<S: KeyValueStore>(store: &mut S, link: &Url) -> Result<()> {
    store.set(LAST_CONFIRMATION_LINK_KEY, link.as_str())?;
    debug!(%link, "saved confirmation link");
    Ok(())
}

pub fn load<S: KeyValueStore>(store: &S) -> Result<Option<String>> {
    store.get(LAST_CONFIRMATION_LINK_KEY)
}
