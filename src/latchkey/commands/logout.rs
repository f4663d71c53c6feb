use crate::commands::helpers::clear_session;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::routes::View;
use crate::store::KeyValueStore;
use tracing::info;

/// Clears the persisted session. Safe to call without one.
pub fn run<S: KeyValueStore>(store: &mut S) -> Result<CmdResult> {
    clear_session(store)?;
    info!("logged out");
    Ok(CmdResult::success("Logged out.").with_next_view(View::Login))
}
