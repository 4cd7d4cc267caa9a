use anyhow::{Context, Result};

use splitticket::store::LocalStore;

use crate::Commands;
use crate::cli_runtime::discover_store;

mod board;
mod dispatch;
mod submit;

pub(crate) use self::submit::emit_submission;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    dispatch::handle_command(command)
}

pub(super) fn with_store<F>(f: F) -> Result<()>
where
    F: FnOnce(&LocalStore) -> Result<()>,
{
    let store = discover_store()?;
    f(&store)
}
