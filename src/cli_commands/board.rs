use std::path::PathBuf;

use clap::Args;

use splitticket::model::TicketId;

#[derive(Args)]
pub(crate) struct InitArgs {
    /// Re-initialize if .splitticket already exists
    #[arg(long)]
    pub(crate) force: bool,
    /// Path to initialize (defaults to current directory)
    #[arg(long)]
    pub(crate) path: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct OptionsArgs {
    /// Ticket being split
    #[arg(long, value_name = "ID")]
    pub(crate) ticket: TicketId,
    /// Only milestones matching this glob (plain text matches a substring)
    #[arg(long)]
    pub(crate) milestone: Option<String>,
    /// Only components matching this glob (plain text matches a substring)
    #[arg(long)]
    pub(crate) component: Option<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct HistoryArgs {
    #[arg(long, value_name = "ID")]
    pub(crate) ticket: TicketId,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
