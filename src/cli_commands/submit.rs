use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub(crate) struct PrepareArgs {
    /// Saved form state (JSON)
    #[arg(long, value_name = "FILE")]
    pub(crate) state: PathBuf,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Post the prepared fields to this URL
    #[arg(long, value_name = "URL")]
    pub(crate) post: Option<String>,
}
