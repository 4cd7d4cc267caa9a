use std::path::PathBuf;

use anyhow::Result;

use crate::model::TicketId;
use crate::submission::FormSubmission;

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub ticket: TicketId,
    pub trace: Option<PathBuf>,
    pub dev_warnings: bool,
}

/// How an interactive session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TuiOutcome {
    Submitted {
        submission: FormSubmission,
        /// Where the submitted form state was saved, if anywhere.
        draft: Option<PathBuf>,
        /// Configured endpoint for the fields, if any.
        submit_url: Option<String>,
    },
    Cancelled,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<TuiOutcome> {
    crate::tui_shell::run_with_options(opts)
}
