use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use splitticket::model::TicketId;
use splitticket::store::LocalStore;
use splitticket::tui::{TuiOutcome, TuiRunOptions};

use crate::Commands;

#[derive(Parser)]
#[command(name = "splitticket")]
#[command(about = "Split a ticket into existing and new tickets", long_about = None)]
pub(crate) struct Cli {
    /// Ticket to split (interactive form)
    #[arg(long, value_name = "ID")]
    ticket: Option<TicketId>,

    /// Append a JSON-lines event trace of the interactive session
    #[arg(long = "trace", value_name = "PATH")]
    trace: Option<PathBuf>,

    /// Report missing form structure in the session log
    #[arg(long = "dev-warnings")]
    dev_warnings: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let ticket = cli
                .ticket
                .context("missing --ticket <ID> (the ticket to split)")?;
            let outcome = splitticket::tui::run_with_options(TuiRunOptions {
                ticket,
                trace: cli.trace,
                dev_warnings: cli.dev_warnings,
            })?;
            match outcome {
                TuiOutcome::Cancelled => println!("Split of #{} cancelled", ticket),
                TuiOutcome::Submitted {
                    submission,
                    draft,
                    submit_url,
                } => {
                    if let Some(draft) = draft {
                        println!("Saved form state to {}", draft.display());
                    }
                    crate::cli_exec::emit_submission(&submission, false, submit_url.as_deref())?;
                }
            }
        }
        Some(command) => {
            if cli.trace.is_some() || cli.dev_warnings {
                anyhow::bail!(
                    "`--trace` and `--dev-warnings` are only supported when running the form (no subcommand)"
                );
            }
            crate::cli_exec::handle_command(command)?
        }
    }

    Ok(())
}

pub(crate) fn discover_store() -> Result<LocalStore> {
    LocalStore::discover(&std::env::current_dir().context("get current dir")?)
}
