use clap::Subcommand;

pub(crate) mod board;
pub(crate) mod submit;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Initialize a split form directory (.splitticket)
    Init(board::InitArgs),

    /// List the tickets a ticket may be split to
    Options(board::OptionsArgs),

    /// Show the split history of a ticket
    History(board::HistoryArgs),

    /// Prepare (and optionally post) the submission for a saved form state
    Prepare(submit::PrepareArgs),
}
