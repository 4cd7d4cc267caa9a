use super::board::{handle_history_command, handle_init_command, handle_options_command};
use super::submit::handle_prepare_command;
use super::*;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Init(args) => handle_init_command(args.force, args.path)?,
        Commands::Options(args) => with_store(|store| {
            handle_options_command(
                store,
                args.ticket,
                args.milestone.as_deref(),
                args.component.as_deref(),
                args.json,
            )
        })?,
        Commands::History(args) => {
            with_store(|store| handle_history_command(store, args.ticket, args.json))?
        }
        Commands::Prepare(args) => handle_prepare_command(&args.state, args.json, args.post)?,
    }
    Ok(())
}
