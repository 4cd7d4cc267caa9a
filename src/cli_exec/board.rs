use splitticket::history::split_history;
use splitticket::model::TicketId;
use splitticket::options::{OptionFilter, split_options};

use super::*;

pub(super) fn handle_init_command(force: bool, path: Option<std::path::PathBuf>) -> Result<()> {
    let root = path.unwrap_or(std::env::current_dir().context("get current dir")?);
    LocalStore::init(&root, force)?;
    println!("Initialized split form at {}", root.display());
    Ok(())
}

pub(super) fn handle_options_command(
    store: &LocalStore,
    ticket: TicketId,
    milestone: Option<&str>,
    component: Option<&str>,
    json: bool,
) -> Result<()> {
    let board = store.read_board()?;
    let filter = OptionFilter::new(milestone, component)?;
    let options = split_options(&board, ticket).filtered(&filter);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&options).context("serialize split options json")?
        );
        return Ok(());
    }

    if options.is_empty() {
        println!("No split options for #{}", ticket);
        return Ok(());
    }
    for group in &options.groups {
        println!("{}", group.milestone);
        for c in &group.components {
            let name = if c.component.is_empty() {
                "(no component)"
            } else {
                c.component.as_str()
            };
            println!("  {}", name);
            for t in &c.tickets {
                println!("    #{} {}", t.id, t.summary);
            }
        }
    }
    Ok(())
}

pub(super) fn handle_history_command(store: &LocalStore, ticket: TicketId, json: bool) -> Result<()> {
    let board = store.read_board()?;
    let history = split_history(&board, ticket);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&history).context("serialize split history json")?
        );
        return Ok(());
    }

    if history.is_empty() {
        println!("#{} has no split history", ticket);
        return Ok(());
    }
    for s in &history.from {
        println!(
            "split from #{} {} {}",
            s.source,
            s.time,
            s.summary.as_deref().unwrap_or("")
        );
    }
    for s in &history.to {
        println!(
            "split to #{} {} {}",
            s.target,
            s.time,
            s.summary.as_deref().unwrap_or("")
        );
    }
    Ok(())
}
