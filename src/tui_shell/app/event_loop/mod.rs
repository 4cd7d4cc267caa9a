use anyhow::Context;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

use super::*;

mod key_dispatch;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            let reason = match app.outcome {
                Some(TuiOutcome::Submitted { .. }) => "submitted",
                _ => "cancelled",
            };
            app.trace_session_end(reason);
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => key_dispatch::handle_key(app, k),
                _ => {}
            }
        }
    }
}

pub(in crate::tui_shell) use self::key_dispatch::handle_key;
