use anyhow::Result;

mod app;
mod view;
mod views;

use app::{App, Focus};
use view::render_view_chrome;

pub(crate) fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<crate::tui::TuiOutcome> {
    app::run(opts)
}
