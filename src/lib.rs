pub mod form;
pub mod history;
pub mod model;
pub mod options;
pub mod remote;
pub mod store;
pub mod submission;
pub mod tui;

mod tui_shell;
