mod form;
mod history;

pub(super) use self::form::render_form;
pub(super) use self::history::render_history;
