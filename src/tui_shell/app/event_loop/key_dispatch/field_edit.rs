use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::{Choice, TextField};

use super::super::super::{App, Focus};

/// Edits the focused text or select field. Returns false when the key is
/// not a field edit (or nothing editable has focus).
pub(super) fn handle_field_key(app: &mut App, key: KeyEvent) -> bool {
    if app.focus.is_text() {
        let Some(field) = focused_text(app) else {
            return false;
        };
        return apply_text_key(field, key);
    }

    let Some(choice) = focused_choice(app) else {
        return false;
    };
    match key.code {
        KeyCode::Left => choice.select_prev(),
        KeyCode::Right | KeyCode::Char(' ') => choice.select_next(),
        KeyCode::Home => choice.reset(),
        _ => return false,
    }
    true
}

fn focused_text(app: &mut App) -> Option<&mut TextField> {
    match app.focus {
        Focus::Existing => Some(app.form.selection.text_mut()),
        Focus::Summary(i) => app.form.rows.get_mut(i).map(|r| &mut r.summary),
        _ => None,
    }
}

fn focused_choice(app: &mut App) -> Option<&mut Choice> {
    match app.focus {
        Focus::Milestone(i) => app.form.rows.get_mut(i).map(|r| &mut r.milestone),
        Focus::Component(i) => app.form.rows.get_mut(i).map(|r| &mut r.component),
        _ => None,
    }
}

fn apply_text_key(field: &mut TextField, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::ALT)
            {
                return false;
            }
            field.insert_char(c);
        }
        _ => return false,
    }
    true
}
