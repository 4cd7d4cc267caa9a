use super::super::*;

mod field_edit;

pub(in crate::tui_shell) fn handle_key(app: &mut App, key: KeyEvent) {
    app.trace_key_action(key);

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.cancel();
        return;
    }

    match key.code {
        KeyCode::Esc => app.cancel(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter => activate(app),
        _ => {
            if !field_edit::handle_field_key(app, key) {
                handle_control_key(app, key);
            }
        }
    }
}

fn handle_control_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') => activate(app),
        KeyCode::Char('q') => app.cancel(),
        KeyCode::Char('a') => {
            if focus_order(&app.form).contains(&Focus::AddRow) {
                add_row(app);
            }
        }
        _ => {}
    }
}

fn add_row(app: &mut App) {
    if let FormOutcome::RowAdded { index } = app.apply_form_event(FormEvent::AddRow) {
        app.focus = Focus::Summary(index);
    }
}

/// Enter on a control: press the button / pick the radio / flip the box.
/// Enter in a field moves on to the next control.
fn activate(app: &mut App) {
    match app.focus {
        Focus::Action(i) => {
            let Some(name) = app.form.actions.actions().get(i).cloned() else {
                return;
            };
            app.apply_form_event(FormEvent::SelectAction { name });
        }
        Focus::TogglePanel => {
            app.apply_form_event(FormEvent::TogglePanel);
        }
        Focus::SplitOption(index) => {
            app.apply_form_event(FormEvent::ToggleOption { index });
        }
        Focus::RemoveRow(index) => {
            app.apply_form_event(FormEvent::RemoveRow { index });
        }
        Focus::AddRow => add_row(app),
        Focus::Submit => app.submit(),
        Focus::Existing | Focus::Summary(_) | Focus::Milestone(_) | Focus::Component(_) => {
            app.focus_next()
        }
    }
}
