use super::*;

pub(super) fn push_action_lines(app: &App, out: &mut FormLines) {
    let selected = app.form.actions.selected_index();
    let mut spans = vec![Span::styled("Action: ", Style::default().fg(Color::Gray))];
    let mut any_focused = false;

    for (i, name) in app.form.actions.actions().iter().enumerate() {
        let focused = app.focus == Focus::Action(i);
        any_focused |= focused;
        let mark = if selected == Some(i) { "(*)" } else { "( )" };
        spans.push(Span::styled(
            format!("{} {}", mark, name),
            focus_style(focused),
        ));
        spans.push(Span::raw("  "));
    }
    if app.form.actions.actions().is_empty() {
        spans.push(Span::styled("(no actions)", Style::default().fg(Color::DarkGray)));
    }

    out.push(Line::from(spans), any_focused);
}
