use crate::form::Choice;

use super::*;

fn choice_span(choice: &Choice, focused: bool) -> Span<'static> {
    let value = choice.selected_value();
    let label = if value.is_empty() { "(none)" } else { value };
    Span::styled(format!("< {} >", label), focus_style(focused))
}

pub(super) fn push_row_lines(app: &App, out: &mut FormLines) {
    out.push(
        Line::from(Span::styled("New tickets:", Style::default().fg(Color::Gray))),
        false,
    );

    for (i, row) in app.form.rows.rows().iter().enumerate() {
        let summary_focused = app.focus == Focus::Summary(i);
        let mut spans = vec![Span::raw(format!("  {}. Summary: ", i + 1))];
        spans.extend(text_spans(&row.summary, summary_focused));
        out.push(Line::from(spans), summary_focused);

        let milestone_focused = app.focus == Focus::Milestone(i);
        let component_focused = app.focus == Focus::Component(i);
        let remove_focused = app.focus == Focus::RemoveRow(i);
        out.push(
            Line::from(vec![
                Span::raw("     Milestone: "),
                choice_span(&row.milestone, milestone_focused),
                Span::raw("  Component: "),
                choice_span(&row.component, component_focused),
                Span::raw("  "),
                button("remove", remove_focused),
            ]),
            milestone_focused || component_focused || remove_focused,
        );
    }

    let add_focused = app.focus == Focus::AddRow;
    out.push(
        Line::from(vec![Span::raw("  "), button("add ticket", add_focused)]),
        add_focused,
    );
}
