use super::*;

pub(super) fn push_selection_lines(app: &App, out: &mut FormLines) {
    let selection = &app.form.selection;

    let existing_focused = app.focus == Focus::Existing;
    let toggle_focused = app.focus == Focus::TogglePanel;
    let mut spans = vec![Span::styled(
        "Split to existing tickets: ",
        Style::default().fg(Color::Gray),
    )];
    spans.extend(text_spans(selection.text(), existing_focused));
    spans.push(Span::raw("  "));
    spans.push(button(selection.toggle_label(), toggle_focused));
    out.push(Line::from(spans), existing_focused || toggle_focused);

    if !selection.panel_open() {
        return;
    }
    if selection.options().is_empty() {
        out.push(
            Line::from(Span::styled(
                "  (no tickets to choose from)",
                Style::default().fg(Color::DarkGray),
            )),
            false,
        );
        return;
    }

    let mut milestone: Option<&str> = None;
    let mut component: Option<&str> = None;
    for (i, opt) in selection.options().iter().enumerate() {
        let t = &opt.ticket;
        if milestone != Some(t.milestone.as_str()) {
            milestone = Some(t.milestone.as_str());
            component = None;
            out.push(
                Line::from(Span::styled(
                    format!("  {}", t.milestone),
                    Style::default().fg(Color::Yellow),
                )),
                false,
            );
        }
        if component != Some(t.component.as_str()) {
            component = Some(t.component.as_str());
            let name = if t.component.is_empty() {
                "(no component)"
            } else {
                t.component.as_str()
            };
            out.push(
                Line::from(Span::styled(
                    format!("    {}", name),
                    Style::default().fg(Color::Magenta),
                )),
                false,
            );
        }

        let focused = app.focus == Focus::SplitOption(i);
        let mark = if opt.checked { "[x]" } else { "[ ]" };
        out.push(
            Line::from(Span::styled(
                format!("      {} #{} {}", mark, t.id, t.summary),
                focus_style(focused),
            )),
            focused,
        );
    }
}
