use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::form::TextField;

use super::super::{App, Focus, render_view_chrome};

mod actions;
mod rows;
mod selection;

/// Lines of the form body plus the line holding the focused control, so the
/// body can scroll to keep it on screen.
#[derive(Default)]
struct FormLines {
    lines: Vec<Line<'static>>,
    focus_line: Option<usize>,
}

impl FormLines {
    fn push(&mut self, line: Line<'static>, focused: bool) {
        if focused {
            self.focus_line = Some(self.lines.len());
        }
        self.lines.push(line);
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn button(label: &str, focused: bool) -> Span<'static> {
    Span::styled(format!("[{}]", label), focus_style(focused).fg(Color::Cyan))
}

fn text_spans(field: &TextField, focused: bool) -> Vec<Span<'static>> {
    if !focused {
        if field.is_empty() {
            return vec![Span::styled("____", Style::default().fg(Color::DarkGray))];
        }
        return vec![Span::raw(field.as_str().to_string())];
    }

    let chars = field.as_str().chars().collect::<Vec<_>>();
    let at = field.cursor().min(chars.len());
    let before = chars[..at].iter().collect::<String>();
    let cursor = chars.get(at).map(|c| c.to_string()).unwrap_or(" ".to_string());
    let after = chars.get(at + 1..).map(|s| s.iter().collect::<String>()).unwrap_or_default();

    let base = focus_style(true);
    vec![
        Span::styled(before, base),
        Span::styled(cursor, base.add_modifier(Modifier::REVERSED)),
        Span::styled(after, base),
    ]
}

fn scroll_for(focus_line: Option<usize>, height: u16) -> u16 {
    let h = height as usize;
    match focus_line {
        Some(line) if h > 0 && line >= h => (line + 1 - h) as u16,
        _ => 0,
    }
}

pub(in crate::tui_shell) fn render_form(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let inner = render_view_chrome(frame, "Split", area);

    let mut out = FormLines::default();
    actions::push_action_lines(app, &mut out);
    out.push(Line::from(""), false);

    if app.form.actions.split_controls_visible() {
        selection::push_selection_lines(app, &mut out);
        out.push(Line::from(""), false);
        rows::push_row_lines(app, &mut out);
    } else {
        out.push(
            Line::from(Span::styled(
                "(select `split` to split this ticket)",
                Style::default().fg(Color::Gray),
            )),
            false,
        );
    }

    out.push(Line::from(""), false);
    let submit_focused = app.focus == Focus::Submit;
    out.push(Line::from(button("submit", submit_focused)), submit_focused);

    let scroll = scroll_for(out.focus_line, inner.height);
    frame.render_widget(Paragraph::new(out.lines).scroll((scroll, 0)), inner);
}
