use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::history::SplitHistory;

use super::super::render_view_chrome;

pub(in crate::tui_shell) fn render_history(
    frame: &mut ratatui::Frame,
    area: Rect,
    history: &SplitHistory,
) {
    let inner = render_view_chrome(frame, "Split history", area);
    let gray = Style::default().fg(Color::Gray);

    let mut lines = Vec::new();
    if !history.from.is_empty() {
        lines.push(Line::from(Span::styled("Split from", gray)));
        for s in &history.from {
            lines.push(Line::from(vec![
                Span::styled(format!("#{} ", s.source), Style::default().fg(Color::Yellow)),
                Span::raw(s.summary.clone().unwrap_or_default()),
            ]));
            lines.push(Line::from(Span::styled(format!("  {}", s.time), gray)));
        }
    }
    if !history.to.is_empty() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled("Split to", gray)));
        for s in &history.to {
            lines.push(Line::from(vec![
                Span::styled(format!("#{} ", s.target), Style::default().fg(Color::Yellow)),
                Span::raw(s.summary.clone().unwrap_or_default()),
            ]));
            lines.push(Line::from(Span::styled(format!("  {}", s.time), gray)));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
