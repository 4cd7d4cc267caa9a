use super::*;
use crate::tui_shell::views::{render_form, render_history};

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    // Header
    let ticket = match app.form.ticket {
        Some(id) => format!("#{}", id),
        None => "(no ticket)".to_string(),
    };
    let summary = app
        .form
        .ticket
        .and_then(|id| app.board.ticket(id))
        .map(|t| t.summary.clone())
        .unwrap_or_default();
    let location = app
        .store
        .as_ref()
        .map(|s| s.root().display().to_string())
        .unwrap_or_default();
    let spans = vec![
        Span::styled(
            "Split ticket",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(ticket, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::raw(summary),
        Span::raw("  "),
        Span::styled(location, Style::default().fg(Color::Gray)),
    ];
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    // Form (+ history when there is any)
    if app.history.is_empty() {
        render_form(frame, chunks[1], app);
    } else {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(44)])
            .split(chunks[1]);
        render_form(frame, body[0], app);
        render_history(frame, body[1], &app.history);
    }

    // Last result
    {
        let mut lines = Vec::new();
        if let Some(r) = &app.last_result {
            let style = match r.kind {
                EntryKind::Output => Style::default().fg(Color::White),
                EntryKind::Error => Style::default().fg(Color::Red),
            };
            for (i, l) in r.lines.iter().enumerate() {
                if i == 0 {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{} ", fmt_ts_ui(&r.ts)),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::styled(l.as_str(), style),
                    ]));
                } else {
                    lines.push(Line::from(Span::styled(l.as_str(), style)));
                }
            }
        }
        if lines.is_empty() {
            lines.push(Line::from(""));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::TOP).title("Last")),
            chunks[2],
        );
    }

    // Key hints
    let hint = Paragraph::new(Line::from(Span::styled(
        key_hint(app.focus),
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::DIM),
    )));
    frame.render_widget(hint, chunks[3]);
}

fn key_hint(focus: Focus) -> &'static str {
    match focus {
        Focus::Existing | Focus::Summary(_) => "type to edit  tab/up/down: move  enter: next  esc: cancel",
        Focus::Milestone(_) | Focus::Component(_) => {
            "left/right: choose  tab/up/down: move  esc: cancel"
        }
        Focus::Submit => "enter: submit  tab/up/down: move  esc: cancel",
        _ => "enter/space: activate  a: add ticket  tab/up/down: move  q/esc: cancel",
    }
}
