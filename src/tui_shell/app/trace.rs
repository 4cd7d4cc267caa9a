use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::json;

use crate::submission::FormSubmission;

use super::*;

#[derive(Debug, Default)]
pub(in crate::tui_shell) struct TraceStats {
    pub(in crate::tui_shell) user_actions: u64,
    pub(in crate::tui_shell) form_events: u64,
    pub(in crate::tui_shell) structure_warnings: u64,
    pub(in crate::tui_shell) errors: u64,
}

/// JSON-lines event log of one form session.
#[derive(Debug)]
pub(in crate::tui_shell) struct TraceWriter {
    out: BufWriter<File>,
    path: PathBuf,
    seq: u64,
}

impl TraceWriter {
    pub(in crate::tui_shell) fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!(
                    "create parent directories for trace path {}",
                    path.display()
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open trace file {}", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
            seq: 0,
        })
    }

    fn write_event<T: Serialize>(&mut self, event: &str, payload: T) -> Result<()> {
        self.seq += 1;
        let line = json!({
            "seq": self.seq,
            "ts": now_ts(),
            "event": event,
            "payload": payload
        });
        serde_json::to_writer(&mut self.out, &line).context("serialize trace event")?;
        self.out.write_all(b"\n").context("write trace newline")?;
        self.out.flush().context("flush trace event")?;
        Ok(())
    }
}

impl App {
    pub(in crate::tui_shell) fn enable_trace(&mut self, path: Option<PathBuf>) {
        let Some(path) = path else {
            return;
        };
        match TraceWriter::open(&path) {
            Ok(mut writer) => {
                let _ = writer.write_event(
                    "session_start",
                    json!({
                        "cwd": std::env::current_dir().ok().map(|p| p.display().to_string()),
                        "ticket": self.form.ticket,
                        "action": self.form.actions.selected(),
                        "split_controls_visible": self.form.actions.split_controls_visible(),
                        "split_options": self.form.selection.options().len(),
                    }),
                );
                self.trace = Some(writer);
                self.push_output(vec![format!("trace enabled: {}", path.display())]);
            }
            Err(err) => {
                self.push_error(format!("trace disabled: {:#}", err));
            }
        }
    }

    pub(in crate::tui_shell) fn trace_key_action(&mut self, key: KeyEvent) {
        self.trace_stats.user_actions += 1;
        self.write_trace_event(
            "user_action",
            json!({
                "source": "keyboard",
                "key": key_to_string(&key),
                "focus": format!("{:?}", self.focus),
            }),
        );
    }

    pub(in crate::tui_shell) fn trace_form_event(&mut self, event: &FormEvent, outcome: &FormOutcome) {
        self.trace_stats.form_events += 1;
        self.write_trace_event(
            "form_event",
            json!({
                "event": event,
                "outcome": outcome,
                "existing": self.form.selection.existing(),
                "rows": self.form.rows.len(),
            }),
        );
    }

    pub(in crate::tui_shell) fn trace_warning(&mut self, msg: &str) {
        self.trace_stats.structure_warnings += 1;
        self.write_trace_event("structure_warning", json!({ "message": msg }));
    }

    pub(in crate::tui_shell) fn trace_error(&mut self, msg: &str) {
        self.trace_stats.errors += 1;
        self.write_trace_event("error", json!({ "message": msg }));
    }

    pub(in crate::tui_shell) fn trace_submit(&mut self, submission: &FormSubmission) {
        self.write_trace_event("submit", json!({ "fields": submission.fields }));
    }

    pub(in crate::tui_shell) fn trace_session_end(&mut self, reason: &str) {
        self.write_trace_event(
            "session_end",
            json!({
                "reason": reason,
                "stats": {
                    "user_actions": self.trace_stats.user_actions,
                    "form_events": self.trace_stats.form_events,
                    "structure_warnings": self.trace_stats.structure_warnings,
                    "errors": self.trace_stats.errors
                },
                "trace_path": self.trace.as_ref().map(|w| w.path.display().to_string()),
            }),
        );
    }

    fn write_trace_event<T: Serialize>(&mut self, event: &str, payload: T) {
        let Some(writer) = self.trace.as_mut() else {
            return;
        };
        if writer.write_event(event, payload).is_err() {
            self.trace = None;
        }
    }
}

fn key_to_string(key: &KeyEvent) -> String {
    let mut parts = Vec::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("ctrl".to_string());
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("alt".to_string());
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("shift".to_string());
    }
    let code = match key.code {
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "backtab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        other => format!("{:?}", other).to_lowercase(),
    };
    parts.push(code);
    parts.join("+")
}
