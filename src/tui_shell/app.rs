use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::form::{FormEvent, FormOutcome, SplitForm};
use crate::history::{SplitHistory, split_history};
use crate::model::Board;
use crate::store::LocalStore;
use crate::tui::TuiOutcome;

mod event_loop;
mod focus;
mod lifecycle;
mod log;
mod render;
mod runtime;
mod submit;
mod time_utils;
mod trace;

pub(in crate::tui_shell) use self::focus::{Focus, focus_order};
use self::log::{EntryKind, ScrollEntry};
pub(super) use self::runtime::run;
use self::time_utils::{fmt_ts_ui, now_ts};
use self::trace::{TraceStats, TraceWriter};

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) store: Option<LocalStore>,
    pub(in crate::tui_shell) board: Board,
    pub(in crate::tui_shell) form: SplitForm,
    pub(in crate::tui_shell) history: SplitHistory,

    pub(in crate::tui_shell) focus: Focus,
    pub(in crate::tui_shell) dev_warnings: bool,

    pub(in crate::tui_shell) trace: Option<TraceWriter>,
    pub(in crate::tui_shell) trace_stats: TraceStats,

    pub(in crate::tui_shell) submit_url: Option<String>,

    pub(in crate::tui_shell) last_result: Option<ScrollEntry>,

    pub(in crate::tui_shell) outcome: Option<TuiOutcome>,
    pub(in crate::tui_shell) quit: bool,
}

impl App {
    pub(in crate::tui_shell) fn new(form: SplitForm, board: Board) -> Self {
        let history = match form.ticket {
            Some(ticket) => split_history(&board, ticket),
            None => SplitHistory::default(),
        };
        Self {
            store: None,
            board,
            form,
            history,
            focus: Focus::Action(0),
            dev_warnings: false,
            trace: None,
            trace_stats: TraceStats::default(),
            submit_url: None,
            last_result: None,
            outcome: None,
            quit: false,
        }
    }

    /// Applies one form event and reports what it did.
    pub(in crate::tui_shell) fn apply_form_event(&mut self, event: FormEvent) -> FormOutcome {
        let outcome = self.form.apply(&event);
        self.trace_form_event(&event, &outcome);
        if let Some(msg) = describe_outcome(&outcome) {
            self.push_output(vec![msg]);
        }
        self.normalize_focus();
        outcome
    }

    pub(in crate::tui_shell) fn cancel(&mut self) {
        self.outcome = Some(TuiOutcome::Cancelled);
        self.quit = true;
    }
}

fn describe_outcome(outcome: &FormOutcome) -> Option<String> {
    let msg = match outcome {
        FormOutcome::Unchanged => return None,
        FormOutcome::ActionSelected {
            split_controls_visible,
        } => {
            if *split_controls_visible {
                "split controls shown".to_string()
            } else {
                "split controls hidden".to_string()
            }
        }
        FormOutcome::PanelOpened { checked } => format!("ticket list opened ({} checked)", checked),
        FormOutcome::PanelClosed => "ticket list hidden".to_string(),
        FormOutcome::OptionToggled { id, checked } => {
            if *checked {
                format!("#{} selected", id)
            } else {
                format!("#{} deselected", id)
            }
        }
        FormOutcome::RowAdded { index } => format!("added new ticket {}", index + 1),
        FormOutcome::RowRemoved { index } => format!("removed new ticket {}", index + 1),
        FormOutcome::RowCleared { index } => format!("cleared new ticket {}", index + 1),
    };
    Some(msg)
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
