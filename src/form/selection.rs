//! Existing-ticket selection: a checkbox list kept in sync with a free-text
//! field of `", "`-joined ticket ids.

use crate::model::{TicketId, TicketRecord};

use super::TextField;

pub const EXISTING_SEPARATOR: &str = ", ";
pub const TOGGLE_LABEL_CHOOSE: &str = "choose from list";
pub const TOGGLE_LABEL_HIDE: &str = "hide ticket list";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitOption {
    pub ticket: TicketRecord,
    pub checked: bool,
}

impl SplitOption {
    pub fn id(&self) -> TicketId {
        self.ticket.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitSelection {
    text: TextField,
    options: Vec<SplitOption>,
    panel_open: bool,
}

/// Tokens of the existing-tickets field. An empty field yields one empty
/// token, which matches no ticket id.
pub fn parse_existing(text: &str) -> Vec<&str> {
    text.split(EXISTING_SEPARATOR).collect()
}

pub fn join_existing(ids: &[TicketId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(EXISTING_SEPARATOR)
}

impl SplitSelection {
    pub fn new(tickets: Vec<TicketRecord>, existing: impl Into<String>) -> Self {
        Self {
            text: TextField::with_value(existing),
            options: tickets
                .into_iter()
                .map(|ticket| SplitOption {
                    ticket,
                    checked: false,
                })
                .collect(),
            panel_open: false,
        }
    }

    pub fn text(&self) -> &TextField {
        &self.text
    }

    /// Direct edits do not touch the checkboxes; they are reconciled the
    /// next time the panel opens.
    pub fn text_mut(&mut self) -> &mut TextField {
        &mut self.text
    }

    pub fn existing(&self) -> &str {
        self.text.as_str()
    }

    pub fn options(&self) -> &[SplitOption] {
        &self.options
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.panel_open {
            TOGGLE_LABEL_HIDE
        } else {
            TOGGLE_LABEL_CHOOSE
        }
    }

    /// Alternates between opening and closing the options panel. Returns
    /// whether the panel is now open.
    pub fn toggle_panel(&mut self) -> bool {
        if self.panel_open {
            self.close_panel();
        } else {
            self.open_panel();
        }
        self.panel_open
    }

    /// Re-checks the options from the text field, then shows the panel.
    pub fn open_panel(&mut self) {
        let wanted = parse_existing(self.text.as_str());
        for opt in &mut self.options {
            let id = opt.id().to_string();
            opt.checked = wanted.contains(&id.as_str());
        }
        self.panel_open = true;
    }

    /// Hides the panel. The text field is left as is.
    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    pub fn checked_ids(&self) -> Vec<TicketId> {
        self.options
            .iter()
            .filter(|o| o.checked)
            .map(|o| o.id())
            .collect()
    }

    /// Flips one checkbox and rewrites the text field. Returns the new
    /// checked state, or `None` if there is no such option.
    pub fn toggle_option(&mut self, idx: usize) -> Option<bool> {
        let opt = self.options.get_mut(idx)?;
        opt.checked = !opt.checked;
        let checked = opt.checked;
        self.sync_text();
        Some(checked)
    }

    fn sync_text(&mut self) {
        let joined = join_existing(&self.checked_ids());
        self.text.set(joined);
    }
}

#[cfg(test)]
#[path = "../tests/form/selection_tests.rs"]
mod tests;
