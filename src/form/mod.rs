//! The split form controller: action group, existing-ticket selection and
//! new-ticket rows, held as one explicit model.

use anyhow::{Result, bail};
use serde::Serialize;

use crate::model::{Board, FormConfig, FormState, RowState, TicketId};
use crate::options::split_options;

mod actions;
mod choice;
mod rows;
mod selection;
mod submit;
mod text_field;

pub use self::actions::{
    ACTION_ID_PREFIX, ActionGroup, SPLIT_ACTION_ID, SPLIT_CONTROLS_ID, action_id,
};
pub use self::choice::Choice;
pub use self::rows::{NewTicketRow, RemoveOutcome, RowList};
pub use self::selection::{
    EXISTING_SEPARATOR, SplitOption, SplitSelection, TOGGLE_LABEL_CHOOSE, TOGGLE_LABEL_HIDE,
    join_existing, parse_existing,
};
pub use self::submit::{
    NEW_TICKET_FIELD_PREFIX, RowField, is_non_empty, named_row_fields,
    new_ticket_field_name,
};
pub use self::text_field::TextField;

/// A discrete user action on the form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormEvent {
    SelectAction { name: String },
    TogglePanel,
    ToggleOption { index: usize },
    AddRow,
    RemoveRow { index: usize },
}

/// What an event did. `Unchanged` covers events aimed at missing structure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormOutcome {
    Unchanged,
    ActionSelected { split_controls_visible: bool },
    PanelOpened { checked: usize },
    PanelClosed,
    OptionToggled { id: TicketId, checked: bool },
    RowAdded { index: usize },
    RowRemoved { index: usize },
    RowCleared { index: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitForm {
    pub ticket: Option<TicketId>,
    pub actions: ActionGroup,
    pub selection: SplitSelection,
    pub rows: RowList,
}

fn with_placeholder<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    std::iter::once(String::new())
        .chain(names.into_iter().map(str::to_string))
        .collect()
}

impl SplitForm {
    /// Builds the form for splitting `ticket`. Mounted once per UI session.
    pub fn new(config: &FormConfig, board: &Board, ticket: TicketId) -> Self {
        let actions = ActionGroup::new(
            config.actions.clone(),
            config.default_action.as_deref(),
            config.split_controls_visible,
        );
        let options = split_options(board, ticket);
        let selection = SplitSelection::new(options.tickets().cloned().collect(), "");
        let template = NewTicketRow::new(
            with_placeholder(board.active_milestones()),
            with_placeholder(board.components.iter().map(|c| c.as_str())),
        );
        Self {
            ticket: Some(ticket),
            actions,
            selection,
            rows: RowList::new(template),
        }
    }

    /// Restores a saved form. The checkbox list is empty; only the text field
    /// carries the existing-ticket selection.
    pub fn from_state(config: &FormConfig, state: &FormState) -> Result<Self> {
        let actions = ActionGroup::new(
            config.actions.clone(),
            state.action.as_deref(),
            config.split_controls_visible,
        );
        if let Some(action) = state.action.as_deref()
            && actions.selected() != Some(action)
        {
            bail!("unknown action `{}` in form state", action);
        }

        let template = NewTicketRow::new(state.milestones.clone(), state.components.clone());
        let mut rows = Vec::new();
        for (i, r) in state.rows.iter().enumerate() {
            let mut row = template.clone();
            row.summary.set(r.summary.clone());
            if !row.milestone.select(r.milestone) && r.milestone != 0 {
                bail!(
                    "row {}: milestone index {} out of range ({} options)",
                    i,
                    r.milestone,
                    row.milestone.len()
                );
            }
            if !row.component.select(r.component) && r.component != 0 {
                bail!(
                    "row {}: component index {} out of range ({} options)",
                    i,
                    r.component,
                    row.component.len()
                );
            }
            rows.push(row);
        }

        Ok(Self {
            ticket: state.ticket,
            actions,
            selection: SplitSelection::new(Vec::new(), state.existing.clone()),
            rows: RowList::from_rows(rows, template),
        })
    }

    pub fn to_state(&self) -> FormState {
        let first = &self.rows.rows()[0];
        FormState {
            ticket: self.ticket,
            action: self.actions.selected().map(str::to_string),
            existing: self.selection.existing().to_string(),
            milestones: first.milestone.options().to_vec(),
            components: first.component.options().to_vec(),
            rows: self
                .rows
                .rows()
                .iter()
                .map(|r| RowState {
                    summary: r.summary.as_str().to_string(),
                    milestone: r.milestone.selected_index(),
                    component: r.component.selected_index(),
                })
                .collect(),
        }
    }

    pub fn apply(&mut self, event: &FormEvent) -> FormOutcome {
        match event {
            FormEvent::SelectAction { name } => {
                if self.actions.select(name) {
                    FormOutcome::ActionSelected {
                        split_controls_visible: self.actions.split_controls_visible(),
                    }
                } else {
                    FormOutcome::Unchanged
                }
            }
            FormEvent::TogglePanel => {
                if self.selection.toggle_panel() {
                    FormOutcome::PanelOpened {
                        checked: self.selection.checked_ids().len(),
                    }
                } else {
                    FormOutcome::PanelClosed
                }
            }
            FormEvent::ToggleOption { index } => {
                let id = self.selection.options().get(*index).map(|o| o.id());
                match (id, self.selection.toggle_option(*index)) {
                    (Some(id), Some(checked)) => FormOutcome::OptionToggled { id, checked },
                    _ => FormOutcome::Unchanged,
                }
            }
            FormEvent::AddRow => FormOutcome::RowAdded {
                index: self.rows.add(),
            },
            FormEvent::RemoveRow { index } => match self.rows.remove(*index) {
                RemoveOutcome::Removed => FormOutcome::RowRemoved { index: *index },
                RemoveOutcome::Cleared => FormOutcome::RowCleared { index: *index },
                RemoveOutcome::Missing => FormOutcome::Unchanged,
            },
        }
    }

    /// Structure the form expects but does not have. The controls involved
    /// stay inert either way.
    pub fn structure_warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        if !self.actions.has_split_action() {
            out.push(format!(
                "no `{}` action configured; `{}` can never be shown",
                SPLIT_ACTION_ID, SPLIT_CONTROLS_ID
            ));
        }
        if self.selection.options().is_empty() {
            out.push("no split options available; the ticket list is empty".to_string());
        }
        let first = &self.rows.rows()[0];
        if first.milestone.len() <= 1 {
            out.push("no milestone options for new tickets".to_string());
        }
        if first.component.len() <= 1 {
            out.push("no component options for new tickets".to_string());
        }
        out
    }
}

#[cfg(test)]
#[path = "../tests/form/form_tests.rs"]
mod tests;
