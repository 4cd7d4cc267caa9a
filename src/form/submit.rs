use crate::submission::{ACTION_FIELD, EXISTING_FIELD, FormSubmission};

use super::{NewTicketRow, RowList, SplitForm};

pub const NEW_TICKET_FIELD_PREFIX: &str = "field_split_new_";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowField {
    Summary,
    Milestone,
    Component,
}

impl RowField {
    pub const ALL: [RowField; 3] = [RowField::Summary, RowField::Milestone, RowField::Component];

    pub fn suffix(self) -> &'static str {
        match self {
            RowField::Summary => "summary",
            RowField::Milestone => "milestone",
            RowField::Component => "component",
        }
    }
}

pub fn new_ticket_field_name(index: usize, field: RowField) -> String {
    format!("{}{}_{}", NEW_TICKET_FIELD_PREFIX, index, field.suffix())
}

/// `(summary && milestone) || component`, evaluated literally: a row with a
/// summary but no milestone is dropped unless a component is chosen, and a
/// row with only a component is kept.
pub fn is_non_empty(row: &NewTicketRow) -> bool {
    (!row.summary.is_empty() && row.milestone.selected_index() > 0)
        || row.component.selected_index() > 0
}

fn field_value(row: &NewTicketRow, field: RowField) -> &str {
    match field {
        RowField::Summary => row.summary.as_str(),
        RowField::Milestone => row.milestone.selected_value(),
        RowField::Component => row.component.selected_value(),
    }
}

/// Positionally named fields of the non-empty rows. Empty rows keep their
/// index slot but contribute nothing.
pub fn named_row_fields(rows: &RowList) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for (index, row) in rows.rows().iter().enumerate() {
        if !is_non_empty(row) {
            continue;
        }
        for field in RowField::ALL {
            out.push((
                new_ticket_field_name(index, field),
                field_value(row, field).to_string(),
            ));
        }
    }
    out
}

impl SplitForm {
    /// Collects the fields the form submits. Never blocks submission.
    pub fn prepare_submission(&self) -> FormSubmission {
        let mut submission = FormSubmission::default();
        if let Some(action) = self.actions.selected() {
            submission.push(ACTION_FIELD, action);
        }
        submission.push(EXISTING_FIELD, self.selection.existing());
        for (name, value) in named_row_fields(&self.rows) {
            submission.push(name, value);
        }
        submission
    }
}

#[cfg(test)]
#[path = "../tests/form/submit_tests.rs"]
mod tests;
