use super::{Choice, TextField};

/// One "new ticket" sub-form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewTicketRow {
    pub summary: TextField,
    pub milestone: Choice,
    pub component: Choice,
}

impl NewTicketRow {
    pub fn new(milestones: Vec<String>, components: Vec<String>) -> Self {
        Self {
            summary: TextField::default(),
            milestone: Choice::new(milestones),
            component: Choice::new(components),
        }
    }

    /// Empty summary, both selects back on their first option.
    pub fn reset(&mut self) {
        self.summary.clear();
        self.milestone.reset();
        self.component.reset();
    }

    pub fn is_default(&self) -> bool {
        self.summary.is_empty()
            && self.milestone.selected_index() == 0
            && self.component.selected_index() == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The row was the only one; it was cleared instead.
    Cleared,
    Missing,
}

/// Ordered new-ticket rows. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowList {
    rows: Vec<NewTicketRow>,
}

impl RowList {
    pub fn new(first: NewTicketRow) -> Self {
        Self { rows: vec![first] }
    }

    /// Builds a list from existing rows; an empty input falls back to
    /// `template`.
    pub fn from_rows(rows: Vec<NewTicketRow>, template: NewTicketRow) -> Self {
        if rows.is_empty() {
            Self::new(template)
        } else {
            Self { rows }
        }
    }

    pub fn rows(&self) -> &[NewTicketRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&NewTicketRow> {
        self.rows.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut NewTicketRow> {
        self.rows.get_mut(idx)
    }

    /// Appends a reset copy of the first row and returns its index.
    pub fn add(&mut self) -> usize {
        // rows is never empty
        let mut row = self.rows[0].clone();
        row.reset();
        self.rows.push(row);
        self.rows.len() - 1
    }

    pub fn remove(&mut self, idx: usize) -> RemoveOutcome {
        if idx >= self.rows.len() {
            return RemoveOutcome::Missing;
        }
        if self.rows.len() == 1 {
            self.rows[idx].reset();
            return RemoveOutcome::Cleared;
        }
        self.rows.remove(idx);
        RemoveOutcome::Removed
    }
}

#[cfg(test)]
#[path = "../tests/form/rows_tests.rs"]
mod tests;
