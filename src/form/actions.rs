//! Ticket action group and the split controls visibility it drives.

pub const ACTION_ID_PREFIX: &str = "action_";
pub const SPLIT_ACTION_ID: &str = "action_split";
pub const SPLIT_CONTROLS_ID: &str = "split-controls";

pub fn action_id(name: &str) -> String {
    format!("{}{}", ACTION_ID_PREFIX, name)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionGroup {
    actions: Vec<String>,
    selected: Option<usize>,
    split_controls_visible: bool,
}

impl ActionGroup {
    /// `split_controls_visible` is taken as given; it is not reconciled with
    /// `default_action` until the selection changes.
    pub fn new(
        actions: Vec<String>,
        default_action: Option<&str>,
        split_controls_visible: bool,
    ) -> Self {
        let selected = default_action.and_then(|d| actions.iter().position(|a| a == d));
        Self {
            actions,
            selected,
            split_controls_visible,
        }
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.actions.get(i))
            .map(|s| s.as_str())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn split_controls_visible(&self) -> bool {
        self.split_controls_visible
    }

    pub fn has_split_action(&self) -> bool {
        self.actions.iter().any(|a| action_id(a) == SPLIT_ACTION_ID)
    }

    /// Selects an action by name. Unknown names and re-selecting the current
    /// action change nothing.
    pub fn select(&mut self, name: &str) -> bool {
        match self.actions.iter().position(|a| a == name) {
            Some(idx) => self.select_index(idx),
            None => false,
        }
    }

    pub fn select_index(&mut self, idx: usize) -> bool {
        if idx >= self.actions.len() || self.selected == Some(idx) {
            return false;
        }
        self.selected = Some(idx);
        self.split_controls_visible = action_id(&self.actions[idx]) == SPLIT_ACTION_ID;
        true
    }
}

#[cfg(test)]
#[path = "../tests/form/actions_tests.rs"]
mod tests;
