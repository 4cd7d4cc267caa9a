use serde::{Deserialize, Serialize};

use super::TicketId;

/// Serializable snapshot of a split form, used for drafts and for
/// non-interactive submission preparation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket: Option<TicketId>,

    #[serde(default)]
    pub action: Option<String>,

    /// Contents of the existing-tickets text field.
    #[serde(default)]
    pub existing: String,

    /// Milestone select options; the first one is the unset placeholder.
    #[serde(default)]
    pub milestones: Vec<String>,

    /// Component select options; the first one is the unset placeholder.
    #[serde(default)]
    pub components: Vec<String>,

    #[serde(default)]
    pub rows: Vec<RowState>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowState {
    #[serde(default)]
    pub summary: String,
    /// Selected milestone option index.
    #[serde(default)]
    pub milestone: usize,
    /// Selected component option index.
    #[serde(default)]
    pub component: usize,
}
