use serde::{Deserialize, Serialize};

use super::TicketId;

pub const CLOSED_STATUS: &str = "closed";

fn default_status() -> String {
    "new".to_string()
}

/// Snapshot of the tracker data the split form is built from.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    pub version: u32,

    /// Milestones in tracker order.
    #[serde(default)]
    pub milestones: Vec<MilestoneRecord>,

    #[serde(default)]
    pub components: Vec<String>,

    #[serde(default)]
    pub tickets: Vec<TicketRecord>,

    /// Recorded splits (`ticket` was split to `split_to`).
    #[serde(default)]
    pub splits: Vec<SplitRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneRecord {
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    pub id: TicketId,
    pub summary: String,
    #[serde(default)]
    pub milestone: String,
    #[serde(default)]
    pub component: String,
    #[serde(default = "default_status")]
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRecord {
    pub ticket: TicketId,
    pub split_to: TicketId,
    /// Unix seconds.
    pub split_at: i64,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            version: 1,
            ..Self::default()
        }
    }

    /// Names of milestones that are not completed, in board order.
    pub fn active_milestones(&self) -> Vec<&str> {
        self.milestones
            .iter()
            .filter(|m| !m.completed)
            .map(|m| m.name.as_str())
            .collect()
    }

    pub fn ticket(&self, id: TicketId) -> Option<&TicketRecord> {
        self.tickets.iter().find(|t| t.id == id)
    }
}

impl TicketRecord {
    pub fn is_closed(&self) -> bool {
        self.status == CLOSED_STATUS
    }
}
