//! Tickets a ticket may be split to, grouped milestone > component > ticket.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::model::{Board, TicketId, TicketRecord};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentGroup {
    pub component: String,
    pub tickets: Vec<TicketRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MilestoneGroup {
    pub milestone: String,
    pub components: Vec<ComponentGroup>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SplitOptions {
    pub groups: Vec<MilestoneGroup>,
}

/// Open tickets in active milestones, excluding `current`. Ordered by
/// milestone position, then component, then id.
pub fn split_options(board: &Board, current: TicketId) -> SplitOptions {
    let milestones = board.active_milestones();

    let mut tickets = board
        .tickets
        .iter()
        .filter(|t| !t.is_closed() && t.id != current)
        .filter(|t| milestones.contains(&t.milestone.as_str()))
        .collect::<Vec<_>>();

    tickets.sort_by(|a, b| a.component.cmp(&b.component).then(a.id.cmp(&b.id)));
    // sort_by_key is stable, so component/id order survives within a milestone.
    tickets.sort_by_key(|t| {
        milestones
            .iter()
            .position(|m| *m == t.milestone)
            .unwrap_or(usize::MAX)
    });

    let mut out = SplitOptions::default();
    for t in tickets {
        if out.groups.last().map(|g| g.milestone.as_str()) != Some(t.milestone.as_str()) {
            out.groups.push(MilestoneGroup {
                milestone: t.milestone.clone(),
                components: Vec::new(),
            });
        }
        let Some(group) = out.groups.last_mut() else {
            continue;
        };
        match group.components.iter_mut().find(|c| c.component == t.component) {
            Some(c) => c.tickets.push(t.clone()),
            None => group.components.push(ComponentGroup {
                component: t.component.clone(),
                tickets: vec![t.clone()],
            }),
        }
    }
    out
}

impl SplitOptions {
    pub fn tickets(&self) -> impl Iterator<Item = &TicketRecord> {
        self.groups
            .iter()
            .flat_map(|g| g.components.iter())
            .flat_map(|c| c.tickets.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Drops tickets that do not match the filter, then any groups left
    /// empty.
    pub fn filtered(self, filter: &OptionFilter) -> Self {
        let groups = self
            .groups
            .into_iter()
            .filter(|g| filter.matches_milestone(&g.milestone))
            .map(|g| MilestoneGroup {
                milestone: g.milestone,
                components: g
                    .components
                    .into_iter()
                    .filter(|c| filter.matches_component(&c.component))
                    .collect(),
            })
            .filter(|g| !g.components.is_empty())
            .collect();
        Self { groups }
    }
}

fn is_glob_query(s: &str) -> bool {
    s.contains('*') || s.contains('?') || s.contains('[')
}

fn glob_matcher(query: &str) -> Result<globset::GlobMatcher> {
    let q = query.trim();
    let pattern = if is_glob_query(q) {
        q.to_string()
    } else {
        format!("*{}*", q)
    };
    let glob = globset::GlobBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .with_context(|| format!("invalid glob: {}", pattern))?;
    Ok(glob.compile_matcher())
}

/// Milestone/component name filters. Plain text matches as a substring.
#[derive(Clone, Debug, Default)]
pub struct OptionFilter {
    milestone: Option<globset::GlobMatcher>,
    component: Option<globset::GlobMatcher>,
}

impl OptionFilter {
    pub fn new(milestone: Option<&str>, component: Option<&str>) -> Result<Self> {
        Ok(Self {
            milestone: milestone.map(glob_matcher).transpose()?,
            component: component.map(glob_matcher).transpose()?,
        })
    }

    pub fn matches_milestone(&self, name: &str) -> bool {
        self.milestone.as_ref().is_none_or(|m| m.is_match(name))
    }

    pub fn matches_component(&self, name: &str) -> bool {
        self.component.as_ref().is_none_or(|m| m.is_match(name))
    }
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
