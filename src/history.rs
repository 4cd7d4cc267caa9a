use serde::Serialize;
use time::OffsetDateTime;

use crate::model::{Board, TicketId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SplitSource {
    pub source: TicketId,
    pub summary: Option<String>,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SplitTarget {
    pub target: TicketId,
    pub summary: Option<String>,
    pub time: String,
}

/// Splits into and out of one ticket.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SplitHistory {
    pub from: Vec<SplitSource>,
    pub to: Vec<SplitTarget>,
}

impl SplitHistory {
    pub fn is_empty(&self) -> bool {
        self.from.is_empty() && self.to.is_empty()
    }
}

/// `YYYY/MM/DD - HH:MM:SS` in UTC. Out-of-range timestamps print raw.
pub fn fmt_split_time(secs: i64) -> String {
    let Ok(dt) = OffsetDateTime::from_unix_timestamp(secs) else {
        return secs.to_string();
    };
    format!(
        "{:04}/{:02}/{:02} - {:02}:{:02}:{:02}",
        dt.year(),
        u8::from(dt.month()),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second()
    )
}

pub fn split_history(board: &Board, ticket: TicketId) -> SplitHistory {
    let summary_of = |id: TicketId| board.ticket(id).map(|t| t.summary.clone());

    let from = board
        .splits
        .iter()
        .filter(|s| s.split_to == ticket)
        .map(|s| SplitSource {
            source: s.ticket,
            summary: summary_of(s.ticket),
            time: fmt_split_time(s.split_at),
        })
        .collect();

    let mut to_records = board
        .splits
        .iter()
        .filter(|s| s.ticket == ticket)
        .collect::<Vec<_>>();
    to_records.sort_by_key(|s| s.split_to);
    let to = to_records
        .into_iter()
        .map(|s| SplitTarget {
            target: s.split_to,
            summary: summary_of(s.split_to),
            time: fmt_split_time(s.split_at),
        })
        .collect();

    SplitHistory { from, to }
}

#[cfg(test)]
#[path = "tests/history_tests.rs"]
mod tests;
