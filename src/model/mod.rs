mod board;
mod config;
mod ids;
mod state;

pub use self::board::{Board, CLOSED_STATUS, MilestoneRecord, SplitRecord, TicketRecord};
pub use self::config::FormConfig;
pub use self::ids::TicketId;
pub use self::state::{FormState, RowState};
