//! Host-facing views of a session.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};
use crate::lifecycle::MatchPhase;
use crate::log::LogEntry;
use crate::zones::{Board, ResourceRights};

/// Which host controls are enabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    /// INITIAL or LESS_THAN_TEN.
    pub start: bool,
    /// Any phase but INITIAL.
    pub reset: bool,
    /// RUNNING and the human holds the turn.
    pub end_turn: bool,
    /// RUNNING and the opponent holds the turn.
    pub advance_turn: bool,
}

/// Everything the host renders, in one serializable value.
///
/// Zone and turn fields are `None` outside RUNNING and FINISHED.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub phase: MatchPhase,
    pub controls: Controls,
    pub turn_holder: Option<Side>,
    pub turn_number: Option<u32>,
    pub rights: Option<ResourceRights>,
    pub boards: Option<SideMap<Board>>,
    pub log: Vector<LogEntry>,
    /// Rendered message of the pending error, if any.
    pub error: Option<String>,
}

impl MatchSnapshot {
    /// Log messages in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(|entry| entry.message.as_str())
    }
}
