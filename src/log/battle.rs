//! Append-only battle log.
//!
//! Entries are never edited or removed individually; a match reset clears
//! the whole log. Ids are strictly increasing within a match. Whether they
//! continue across resets is governed by `LogIdPolicy`.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{LogIdPolicy, Side};

/// Something that happened in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogEvent {
    /// A side moved its top library card into its hand.
    Drew { side: Side },
    /// A side had to draw from an empty library.
    LibraryExhausted { side: Side },
    /// A side's turn ended.
    TurnEnded { side: Side },
    /// The human placed a card in the magic zone.
    PlacedInMagicZone { card: CardId, name: String },
    /// The human summoned a card to the battlefield.
    Summoned { card: CardId, name: String },
}

impl std::fmt::Display for LogEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogEvent::Drew { side: Side::Human } => write!(f, "You drew a card."),
            LogEvent::Drew { side: Side::Opponent } => write!(f, "The opponent drew a card."),
            LogEvent::LibraryExhausted { side: Side::Human } => {
                write!(f, "Your library is exhausted.")
            }
            LogEvent::LibraryExhausted { side: Side::Opponent } => {
                write!(f, "The opponent's library is exhausted.")
            }
            LogEvent::TurnEnded { side: Side::Human } => write!(f, "Your turn has ended."),
            LogEvent::TurnEnded { side: Side::Opponent } => {
                write!(f, "The opponent's turn has ended.")
            }
            LogEvent::PlacedInMagicZone { name, .. } => {
                write!(f, "You placed «{name}» in the magic zone.")
            }
            LogEvent::Summoned { name, .. } => {
                write!(f, "You summoned «{name}» to the battlefield.")
            }
        }
    }
}

/// One numbered log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub event: LogEvent,
    pub message: String,
}

/// The log for the current match.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BattleLog {
    entries: Vector<LogEntry>,
    next_id: u64,
    policy: LogIdPolicy,
}

impl BattleLog {
    #[must_use]
    pub fn new(policy: LogIdPolicy) -> Self {
        Self {
            entries: Vector::new(),
            next_id: 0,
            policy,
        }
    }

    /// Append an event and return its id.
    pub fn append(&mut self, event: LogEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = event.to_string();
        self.entries.push_back(LogEntry { id, event, message });
        id
    }

    /// Drop every entry for a new match. Restarts ids under `PerMatch`.
    pub fn clear(&mut self) {
        self.entries.clear();
        if self.policy == LogIdPolicy::PerMatch {
            self.next_id = 0;
        }
    }

    #[must_use]
    pub fn entries(&self) -> &Vector<LogEntry> {
        &self.entries
    }

    /// Rendered messages in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.message.as_str())
    }

    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Id the next entry will receive.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    #[must_use]
    pub fn policy(&self) -> LogIdPolicy {
        self.policy
    }
}
