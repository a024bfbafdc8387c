//! Battle log: the user-facing record of a match.
//!
//! Diagnostics go through `tracing`; this log is game output.

pub mod battle;

pub use battle::{BattleLog, LogEntry, LogEvent};
