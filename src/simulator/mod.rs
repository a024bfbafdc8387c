//! Simulator session: the entry point for the host application.
//!
//! ## Key Types
//!
//! - `Simulator`: Lifecycle, turns, error slot and views for one session
//! - `Controls`: Which host controls are enabled
//! - `MatchSnapshot`: Serializable view of the whole session

mod session;
mod snapshot;

pub use session::Simulator;
pub use snapshot::{Controls, MatchSnapshot};
