//! Turn engine for a running match.
//!
//! - `TurnEngine`: Boards, turn holder, rights, turn number
//! - `PlayTarget`: Magic zone or battlefield

pub mod engine;

pub use engine::{PlayTarget, TurnEngine};
