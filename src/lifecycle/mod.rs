//! Match lifecycle state machine.
//!
//! ## Key Types
//!
//! - `MatchPhase`: INITIAL, LESS_THAN_TEN, RUNNING, ABORTED, FINISHED
//! - `MatchAction`: START, CHECK_MAIN_DECK, INTERRUPT, RESET, FINISH
//! - `reduce`: Pure transition function
//! - `PhaseMachine`: Owner of the current phase
//! - `MatchHandle`: Shared interrupt-only handle; a `DeckListener`

pub mod machine;
pub mod phase;

pub use machine::{MatchHandle, PhaseMachine};
pub use phase::{reduce, MatchAction, MatchPhase, Transition};
