//! Zone bookkeeping for a match.
//!
//! ## Key Types
//!
//! - `Zone`: Guardians, hand, magic zone, battlefield, graveyard
//! - `Board`: Every zone plus the library for one side
//! - `ResourceRights`: Per-turn placement and summon counters

pub mod board;
pub mod rights;

pub use board::{Board, Zone};
pub use rights::{ResourceRights, RightKind};
