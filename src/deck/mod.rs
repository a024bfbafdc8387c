//! Deck composition and dealing.
//!
//! ## Key Types
//!
//! - `Deck`: Card id to positive copy count
//! - `DeckSource`: Main and side decks edited by the host, with listeners
//! - `DeckListener`: Observer notified on every main-deck edit
//! - `deal` / `deal_both`: The shuffle/deal engine

pub mod deal;
pub mod list;
pub mod source;

pub use deal::{deal, deal_both, Deal, DealLayout};
pub use list::Deck;
pub use source::{DeckListener, DeckSection, DeckSource};
