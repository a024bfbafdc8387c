//! # deck-simulator
//!
//! A mock-match simulator for a deck-building card game: deal both sides
//! from the deck being edited, then alternate turns against an opponent
//! that only draws.
//!
//! ## Design Principles
//!
//! 1. **Explicit lifecycle**: A finite state machine (`MatchPhase`,
//!    `MatchAction`) gates everything. The `Simulator` dispatches every
//!    action; outside components hold a `MatchHandle` that can only raise
//!    INTERRUPT.
//!
//! 2. **Injected randomness**: Dealing draws from a seedable `GameRng`, so a
//!    fixed seed reproduces an exact deal.
//!
//! 3. **Observer invalidation**: Deck edits reach a running match as
//!    INTERRUPT through the `DeckListener` subscription, never by polling.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, configuration, errors
//! - `cards`: Card ids and the catalog seam
//! - `deck`: Deck mapping, shuffle/deal engine, deck source
//! - `zones`: Per-side boards and resource rights
//! - `lifecycle`: Match state machine
//! - `turn`: Turn engine
//! - `log`: Battle log
//! - `simulator`: The session object the host drives
//!
//! ## Example
//!
//! ```
//! use deck_simulator::{
//!     CardId, CardRegistry, DeckSection, DeckSource, GameRng, MatchPhase, Side, Simulator,
//!     SimulatorConfig,
//! };
//!
//! let mut source = DeckSource::new();
//! for id in 1..=5 {
//!     for _ in 0..4 {
//!         source.increment(CardId::new(id), DeckSection::Main);
//!     }
//! }
//!
//! let mut sim =
//!     Simulator::with_rng(SimulatorConfig::default(), CardRegistry::new(), GameRng::new(1))
//!         .unwrap();
//! source.subscribe(sim.handle());
//!
//! assert_eq!(sim.start_from(&source), Ok(MatchPhase::Running));
//! assert_eq!(sim.board(Side::Human).unwrap().hand().len(), 6);
//!
//! // Editing the main deck mid-match aborts it.
//! source.increment(CardId::new(6), DeckSection::Main);
//! assert_eq!(sim.phase(), MatchPhase::Aborted);
//! ```

pub mod cards;
pub mod core;
pub mod deck;
pub mod lifecycle;
pub mod log;
pub mod simulator;
pub mod turn;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ActionError, CatalogError, ConfigError, DeckError, GameRng, LogIdPolicy, Side,
    SideMap, SimulatorConfig, TurnFlow,
};

pub use crate::cards::{CardCatalog, CardId, CardInfo, CardRegistry};

pub use crate::deck::{deal, deal_both, Deal, DealLayout, Deck, DeckListener, DeckSection, DeckSource};

pub use crate::zones::{Board, ResourceRights, RightKind, Zone};

pub use crate::lifecycle::{reduce, MatchAction, MatchHandle, MatchPhase, PhaseMachine, Transition};

pub use crate::turn::{PlayTarget, TurnEngine};

pub use crate::log::{BattleLog, LogEntry, LogEvent};

pub use crate::simulator::{Controls, MatchSnapshot, Simulator};
