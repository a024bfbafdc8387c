//! Core building blocks: sides, randomness, configuration, errors.
//!
//! Everything else in the crate is expressed in terms of these types.

pub mod config;
pub mod error;
pub mod rng;
pub mod side;

pub use config::{LogIdPolicy, SimulatorConfig, TurnFlow};
pub use error::{ActionError, CatalogError, ConfigError, DeckError};
pub use rng::GameRng;
pub use side::{Side, SideMap};
