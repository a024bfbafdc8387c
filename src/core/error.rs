//! Error types, one enum per concern.
//!
//! Insufficient deck size at START is not an error: it is the
//! `LessThanTen` phase. Drawing from an empty library is not an error
//! either: it is a battle-log entry.

use thiserror::Error;

use crate::cards::CardId;
use crate::deck::DeckSection;
use crate::lifecycle::MatchPhase;

/// A rejected simulator action. No state was changed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Turn actions need a running match.
    #[error("no match is running (phase: {phase})")]
    NotRunning { phase: MatchPhase },

    /// START is only accepted before a match or after a failed guard.
    #[error("a match cannot be started from phase {phase}; reset first")]
    AlreadyStarted { phase: MatchPhase },

    /// FINISH needs a running match.
    #[error("only a running match can be finished (phase: {phase})")]
    NotFinishable { phase: MatchPhase },

    /// The human tried to act while the opponent holds the turn.
    #[error("it is not your turn")]
    NotHumanTurn,

    /// Advance turn was requested while the human holds the turn.
    #[error("the opponent does not hold the turn")]
    NotOpponentTurn,

    /// The played card is not in the human hand.
    #[error("{0} is not in your hand")]
    CardNotInHand(CardId),

    /// The magic-placement right for this turn is spent.
    #[error("no magic placement right left this turn")]
    NoMagicPlacementRight,

    /// The summon right for this turn is spent.
    #[error("no summon right left this turn")]
    NoSummonRight,
}

/// A rejected deck edit.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Removing a copy that is not there.
    #[error("{card} is not in the {section} deck")]
    NotInDeck { card: CardId, section: DeckSection },
}

/// Card catalog loading failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0} is already registered")]
    Duplicate(CardId),

    #[error("invalid card catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min_deck_size must be positive")]
    ZeroMinDeckSize,

    #[error("dealing {dealt} cards before the library exceeds min_deck_size {min_deck_size}")]
    DealExceedsMinimum { dealt: usize, min_deck_size: u32 },

    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
