//! Match phases, lifecycle actions, and the transition function.
//!
//! | From | Action | To |
//! |---|---|---|
//! | INITIAL, LESS_THAN_TEN | START | RUNNING |
//! | any | CHECK_MAIN_DECK | LESS_THAN_TEN |
//! | RUNNING | INTERRUPT | ABORTED |
//! | RUNNING | FINISH | FINISHED |
//! | any | RESET | INITIAL |
//!
//! Every other pair leaves the phase unchanged. The START guard (deck
//! size) is evaluated by the caller, which dispatches either START or
//! CHECK_MAIN_DECK.

use serde::{Deserialize, Serialize};

/// Match-level lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchPhase {
    /// No match yet, or explicitly reset.
    #[default]
    Initial,
    /// START was attempted with too small a main deck.
    LessThanTen,
    /// A match is in progress.
    Running,
    /// The main deck was edited during a match; only RESET recovers.
    Aborted,
    /// Terminal; reached only by an external decision.
    Finished,
}

impl MatchPhase {
    /// Whether zone and turn state exist in this phase.
    #[must_use]
    pub const fn has_board(self) -> bool {
        matches!(self, MatchPhase::Running | MatchPhase::Finished)
    }

    /// Whether START is accepted in this phase.
    #[must_use]
    pub const fn can_start(self) -> bool {
        matches!(self, MatchPhase::Initial | MatchPhase::LessThanTen)
    }
}

impl std::fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MatchPhase::Initial => "INITIAL",
            MatchPhase::LessThanTen => "LESS_THAN_TEN",
            MatchPhase::Running => "RUNNING",
            MatchPhase::Aborted => "ABORTED",
            MatchPhase::Finished => "FINISHED",
        };
        f.write_str(name)
    }
}

/// Lifecycle actions dispatched to the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchAction {
    /// Begin a match; the deck guard already passed.
    Start,
    /// START was attempted but the deck guard failed.
    CheckMainDeck,
    /// The main deck changed underneath a running match.
    Interrupt,
    /// Discard the match.
    Reset,
    /// External decision that the match is over.
    Finish,
}

/// Apply an action to a phase.
#[must_use]
pub const fn reduce(phase: MatchPhase, action: MatchAction) -> MatchPhase {
    use MatchAction as A;
    use MatchPhase as P;

    match (phase, action) {
        (P::Initial | P::LessThanTen, A::Start) => P::Running,
        (_, A::CheckMainDeck) => P::LessThanTen,
        (P::Running, A::Interrupt) => P::Aborted,
        (P::Running, A::Finish) => P::Finished,
        (_, A::Reset) => P::Initial,
        (unchanged, _) => unchanged,
    }
}

/// Record of one dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: MatchPhase,
    pub action: MatchAction,
    pub to: MatchPhase,
}

impl Transition {
    /// Whether the dispatch moved the phase.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}
