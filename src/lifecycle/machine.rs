//! The match state machine and the handle external components dispatch through.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use super::phase::{reduce, MatchAction, MatchPhase, Transition};
use crate::deck::{Deck, DeckListener};

/// Owns the current phase. Exactly one phase at any time.
#[derive(Clone, Debug, Default)]
pub struct PhaseMachine {
    phase: MatchPhase,
    dispatched: u64,
}

impl PhaseMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Number of actions dispatched so far.
    #[must_use]
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Apply an action and report what happened.
    pub fn dispatch(&mut self, action: MatchAction) -> Transition {
        let from = self.phase;
        let to = reduce(from, action);
        self.phase = to;
        self.dispatched += 1;

        let transition = Transition { from, action, to };
        if transition.changed() {
            debug!(%from, %to, ?action, "match phase transition");
        } else {
            debug!(phase = %from, ?action, "match action ignored");
        }
        transition
    }
}

/// Shared handle to a session's state machine.
///
/// Cloning the handle shares the machine. Outside the crate a holder can
/// only read the phase and raise INTERRUPT; START, RESET, CHECK_MAIN_DECK
/// and FINISH carry per-match effects and go through `Simulator`.
/// Subscribing a handle to a `DeckSource` makes every main-deck edit
/// raise INTERRUPT.
///
/// ```
/// use deck_simulator::lifecycle::{MatchHandle, MatchPhase};
///
/// let handle = MatchHandle::new();
/// assert!(!handle.clone().interrupt().changed());
/// assert_eq!(handle.phase(), MatchPhase::Initial);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchHandle {
    machine: Rc<RefCell<PhaseMachine>>,
}

impl MatchHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.machine.borrow().phase()
    }

    /// Invalidate a running match. No-op in any other phase.
    pub fn interrupt(&self) -> Transition {
        self.dispatch(MatchAction::Interrupt)
    }

    pub(crate) fn dispatch(&self, action: MatchAction) -> Transition {
        self.machine.borrow_mut().dispatch(action)
    }

    /// Number of actions dispatched through any clone of this handle.
    #[must_use]
    pub fn dispatched(&self) -> u64 {
        self.machine.borrow().dispatched()
    }
}

impl DeckListener for MatchHandle {
    fn main_deck_changed(&self, main: &Deck) {
        let transition = self.interrupt();
        if transition.changed() {
            warn!(deck_total = main.total(), "main deck edited during a match; match aborted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::deck::{DeckSection, DeckSource};

    #[test]
    fn test_machine_dispatch() {
        let mut machine = PhaseMachine::new();
        assert_eq!(machine.phase(), MatchPhase::Initial);

        let t = machine.dispatch(MatchAction::Start);
        assert_eq!(t.from, MatchPhase::Initial);
        assert_eq!(t.to, MatchPhase::Running);
        assert!(t.changed());

        let t = machine.dispatch(MatchAction::Start);
        assert!(!t.changed());
        assert_eq!(machine.dispatched(), 2);
    }

    #[test]
    fn test_handle_clones_share_machine() {
        let handle = MatchHandle::new();
        let other = handle.clone();

        other.dispatch(MatchAction::CheckMainDeck);
        assert_eq!(handle.phase(), MatchPhase::LessThanTen);
        assert_eq!(handle.dispatched(), 1);
    }

    #[test]
    fn test_interrupt_is_idempotent() {
        let handle = MatchHandle::new();
        handle.dispatch(MatchAction::Start);

        assert!(handle.interrupt().changed());
        assert!(!handle.interrupt().changed());
        assert_eq!(handle.phase(), MatchPhase::Aborted);
    }

    #[test]
    fn test_deck_edit_aborts_running_match() {
        let handle = MatchHandle::new();
        let mut source = DeckSource::new();
        source.subscribe(handle.clone());

        // Edits before a match leave the phase alone.
        source.increment(CardId::new(1), DeckSection::Main);
        assert_eq!(handle.phase(), MatchPhase::Initial);

        handle.dispatch(MatchAction::Start);
        source.increment(CardId::new(2), DeckSection::Side);
        assert_eq!(handle.phase(), MatchPhase::Running);

        source.increment(CardId::new(2), DeckSection::Main);
        assert_eq!(handle.phase(), MatchPhase::Aborted);
    }
}
