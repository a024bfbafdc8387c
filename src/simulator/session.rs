//! The simulator session.
//!
//! `Simulator` wires the state machine, the deal engine, the turn engine
//! and the battle log together. It is the only type the host talks to:
//!
//! - `start` / `reset` / `finish` drive the lifecycle
//! - `play_card` / `end_turn` / `advance_turn` drive turns
//! - `handle` gives deck editors an interrupt-only handle
//!
//! Turn operations are rejected unless the phase is RUNNING. A rejected
//! operation stores its error in a single slot and changes nothing else.

use tracing::{debug, info, warn};

use super::snapshot::{Controls, MatchSnapshot};
use crate::cards::{CardCatalog, CardId, CardRegistry};
use crate::core::{ActionError, ConfigError, GameRng, Side, SimulatorConfig};
use crate::deck::{deal_both, DealLayout, Deck, DeckSource};
use crate::lifecycle::{MatchAction, MatchHandle, MatchPhase, Transition};
use crate::log::BattleLog;
use crate::turn::{PlayTarget, TurnEngine};
use crate::zones::{Board, ResourceRights};

/// One simulator session. Owns its zones, rights, and log exclusively.
#[derive(Debug)]
pub struct Simulator<C: CardCatalog = CardRegistry> {
    config: SimulatorConfig,
    catalog: C,
    rng: GameRng,
    handle: MatchHandle,
    engine: Option<TurnEngine>,
    log: BattleLog,
    error: Option<ActionError>,
}

impl<C: CardCatalog> Simulator<C> {
    /// Create a session with an entropy-seeded RNG.
    pub fn new(config: SimulatorConfig, catalog: C) -> Result<Self, ConfigError> {
        Self::with_rng(config, catalog, GameRng::from_entropy())
    }

    /// Create a session with an injected RNG, e.g. a fixed seed for tests.
    pub fn with_rng(
        config: SimulatorConfig,
        catalog: C,
        rng: GameRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let log = BattleLog::new(config.log_ids);
        Ok(Self {
            config,
            catalog,
            rng,
            handle: MatchHandle::new(),
            engine: None,
            log,
            error: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Seed of the session RNG, for replaying a deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Interrupt-only handle sharing this session's state machine.
    ///
    /// Subscribe it to a `DeckSource` so main-deck edits abort a running match.
    #[must_use]
    pub fn handle(&self) -> MatchHandle {
        self.handle.clone()
    }

    /// Current match phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.handle.phase()
    }

    // === Lifecycle ===

    /// Try to start a match from a deck.
    ///
    /// Below the size threshold the phase becomes `LessThanTen` and nothing
    /// is dealt; that outcome is `Ok`. The deck is only read.
    pub fn start(&mut self, deck: &Deck) -> Result<MatchPhase, ActionError> {
        let phase = self.phase();
        if !phase.can_start() {
            return self.settle(Err(ActionError::AlreadyStarted { phase }));
        }

        let total = deck.total();
        if total < self.config.min_deck_size {
            self.handle.dispatch(MatchAction::CheckMainDeck);
            info!(total, min = self.config.min_deck_size, "main deck too small to start");
            return Ok(self.phase());
        }

        let deals = deal_both(deck, DealLayout::from(&self.config), &mut self.rng);
        self.engine = Some(TurnEngine::new(deals));
        self.handle.dispatch(MatchAction::Start);
        info!(total, seed = self.rng.seed(), "match started");
        Ok(self.phase())
    }

    /// Start from the main deck of a deck source.
    pub fn start_from(&mut self, source: &DeckSource) -> Result<MatchPhase, ActionError> {
        self.start(source.main())
    }

    /// Invalidate a running match. No-op in any other phase.
    pub fn interrupt(&mut self) -> Transition {
        let transition = self.handle.interrupt();
        if transition.changed() {
            warn!("match interrupted");
        }
        transition
    }

    /// Discard all per-match state and return to INITIAL.
    pub fn reset(&mut self) -> Transition {
        self.engine = None;
        self.log.clear();
        self.error = None;
        let transition = self.handle.dispatch(MatchAction::Reset);
        info!(from = %transition.from, "match reset");
        transition
    }

    /// Mark a running match as finished.
    pub fn finish(&mut self) -> Result<(), ActionError> {
        let phase = self.phase();
        if phase != MatchPhase::Running {
            return self.settle(Err(ActionError::NotFinishable { phase }));
        }
        self.handle.dispatch(MatchAction::Finish);
        Ok(())
    }

    // === Turns ===

    /// Commit a hand card to the magic zone or the battlefield.
    pub fn play_card(&mut self, card: CardId, target: PlayTarget) -> Result<(), ActionError> {
        let phase = self.phase();
        let result = match (phase, self.engine.as_mut()) {
            (MatchPhase::Running, Some(engine)) => {
                engine.play(card, target, &self.catalog, &mut self.log)
            }
            _ => Err(ActionError::NotRunning { phase }),
        };
        self.settle(result)
    }

    /// Place a hand card in the magic zone.
    pub fn place_in_magic_zone(&mut self, card: CardId) -> Result<(), ActionError> {
        self.play_card(card, PlayTarget::MagicZone)
    }

    /// Summon a hand card to the battlefield.
    pub fn summon(&mut self, card: CardId) -> Result<(), ActionError> {
        self.play_card(card, PlayTarget::Battlefield)
    }

    /// End the human turn.
    pub fn end_turn(&mut self) -> Result<(), ActionError> {
        let phase = self.phase();
        let flow = self.config.turn_flow;
        let human_draws = self.config.human_draws_at_turn_end;
        let result = match (phase, self.engine.as_mut()) {
            (MatchPhase::Running, Some(engine)) => {
                engine.end_human_turn(flow, human_draws, &mut self.log)
            }
            _ => Err(ActionError::NotRunning { phase }),
        };
        self.settle(result)
    }

    /// Run the opponent's draw step while it holds the turn.
    pub fn advance_turn(&mut self) -> Result<(), ActionError> {
        let phase = self.phase();
        let result = match (phase, self.engine.as_mut()) {
            (MatchPhase::Running, Some(engine)) => engine.advance_turn(&mut self.log),
            _ => Err(ActionError::NotRunning { phase }),
        };
        self.settle(result)
    }

    fn settle<T>(&mut self, result: Result<T, ActionError>) -> Result<T, ActionError> {
        if let Err(err) = &result {
            debug!(error = %err, phase = %self.phase(), "action rejected");
            self.error = Some(err.clone());
        }
        result
    }

    // === Error slot ===

    /// The most recent rejected action, until dismissed.
    #[must_use]
    pub fn error(&self) -> Option<&ActionError> {
        self.error.as_ref()
    }

    /// Clear the error slot.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // === Views ===

    fn visible_engine(&self) -> Option<&TurnEngine> {
        if self.phase().has_board() {
            self.engine.as_ref()
        } else {
            None
        }
    }

    /// A side's zones, while RUNNING or FINISHED.
    #[must_use]
    pub fn board(&self, side: Side) -> Option<&Board> {
        self.visible_engine().map(|engine| engine.board(side))
    }

    /// Side holding the turn, while RUNNING or FINISHED.
    #[must_use]
    pub fn turn_holder(&self) -> Option<Side> {
        self.visible_engine().map(TurnEngine::holder)
    }

    /// Human rights left this turn, while RUNNING or FINISHED.
    #[must_use]
    pub fn rights(&self) -> Option<ResourceRights> {
        self.visible_engine().map(TurnEngine::rights)
    }

    /// Turn number, while RUNNING or FINISHED.
    #[must_use]
    pub fn turn_number(&self) -> Option<u32> {
        self.visible_engine().map(TurnEngine::turn_number)
    }

    #[must_use]
    pub fn battle_log(&self) -> &BattleLog {
        &self.log
    }

    /// Which host controls are currently enabled.
    #[must_use]
    pub fn controls(&self) -> Controls {
        let phase = self.phase();
        let holder = match phase {
            MatchPhase::Running => self.engine.as_ref().map(TurnEngine::holder),
            _ => None,
        };
        Controls {
            start: phase.can_start(),
            reset: phase != MatchPhase::Initial,
            end_turn: holder == Some(Side::Human),
            advance_turn: holder == Some(Side::Opponent),
        }
    }

    /// Serializable view of everything the host renders.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        let engine = self.visible_engine();
        MatchSnapshot {
            phase: self.phase(),
            controls: self.controls(),
            turn_holder: engine.map(TurnEngine::holder),
            turn_number: engine.map(TurnEngine::turn_number),
            rights: engine.map(TurnEngine::rights),
            boards: engine.map(|engine| engine.boards().clone()),
            log: self.log.entries().clone(),
            error: self.error.as_ref().map(ToString::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardInfo;
    use crate::core::{LogIdPolicy, TurnFlow};
    use crate::zones::Zone;

    fn deck_of(total_per_card: u32, cards: u32) -> Deck {
        (1..=cards).map(|id| (CardId::new(id), total_per_card)).collect()
    }

    fn simulator(config: SimulatorConfig) -> Simulator {
        let mut catalog = CardRegistry::new();
        for id in 1..=5 {
            catalog
                .register(CardInfo::new(CardId::new(id), format!("Card {id}")))
                .unwrap();
        }
        Simulator::with_rng(config, catalog, GameRng::new(42)).unwrap()
    }

    fn running() -> Simulator {
        let mut sim = simulator(SimulatorConfig::default());
        sim.start(&deck_of(4, 5)).unwrap();
        sim
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulatorConfig::default().with_min_deck_size(5);
        assert!(Simulator::with_rng(config, CardRegistry::new(), GameRng::new(0)).is_err());
    }

    #[test]
    fn test_start_small_deck() {
        let mut sim = simulator(SimulatorConfig::default());

        assert_eq!(sim.start(&deck_of(1, 1)), Ok(MatchPhase::LessThanTen));
        assert!(sim.board(Side::Human).is_none());
        assert!(sim.error().is_none());

        // Retrying re-evaluates the guard.
        assert_eq!(sim.start(&deck_of(1, 1)), Ok(MatchPhase::LessThanTen));
        assert_eq!(sim.start(&deck_of(4, 5)), Ok(MatchPhase::Running));
    }

    #[test]
    fn test_start_deals_both_sides() {
        let sim = running();

        for side in Side::ALL {
            let board = sim.board(side).unwrap();
            assert_eq!(board.guardians().len(), 4);
            assert_eq!(board.hand().len(), 6);
            assert_eq!(board.library().len(), 10);
        }
        assert_eq!(sim.turn_holder(), Some(Side::Human));
        assert_eq!(sim.turn_number(), Some(1));
        assert!(sim.battle_log().is_empty());
    }

    #[test]
    fn test_start_twice_rejected() {
        let mut sim = running();

        let err = sim.start(&deck_of(4, 5)).unwrap_err();
        assert_eq!(
            err,
            ActionError::AlreadyStarted {
                phase: MatchPhase::Running
            }
        );
        assert_eq!(sim.error(), Some(&err));
        assert_eq!(sim.phase(), MatchPhase::Running);
    }

    #[test]
    fn test_actions_rejected_unless_running() {
        let mut sim = simulator(SimulatorConfig::default());

        assert_eq!(
            sim.end_turn(),
            Err(ActionError::NotRunning {
                phase: MatchPhase::Initial
            })
        );
        assert!(sim.summon(CardId::new(1)).is_err());
        assert!(sim.advance_turn().is_err());
        assert!(sim.battle_log().is_empty());
    }

    #[test]
    fn test_play_and_error_slot() {
        let mut sim = running();
        let card = *sim.board(Side::Human).unwrap().hand().front().unwrap();

        sim.place_in_magic_zone(card).unwrap();
        assert_eq!(sim.rights().unwrap().magic_placement, 0);

        let other = *sim.board(Side::Human).unwrap().hand().front().unwrap();
        assert_eq!(
            sim.place_in_magic_zone(other),
            Err(ActionError::NoMagicPlacementRight)
        );
        assert_eq!(sim.error(), Some(&ActionError::NoMagicPlacementRight));

        sim.dismiss_error();
        assert!(sim.error().is_none());

        assert_eq!(
            sim.summon(CardId::new(77)),
            Err(ActionError::CardNotInHand(CardId::new(77)))
        );
        assert_eq!(sim.error(), Some(&ActionError::CardNotInHand(CardId::new(77))));
    }

    #[test]
    fn test_interrupt_hides_board_until_reset() {
        let mut sim = running();

        assert!(sim.interrupt().changed());
        assert_eq!(sim.phase(), MatchPhase::Aborted);
        assert!(sim.board(Side::Human).is_none());
        assert!(sim.end_turn().is_err());

        // Repeated interrupts are no-ops.
        assert!(!sim.interrupt().changed());

        sim.reset();
        assert_eq!(sim.phase(), MatchPhase::Initial);
        assert!(sim.error().is_none());
    }

    #[test]
    fn test_finish() {
        let mut sim = running();
        sim.finish().unwrap();

        assert_eq!(sim.phase(), MatchPhase::Finished);
        assert!(sim.board(Side::Opponent).is_some());
        assert!(sim.end_turn().is_err());
        assert_eq!(
            sim.finish(),
            Err(ActionError::NotFinishable {
                phase: MatchPhase::Finished
            })
        );
    }

    #[test]
    fn test_controls() {
        let mut sim = simulator(SimulatorConfig::default().with_turn_flow(TurnFlow::Manual));
        let c = sim.controls();
        assert!(c.start && !c.reset && !c.end_turn && !c.advance_turn);

        sim.start(&deck_of(4, 5)).unwrap();
        let c = sim.controls();
        assert!(!c.start && c.reset && c.end_turn && !c.advance_turn);

        sim.end_turn().unwrap();
        let c = sim.controls();
        assert!(!c.end_turn && c.advance_turn);

        sim.advance_turn().unwrap();
        assert!(sim.controls().end_turn);

        sim.interrupt();
        let c = sim.controls();
        assert!(!c.start && c.reset && !c.end_turn && !c.advance_turn);
    }

    #[test]
    fn test_log_ids_per_match_policy() {
        let mut sim = simulator(SimulatorConfig::default().with_log_ids(LogIdPolicy::PerMatch));
        sim.start(&deck_of(4, 5)).unwrap();
        sim.end_turn().unwrap();
        sim.reset();

        sim.start(&deck_of(4, 5)).unwrap();
        sim.end_turn().unwrap();
        let ids: Vec<_> = sim.battle_log().entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_snapshot() {
        let mut sim = running();
        let card = *sim.board(Side::Human).unwrap().hand().front().unwrap();
        sim.summon(card).unwrap();

        let snapshot = sim.snapshot();
        assert_eq!(snapshot.phase, MatchPhase::Running);
        assert_eq!(snapshot.log.len(), 1);
        let boards = snapshot.boards.as_ref().unwrap();
        assert_eq!(boards[Side::Human].zone(Zone::Battlefield).len(), 1);
        assert!(snapshot.error.is_none());

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"RUNNING\""));
    }
}
