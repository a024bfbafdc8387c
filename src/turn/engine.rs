//! Turn engine: draws, plays and turn hand-over for a running match.
//!
//! The human acts during their turn: play a hand card to the magic zone
//! or the battlefield, each gated by its own per-turn right, then end the
//! turn. The opponent never acts. Its turn is one draw followed by handing
//! the turn back.
//!
//! ## Turn sequence
//!
//! ```text
//! end_human_turn:  log "your turn ended"
//!                  [optional] refresh rights + human draw
//!                  holder = opponent
//!                  Immediate flow -> opponent step
//! opponent step:   opponent draw (or exhaustion entry)
//!                  holder = human
//!                  log "opponent turn ended"
//!                  refresh rights, turn number + 1
//! ```
//!
//! Phase gating is the caller's job: this type assumes the match is running.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{CardCatalog, CardId};
use crate::core::{ActionError, Side, SideMap, TurnFlow};
use crate::deck::Deal;
use crate::log::{BattleLog, LogEvent};
use crate::zones::{Board, ResourceRights, RightKind, Zone};

/// Where a hand card is committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayTarget {
    MagicZone,
    Battlefield,
}

impl PlayTarget {
    /// Destination zone.
    #[must_use]
    pub const fn zone(self) -> Zone {
        match self {
            PlayTarget::MagicZone => Zone::MagicZone,
            PlayTarget::Battlefield => Zone::Battlefield,
        }
    }

    /// Right consumed by the play.
    #[must_use]
    pub const fn right(self) -> RightKind {
        match self {
            PlayTarget::MagicZone => RightKind::MagicPlacement,
            PlayTarget::Battlefield => RightKind::Summon,
        }
    }

    const fn exhausted_error(self) -> ActionError {
        match self {
            PlayTarget::MagicZone => ActionError::NoMagicPlacementRight,
            PlayTarget::Battlefield => ActionError::NoSummonRight,
        }
    }
}

/// Per-match turn and zone state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEngine {
    boards: SideMap<Board>,
    holder: Side,
    rights: ResourceRights,
    turn_number: u32,
}

impl TurnEngine {
    /// Lay out both deals. The human holds turn 1 with fresh rights.
    #[must_use]
    pub fn new(deals: SideMap<Deal>) -> Self {
        Self {
            boards: deals.map(|_, deal| Board::from_deal(deal)),
            holder: Side::Human,
            rights: ResourceRights::fresh(),
            turn_number: 1,
        }
    }

    /// Side currently holding the turn.
    #[must_use]
    pub fn holder(&self) -> Side {
        self.holder
    }

    /// Human rights remaining this turn.
    #[must_use]
    pub fn rights(&self) -> ResourceRights {
        self.rights
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side]
    }

    #[must_use]
    pub fn boards(&self) -> &SideMap<Board> {
        &self.boards
    }

    /// Draw step for a side. An empty library is logged, not an error.
    pub fn draw(&mut self, side: Side, log: &mut BattleLog) -> Option<CardId> {
        match self.boards[side].draw() {
            Some(card) => {
                log.append(LogEvent::Drew { side });
                debug!(%side, %card, library = self.boards[side].library().len(), "draw");
                Some(card)
            }
            None => {
                log.append(LogEvent::LibraryExhausted { side });
                debug!(%side, "draw from exhausted library");
                None
            }
        }
    }

    /// Commit a human hand card to the magic zone or the battlefield.
    ///
    /// Checks, in order: the human holds the turn, the card is in hand, the
    /// matching right is left. A rejection changes nothing.
    pub fn play<C: CardCatalog + ?Sized>(
        &mut self,
        card: CardId,
        target: PlayTarget,
        catalog: &C,
        log: &mut BattleLog,
    ) -> Result<(), ActionError> {
        if self.holder != Side::Human {
            return Err(ActionError::NotHumanTurn);
        }
        if !self.boards[Side::Human].in_hand(card) {
            return Err(ActionError::CardNotInHand(card));
        }
        if !self.rights.try_spend(target.right()) {
            return Err(target.exhausted_error());
        }

        let moved = self.boards[Side::Human].play_from_hand(card, target.zone());
        debug_assert!(moved);

        let name = catalog.display_name(card);
        let event = match target {
            PlayTarget::MagicZone => LogEvent::PlacedInMagicZone { card, name },
            PlayTarget::Battlefield => LogEvent::Summoned { card, name },
        };
        log.append(event);
        debug!(%card, ?target, rights = ?self.rights, "card played");
        Ok(())
    }

    /// End the human turn.
    ///
    /// Under `TurnFlow::Immediate` the opponent step runs before this
    /// returns and the human holds the turn again. Under `TurnFlow::Manual`
    /// the opponent holds the turn until `advance_turn`.
    pub fn end_human_turn(
        &mut self,
        flow: TurnFlow,
        human_draws: bool,
        log: &mut BattleLog,
    ) -> Result<(), ActionError> {
        if self.holder != Side::Human {
            return Err(ActionError::NotHumanTurn);
        }

        log.append(LogEvent::TurnEnded { side: Side::Human });
        if human_draws {
            self.rights.refresh();
            self.draw(Side::Human, log);
        }
        self.holder = Side::Opponent;
        debug!(turn = self.turn_number, ?flow, "human turn ended");

        if flow == TurnFlow::Immediate {
            self.opponent_step(log);
        }
        Ok(())
    }

    /// Run the opponent's draw-and-return step. Only valid while the
    /// opponent holds the turn.
    pub fn advance_turn(&mut self, log: &mut BattleLog) -> Result<(), ActionError> {
        if self.holder != Side::Opponent {
            return Err(ActionError::NotOpponentTurn);
        }
        self.opponent_step(log);
        Ok(())
    }

    fn opponent_step(&mut self, log: &mut BattleLog) {
        self.draw(Side::Opponent, log);
        self.holder = Side::Human;
        log.append(LogEvent::TurnEnded {
            side: Side::Opponent,
        });
        self.begin_human_turn();
    }

    fn begin_human_turn(&mut self) {
        self.rights.refresh();
        self.turn_number += 1;
        debug!(turn = self.turn_number, "human turn started");
    }
}
