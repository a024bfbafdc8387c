//! Per-turn resource rights for the human side.

use serde::{Deserialize, Serialize};

/// Which per-turn permission an action consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RightKind {
    /// Placing a card in the magic zone.
    MagicPlacement,
    /// Summoning a card to the battlefield.
    Summon,
}

/// Remaining magic-placement and summon rights this turn.
///
/// Both refresh to one at the start of the owner's turn and can never go
/// below zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRights {
    pub magic_placement: u8,
    pub summon: u8,
}

impl ResourceRights {
    /// Rights granted at the start of a turn.
    pub const PER_TURN: u8 = 1;

    /// Full rights for a new turn.
    #[must_use]
    pub const fn fresh() -> Self {
        Self {
            magic_placement: Self::PER_TURN,
            summon: Self::PER_TURN,
        }
    }

    /// Restore both counters for a new turn.
    pub fn refresh(&mut self) {
        *self = Self::fresh();
    }

    /// Remaining count for a kind.
    #[must_use]
    pub const fn remaining(&self, kind: RightKind) -> u8 {
        match kind {
            RightKind::MagicPlacement => self.magic_placement,
            RightKind::Summon => self.summon,
        }
    }

    /// Spend one right. Returns `false` without change when none remain.
    pub fn try_spend(&mut self, kind: RightKind) -> bool {
        let slot = match kind {
            RightKind::MagicPlacement => &mut self.magic_placement,
            RightKind::Summon => &mut self.summon,
        };
        match slot.checked_sub(1) {
            Some(left) => {
                *slot = left;
                true
            }
            None => false,
        }
    }
}

impl Default for ResourceRights {
    fn default() -> Self {
        Self::fresh()
    }
}
