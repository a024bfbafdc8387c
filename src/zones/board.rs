//! One side's card zones.
//!
//! A `Board` holds every zone for a side plus its library:
//! - Guardians, hand, magic zone, battlefield, graveyard (display order)
//! - Library (front is drawn first)
//!
//! Zones are persistent vectors so snapshots of a board are O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::deck::Deal;

/// A visible zone on a side's board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Guardians,
    Hand,
    MagicZone,
    Battlefield,
    Graveyard,
}

impl Zone {
    pub const ALL: [Zone; 5] = [
        Zone::Guardians,
        Zone::Hand,
        Zone::MagicZone,
        Zone::Battlefield,
        Zone::Graveyard,
    ];
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Guardians => "guardians",
            Zone::Hand => "hand",
            Zone::MagicZone => "magic zone",
            Zone::Battlefield => "battlefield",
            Zone::Graveyard => "graveyard",
        };
        f.write_str(name)
    }
}

/// All zones for one side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    guardians: Vector<CardId>,
    hand: Vector<CardId>,
    magic_zone: Vector<CardId>,
    battlefield: Vector<CardId>,
    graveyard: Vector<CardId>,
    library: Vector<CardId>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out a fresh deal: guardians, hand and library filled, play zones empty.
    #[must_use]
    pub fn from_deal(deal: Deal) -> Self {
        Self {
            guardians: deal.guardians.into_iter().collect(),
            hand: deal.hand.into_iter().collect(),
            library: deal.library.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Cards in a zone, in display order.
    #[must_use]
    pub fn zone(&self, zone: Zone) -> &Vector<CardId> {
        match zone {
            Zone::Guardians => &self.guardians,
            Zone::Hand => &self.hand,
            Zone::MagicZone => &self.magic_zone,
            Zone::Battlefield => &self.battlefield,
            Zone::Graveyard => &self.graveyard,
        }
    }

    fn zone_mut(&mut self, zone: Zone) -> &mut Vector<CardId> {
        match zone {
            Zone::Guardians => &mut self.guardians,
            Zone::Hand => &mut self.hand,
            Zone::MagicZone => &mut self.magic_zone,
            Zone::Battlefield => &mut self.battlefield,
            Zone::Graveyard => &mut self.graveyard,
        }
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<CardId> {
        &self.hand
    }

    #[must_use]
    pub fn guardians(&self) -> &Vector<CardId> {
        &self.guardians
    }

    /// Remaining library, front first.
    #[must_use]
    pub fn library(&self) -> &Vector<CardId> {
        &self.library
    }

    /// Check if a card is in hand.
    #[must_use]
    pub fn in_hand(&self, card: CardId) -> bool {
        self.hand.contains(&card)
    }

    /// Move the front library card to the end of the hand.
    ///
    /// Returns `None` when the library is exhausted.
    pub fn draw(&mut self) -> Option<CardId> {
        let card = self.library.pop_front()?;
        self.hand.push_back(card);
        Some(card)
    }

    /// Move the first copy of `card` from the hand to the end of `to`.
    ///
    /// Returns `false` (and changes nothing) if the card is not in hand.
    pub fn play_from_hand(&mut self, card: CardId, to: Zone) -> bool {
        let Some(index) = self.hand.index_of(&card) else {
            return false;
        };
        self.hand.remove(index);
        self.zone_mut(to).push_back(card);
        true
    }

    /// Cards across all zones including the library.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        Zone::ALL.iter().map(|&z| self.zone(z).len()).sum::<usize>() + self.library.len()
    }
}
