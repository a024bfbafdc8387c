//! Shuffle/deal engine.
//!
//! A side's starting position is carved out of a uniformly random
//! permutation of its own copy of the deck:
//!
//! 1. Expand the deck into a flat multiset of ids.
//! 2. Draw a Fisher-Yates permutation of `0..n`.
//! 3. Consume indices from the end: guardians first, then the hand, then
//!    the rest becomes the library in the order consumed.
//!
//! Each side is dealt with its own call, so the two sides get independent
//! shuffles of logically separate copies. The input deck is never mutated.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::list::Deck;
use crate::cards::CardId;
use crate::core::{GameRng, Side, SideMap, SimulatorConfig};

/// How many cards go to guardians and the hand before the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealLayout {
    pub guardians: usize,
    pub hand: usize,
}

impl DealLayout {
    #[must_use]
    pub const fn new(guardians: usize, hand: usize) -> Self {
        Self { guardians, hand }
    }
}

impl Default for DealLayout {
    fn default() -> Self {
        Self::new(4, 6)
    }
}

impl From<&SimulatorConfig> for DealLayout {
    fn from(config: &SimulatorConfig) -> Self {
        Self::new(config.guardian_count, config.hand_size)
    }
}

/// One side's starting cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub guardians: Vec<CardId>,
    pub hand: Vec<CardId>,
    /// Front is drawn first.
    pub library: Vec<CardId>,
}

impl Deal {
    /// Number of cards across all three partitions.
    #[must_use]
    pub fn total(&self) -> usize {
        self.guardians.len() + self.hand.len() + self.library.len()
    }

    /// Recount all dealt cards as a deck.
    #[must_use]
    pub fn as_deck(&self) -> Deck {
        self.guardians
            .iter()
            .chain(&self.hand)
            .chain(&self.library)
            .copied()
            .collect()
    }
}

/// Deal one side from a deck.
///
/// The caller checks the START threshold first. A deck smaller than the
/// layout yields short partitions rather than panicking.
pub fn deal(deck: &Deck, layout: DealLayout, rng: &mut GameRng) -> Deal {
    let cards = deck.expand();
    let mut order = rng.permutation(cards.len());

    let mut take = |n: usize| -> Vec<CardId> {
        let mut taken = Vec::with_capacity(n);
        while taken.len() < n {
            match order.pop() {
                Some(index) => taken.push(cards[index]),
                None => break,
            }
        }
        taken
    };

    let guardians = take(layout.guardians);
    let hand = take(layout.hand);
    let library = take(cards.len());

    if cfg!(debug_assertions) {
        // Work on a copy so the source deck stays untouched.
        let mut remaining = deck.clone();
        for &card in guardians.iter().chain(&hand) {
            assert!(
                remaining.remove_one(card),
                "dealt {card} more often than the deck holds it"
            );
        }
        assert_eq!(remaining.total() as usize, library.len());
    }

    Deal {
        guardians,
        hand,
        library,
    }
}

/// Deal both sides independently, human first.
pub fn deal_both(deck: &Deck, layout: DealLayout, rng: &mut GameRng) -> SideMap<Deal> {
    let deals = SideMap::new(|_| deal(deck, layout, rng));
    for side in Side::ALL {
        debug!(
            %side,
            guardians = deals[side].guardians.len(),
            hand = deals[side].hand.len(),
            library = deals[side].library.len(),
            "dealt side"
        );
    }
    deals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_by_four() -> Deck {
        (1..=5).map(|id| (CardId::new(id), 4)).collect()
    }

    #[test]
    fn test_deal_partitions_deck() {
        let deck = five_by_four();
        let mut rng = GameRng::new(42);

        let dealt = deal(&deck, DealLayout::default(), &mut rng);

        assert_eq!(dealt.guardians.len(), 4);
        assert_eq!(dealt.hand.len(), 6);
        assert_eq!(dealt.library.len(), 10);
        assert_eq!(dealt.total(), 20);
        assert_eq!(dealt.as_deck(), deck);
    }

    #[test]
    fn test_deal_does_not_mutate_input() {
        let deck = five_by_four();
        let before = deck.clone();
        let _ = deal(&deck, DealLayout::default(), &mut GameRng::new(1));
        assert_eq!(deck, before);
    }

    #[test]
    fn test_deal_is_seed_deterministic() {
        let deck = five_by_four();
        let a = deal(&deck, DealLayout::default(), &mut GameRng::new(99));
        let b = deal(&deck, DealLayout::default(), &mut GameRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_consumes_permutation_from_end() {
        // With distinct cards the deal is exactly the reversed permutation.
        let deck: Deck = (0..12).map(|id| (CardId::new(id), 1)).collect();
        let expected: Vec<CardId> = GameRng::new(5)
            .permutation(12)
            .into_iter()
            .rev()
            .map(|i| CardId::new(i as u32))
            .collect();

        let dealt = deal(&deck, DealLayout::new(4, 6), &mut GameRng::new(5));

        assert_eq!(dealt.guardians, expected[..4]);
        assert_eq!(dealt.hand, expected[4..10]);
        assert_eq!(dealt.library, expected[10..]);
    }

    #[test]
    fn test_deal_short_deck() {
        let deck: Deck = [(CardId::new(1), 3)].into_iter().collect();
        let dealt = deal(&deck, DealLayout::default(), &mut GameRng::new(0));

        assert_eq!(dealt.guardians.len(), 3);
        assert!(dealt.hand.is_empty());
        assert!(dealt.library.is_empty());
    }

    #[test]
    fn test_deal_both_sides_independent() {
        let deck: Deck = (0..40).map(|id| (CardId::new(id), 1)).collect();
        let deals = deal_both(&deck, DealLayout::default(), &mut GameRng::new(7));

        // Each side gets the full deck on its own.
        assert_eq!(deals[Side::Human].as_deck(), deck);
        assert_eq!(deals[Side::Opponent].as_deck(), deck);
        // Two independent shuffles of 40 distinct cards should differ.
        assert_ne!(deals[Side::Human], deals[Side::Opponent]);
    }

    #[test]
    fn test_layout_from_config() {
        let config = SimulatorConfig::default().with_deal_layout(2, 5);
        assert_eq!(DealLayout::from(&config), DealLayout::new(2, 5));
    }
}
