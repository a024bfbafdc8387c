//! The deck mapping: card id to positive copy count.

use std::collections::BTreeMap;

use crate::cards::CardId;

/// Card id to copy count. Counts are always positive.
///
/// Backed by an ordered map so expansion order is stable, which makes a
/// seeded deal reproducible.
///
/// ```
/// use deck_simulator::cards::CardId;
/// use deck_simulator::deck::Deck;
///
/// let mut deck: Deck = [(CardId::new(1), 2), (CardId::new(2), 0)].into_iter().collect();
/// assert_eq!(deck.total(), 2);
/// assert!(!deck.contains(CardId::new(2)));
///
/// deck.remove_one(CardId::new(1));
/// assert_eq!(deck.count(CardId::new(1)), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    counts: BTreeMap<CardId, u32>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of a card in the deck.
    #[must_use]
    pub fn count(&self, card: CardId) -> u32 {
        self.counts.get(&card).copied().unwrap_or(0)
    }

    /// Check if the deck holds at least one copy.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.counts.contains_key(&card)
    }

    /// Add copies of a card. Adding zero copies is a no-op; counts saturate
    /// at `u32::MAX`.
    pub fn add(&mut self, card: CardId, copies: u32) {
        if copies > 0 {
            let count = self.counts.entry(card).or_insert(0);
            *count = count.saturating_add(copies);
        }
    }

    /// Remove one copy. The entry disappears when its count reaches zero.
    ///
    /// Returns `false` if the card was not in the deck.
    pub fn remove_one(&mut self, card: CardId) -> bool {
        match self.counts.get_mut(&card) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(&card);
                true
            }
            None => false,
        }
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Total number of cards (sum of counts), saturating at `u32::MAX`.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts
            .values()
            .fold(0u32, |total, &count| total.saturating_add(count))
    }

    /// Number of distinct card ids.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (id, count) in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, u32)> + '_ {
        self.counts.iter().map(|(&id, &count)| (id, count))
    }

    /// Flat multiset: each id repeated its count, in ascending id order.
    #[must_use]
    pub fn expand(&self) -> Vec<CardId> {
        let mut cards = Vec::with_capacity(self.total() as usize);
        for (id, count) in self.iter() {
            cards.extend(std::iter::repeat(id).take(count as usize));
        }
        cards
    }
}

impl FromIterator<(CardId, u32)> for Deck {
    /// Collect (id, count) pairs. Repeated ids accumulate; zero counts are dropped.
    fn from_iter<I: IntoIterator<Item = (CardId, u32)>>(iter: I) -> Self {
        let mut deck = Deck::new();
        for (id, count) in iter {
            deck.add(id, count);
        }
        deck
    }
}

impl FromIterator<CardId> for Deck {
    /// Count a flat sequence of ids.
    fn from_iter<I: IntoIterator<Item = CardId>>(iter: I) -> Self {
        iter.into_iter().map(|id| (id, 1)).collect()
    }
}
