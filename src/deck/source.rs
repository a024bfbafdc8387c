//! The deck-editing collaborator.
//!
//! `DeckSource` owns the main and side decks that the editing UI mutates.
//! Anything that must react to main-deck edits (a running match, most
//! importantly) subscribes as a `DeckListener`. Every edit that changes the
//! main deck notifies each listener exactly once; side-only edits are
//! silent.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::list::Deck;
use crate::cards::CardId;
use crate::core::DeckError;

/// Which of the two deck lists an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckSection {
    Main,
    Side,
}

impl DeckSection {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            DeckSection::Main => DeckSection::Side,
            DeckSection::Side => DeckSection::Main,
        }
    }
}

impl std::fmt::Display for DeckSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckSection::Main => write!(f, "main"),
            DeckSection::Side => write!(f, "side"),
        }
    }
}

/// Observer of main-deck edits.
pub trait DeckListener {
    /// Called after the main deck changed, with its new contents.
    fn main_deck_changed(&self, main: &Deck);
}

/// Main and side decks plus their subscribers.
#[derive(Default)]
pub struct DeckSource {
    main: Deck,
    side: Deck,
    listeners: Vec<Box<dyn DeckListener>>,
}

impl DeckSource {
    /// Create a source with empty decks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source with the given decks.
    #[must_use]
    pub fn with_decks(main: Deck, side: Deck) -> Self {
        Self {
            main,
            side,
            listeners: Vec::new(),
        }
    }

    /// Register a listener for main-deck edits.
    pub fn subscribe(&mut self, listener: impl DeckListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn main(&self) -> &Deck {
        &self.main
    }

    #[must_use]
    pub fn side(&self) -> &Deck {
        &self.side
    }

    /// The deck for a section.
    #[must_use]
    pub fn deck(&self, section: DeckSection) -> &Deck {
        match section {
            DeckSection::Main => &self.main,
            DeckSection::Side => &self.side,
        }
    }

    fn deck_mut(&mut self, section: DeckSection) -> &mut Deck {
        match section {
            DeckSection::Main => &mut self.main,
            DeckSection::Side => &mut self.side,
        }
    }

    /// Add one copy. Returns the new count.
    pub fn increment(&mut self, card: CardId, section: DeckSection) -> u32 {
        let deck = self.deck_mut(section);
        deck.add(card, 1);
        let count = deck.count(card);
        debug!(%card, %section, count, "deck increment");
        if section == DeckSection::Main {
            self.notify();
        }
        count
    }

    /// Remove one copy. Returns the new count.
    pub fn decrement(&mut self, card: CardId, section: DeckSection) -> Result<u32, DeckError> {
        let deck = self.deck_mut(section);
        if !deck.remove_one(card) {
            return Err(DeckError::NotInDeck { card, section });
        }
        let count = deck.count(card);
        debug!(%card, %section, count, "deck decrement");
        if section == DeckSection::Main {
            self.notify();
        }
        Ok(count)
    }

    /// Move one copy from `from` to the other section.
    ///
    /// Always touches the main deck, so always notifies.
    pub fn move_card(&mut self, card: CardId, from: DeckSection) -> Result<(), DeckError> {
        if !self.deck_mut(from).remove_one(card) {
            return Err(DeckError::NotInDeck {
                card,
                section: from,
            });
        }
        self.deck_mut(from.other()).add(card, 1);
        debug!(%card, %from, "deck move");
        self.notify();
        Ok(())
    }

    /// Empty both decks.
    pub fn clear(&mut self) {
        let main_changed = !self.main.is_empty();
        self.main.clear();
        self.side.clear();
        if main_changed {
            self.notify();
        }
    }

    /// Replace both decks, e.g. when loading a saved list.
    pub fn replace(&mut self, main: Deck, side: Deck) {
        let main_changed = main != self.main;
        self.main = main;
        self.side = side;
        if main_changed {
            self.notify();
        }
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener.main_deck_changed(&self.main);
        }
    }
}

impl std::fmt::Debug for DeckSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckSource")
            .field("main", &self.main)
            .field("side", &self.side)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
