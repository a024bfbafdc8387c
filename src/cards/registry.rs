//! Card catalog lookup.
//!
//! `CardCatalog` is the seam to the external card database. Only display
//! text flows through it; rules never consult it. `CardRegistry` is the
//! in-memory implementation.

use rustc_hash::FxHashMap;

use super::definition::{CardId, CardInfo};
use crate::core::CatalogError;

/// Lookup from card id to display metadata.
pub trait CardCatalog {
    /// Metadata for a card, if known.
    fn info(&self, id: CardId) -> Option<&CardInfo>;

    /// Display name for a card, if known.
    fn name(&self, id: CardId) -> Option<&str> {
        self.info(id).map(|info| info.name.as_str())
    }

    /// Display name, falling back to the id's `Display` form.
    fn display_name(&self, id: CardId) -> String {
        self.name(id).map_or_else(|| id.to_string(), str::to_owned)
    }
}

/// In-memory card catalog.
///
/// ## Example
///
/// ```
/// use deck_simulator::cards::{CardCatalog, CardId, CardInfo, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardInfo::new(CardId::new(1), "Scout")).unwrap();
///
/// assert_eq!(registry.name(CardId::new(1)), Some("Scout"));
/// assert_eq!(registry.display_name(CardId::new(2)), "Card(2)");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardInfo>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON array of card records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<CardInfo> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for record in records {
            registry.register(record)?;
        }
        Ok(registry)
    }

    /// Register a card. Ids must be unique.
    pub fn register(&mut self, card: CardInfo) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::Duplicate(card.id));
        }
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all registered cards.
    pub fn iter(&self) -> impl Iterator<Item = &CardInfo> {
        self.cards.values()
    }
}

impl CardCatalog for CardRegistry {
    fn info(&self, id: CardId) -> Option<&CardInfo> {
        self.cards.get(&id)
    }
}
