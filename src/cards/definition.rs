//! Card identity and display metadata.
//!
//! The simulator never reads card semantics. A `CardId` is an opaque key;
//! `CardInfo` is what a catalog can tell a renderer about it.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
///
/// Identifies the printed card, not a physical copy: a deck holding three
/// copies holds the same `CardId` three times.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Display metadata for a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    pub id: CardId,
    pub name: String,
    /// Artwork reference, passed through to the renderer untouched.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CardInfo {
    /// Create card info without artwork.
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: None,
        }
    }

    /// Attach an artwork reference.
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}
