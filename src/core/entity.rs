//! Card identification.
//!
//! Every card in a game is a record in the card arena, and every container
//! refers to it by `CardId`. Containers never hold card values directly, so
//! a card can only ever be in one place.
//!
//! ## ID Layout
//!
//! IDs are dense indices into the arena: `0..DECK_SIZE`. The arena is built
//! in suit-major order (all hearts, then spades, clubs, diamonds), but
//! nothing in the engine depends on that ordering.
//!
//! ```
//! use klondike_engine::core::{CardId, DECK_SIZE};
//!
//! let first = CardId::new(0);
//! let last = CardId::new(DECK_SIZE as u8 - 1);
//!
//! assert_eq!(first.index(), 0);
//! assert_eq!(last.index(), 51);
//! assert_eq!(CardId::all().count(), DECK_SIZE);
//! ```

use serde::{Deserialize, Serialize};

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Index of a card record in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a card ID from a raw arena index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every card ID in the deck.
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..DECK_SIZE as u8).map(CardId)
    }
}

impl From<u8> for CardId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
