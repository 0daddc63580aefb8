//! Card arena: the 52 card records of one game.
//!
//! Cards are created once per deal and never destroyed. Containers refer
//! to them by `CardId`, which is the record's index here.

use super::definition::{Rank, Suit};
use super::instance::Card;
use crate::core::entity::{CardId, DECK_SIZE};

/// Storage for the card records of a standard deck.
///
/// ## Usage
///
/// ```
/// use klondike_engine::cards::CardArena;
/// use klondike_engine::core::CardId;
///
/// let mut arena = CardArena::standard();
/// assert_eq!(arena.len(), 52);
///
/// let id = CardId::new(0);
/// arena.get_mut(id).turn_up();
/// assert!(arena.get(id).is_face_up());
/// ```
#[derive(Clone, Debug)]
pub struct CardArena {
    cards: Vec<Card>,
}

impl CardArena {
    /// Build a standard deck: each suit in `Suit::ALL` order, ace to king,
    /// all face-down.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::all() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// ID of the card with the given rank and suit in a standard arena.
    #[must_use]
    pub fn id_of(rank: Rank, suit: Suit) -> CardId {
        CardId::new(suit.index() as u8 * 13 + rank.value() - 1)
    }

    /// Look up a card record.
    #[must_use]
    pub fn get(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }

    /// Look up a card record mutably.
    pub fn get_mut(&mut self, id: CardId) -> &mut Card {
        &mut self.cards[id.index()]
    }

    /// Number of card records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over `(id, card)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> {
        CardId::all().zip(self.cards.iter())
    }
}
