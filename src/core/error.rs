//! Error type for the few fallible operations.
//!
//! Gameplay itself never fails: illegal moves and busy regions are silent
//! no-ops. Errors only come from converting raw indices into region
//! indices, from rejected configurations, and from `Solitaire::validate`.

use super::entity::CardId;
use super::config::{FoundationIndex, PileIndex};

/// Errors reported by index conversion and invariant validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolitaireError {
    /// A raw index does not name a region of the given kind.
    IndexOutOfRange {
        /// Region kind ("foundation" or "pile").
        region: &'static str,
        /// The rejected index.
        index: usize,
        /// Number of regions of that kind.
        len: usize,
    },
    /// A configuration asks for zero cards per draw.
    ZeroDrawCount,
    /// The containers do not hold exactly one deck.
    CardCount {
        /// Number of card slots found across all containers.
        found: usize,
    },
    /// A card appears in more than one container slot.
    DuplicateCard(CardId),
    /// A card's recorded location disagrees with the container holding it.
    MisplacedCard(CardId),
    /// A card ID does not name a card of the deck.
    UnknownCard(CardId),
    /// A tableau pile has a face-down card above a face-up one.
    FaceDownAboveFaceUp {
        /// The offending pile.
        pile: PileIndex,
    },
    /// A foundation is not an ascending single-suit run from the ace.
    BrokenFoundation {
        /// The offending foundation.
        foundation: FoundationIndex,
    },
}

impl std::fmt::Display for SolitaireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { region, index, len } => {
                write!(f, "{} index {} out of range (0..{})", region, index, len)
            }
            Self::ZeroDrawCount => write!(f, "draw count must be at least 1"),
            Self::CardCount { found } => write!(f, "expected 52 cards, found {}", found),
            Self::DuplicateCard(id) => write!(f, "{} is in more than one place", id),
            Self::MisplacedCard(id) => write!(f, "{} is not where its location says", id),
            Self::UnknownCard(id) => write!(f, "{} is not part of the deck", id),
            Self::FaceDownAboveFaceUp { pile } => {
                write!(f, "{} has a face-down card above a face-up card", pile)
            }
            Self::BrokenFoundation { foundation } => {
                write!(f, "{} is not an ascending run of one suit", foundation)
            }
        }
    }
}

impl std::error::Error for SolitaireError {}
