//! # klondike-engine
//!
//! A Klondike solitaire rules engine. It owns the authoritative game state
//! and enforces every move rule through a select-then-target click protocol.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: The engine owns all 52 cards in an arena; containers
//!    hold `CardId`s, so a card is always in exactly one place.
//!
//! 2. **No Failing Moves**: Illegal moves and clicks on busy regions are
//!    silent no-ops. Errors exist only for index conversion and validation.
//!
//! 3. **Caller Draws**: The engine never renders. After every click the
//!    caller reads the stack-top accessors and redraws.
//!
//! ## Modules
//!
//! - `core`: Card IDs, board regions, clicks, RNG, configuration, errors
//! - `cards`: Suit, rank, card orientation, the card arena
//! - `zones`: Ordered containers and atomic card transfers
//! - `rules`: Foundation and tableau legality predicates
//! - `games`: The Klondike engine and its selection state
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{Click, PileIndex, Solitaire};
//!
//! let mut game = Solitaire::with_seed(1);
//!
//! // Pick up pile 6, then click it again to put it down.
//! let pile = PileIndex::new(6).unwrap();
//! game.apply(Click::Pile(pile));
//! assert_eq!(game.selected_pile(), Some(pile));
//! game.apply(Click::Pile(pile));
//! assert!(!game.is_pile_selected());
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    CardId, Click, FoundationIndex, GameRng, PileIndex, SolitaireConfig, SolitaireError, ZoneId,
    DECK_SIZE, FOUNDATION_COUNT, PILE_COUNT,
};

pub use crate::cards::{Card, CardArena, CardColor, Rank, Suit};

pub use crate::zones::{Run, ZoneManager};

pub use crate::rules::{can_add_to_foundation, can_add_to_pile};

pub use crate::games::klondike::{Selection, Solitaire};
