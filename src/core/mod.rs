//! Core engine types: card IDs, board regions, clicks, RNG, configuration.
//!
//! These are the building blocks shared by every other module. None of
//! them know the rules of the game.

pub mod entity;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use entity::{CardId, DECK_SIZE};
pub use rng::GameRng;
pub use config::{
    FoundationIndex, PileIndex, SolitaireConfig, ZoneId,
    DEFAULT_DRAW_COUNT, FOUNDATION_COUNT, PILE_COUNT,
};
pub use action::Click;
pub use error::SolitaireError;
