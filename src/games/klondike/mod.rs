//! Klondike solitaire.
//!
//! A single-player game over one standard deck:
//! - 28 cards are dealt into seven tableau piles, only the top of each face-up
//! - the remaining 24 form the stock, drawn three at a time onto the waste
//! - the goal is four complete ace-to-king foundations
//!
//! Play uses a select-then-target protocol: the first click picks up the
//! waste card or a pile's face-up run, the second click names where it goes.

mod game;
mod selection;

pub use game::Solitaire;
pub use selection::Selection;
