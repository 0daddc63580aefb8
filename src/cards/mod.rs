//! Card system: identity, instances, and the per-game arena.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `CardColor`: immutable card identity
//! - `Card`: identity plus face-up/face-down orientation
//! - `CardArena`: the 52 card records, addressed by `CardId`

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardColor, Rank, Suit};
pub use instance::{Card, BACK_KEY};
pub use registry::CardArena;
