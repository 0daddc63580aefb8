//! Zone system for card locations.
//!
//! The board has thirteen zones (stock, waste, four foundations, seven
//! piles), each an ordered stack of `CardId`s.
//!
//! ## Key Types
//!
//! - `ZoneId`: Zone identifier (from `core::config`)
//! - `ZoneManager`: Card location tracking and movement
//! - `Run`: A detached run of cards awaiting commit or rollback

pub mod manager;

pub use manager::{Run, ZoneManager, MAX_RUN};

// Re-export zone types from core for convenience
pub use crate::core::config::{FoundationIndex, PileIndex, ZoneId};
