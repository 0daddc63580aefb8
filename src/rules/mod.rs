//! Move legality rules.
//!
//! Pure predicates over cards. The engine asks these before every move;
//! they know nothing about selection or click handling.

pub mod legality;

pub use legality::{can_add_to_foundation, can_add_to_pile};
