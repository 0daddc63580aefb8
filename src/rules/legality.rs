//! Move legality predicates.
//!
//! Both predicates look only at the moving card and the current top of
//! the destination (`None` when the destination is empty). They never
//! mutate anything, so the engine can ask before it moves.

use crate::cards::{Card, Rank};

/// Can `card` go on a foundation whose top is `top`?
///
/// An empty foundation takes only an ace. Otherwise the card must be the
/// same suit as the top and exactly one rank higher.
#[must_use]
pub fn can_add_to_foundation(card: &Card, top: Option<&Card>) -> bool {
    match top {
        None => card.rank() == Rank::ACE,
        Some(top) => top.rank().next() == Some(card.rank()) && top.suit() == card.suit(),
    }
}

/// Can `card` (the base of a run) go on a tableau pile whose top is `top`?
///
/// An empty pile takes only a king. Otherwise the top must be face-up,
/// exactly one rank higher, and of the opposite color.
#[must_use]
pub fn can_add_to_pile(card: &Card, top: Option<&Card>) -> bool {
    match top {
        None => card.rank() == Rank::KING,
        Some(top) => {
            top.is_face_up()
                && card.rank().next() == Some(top.rank())
                && top.is_red() != card.is_red()
        }
    }
}
