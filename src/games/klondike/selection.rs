//! Selection state for the select-then-target click protocol.

use serde::{Deserialize, Serialize};

use crate::core::config::PileIndex;

/// What the player has picked up, if anything.
///
/// Exactly one variant holds at a time, so "waste and a pile both
/// selected" cannot be represented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Idle,
    /// The waste's top card is selected.
    Waste,
    /// The face-up run on top of this pile is selected.
    Pile(PileIndex),
}

impl Selection {
    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Selection::Idle
    }

    #[must_use]
    pub fn is_waste(self) -> bool {
        self == Selection::Waste
    }

    #[must_use]
    pub fn is_pile(self) -> bool {
        matches!(self, Selection::Pile(_))
    }

    /// The selected pile, if a pile is selected.
    #[must_use]
    pub fn pile(self) -> Option<PileIndex> {
        match self {
            Selection::Pile(index) => Some(index),
            _ => None,
        }
    }
}
