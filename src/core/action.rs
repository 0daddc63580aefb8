//! Click representation: the already-classified region a player clicked.
//!
//! The input layer maps raw pointer events to a `Click`; the engine only
//! ever sees these four region kinds. `Solitaire::apply` dispatches a
//! `Click` to the matching entry point.

use serde::{Deserialize, Serialize};

use super::config::{FoundationIndex, PileIndex};

/// A click on one board region.
///
/// ## Example
///
/// ```
/// use klondike_engine::core::{Click, PileIndex};
///
/// let click = Click::Pile(PileIndex::new(3).unwrap());
/// assert_eq!(click.to_string(), "pile #3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Click {
    /// The stock was clicked.
    Stock,
    /// The waste was clicked.
    Waste,
    /// A foundation was clicked.
    Foundation(FoundationIndex),
    /// A tableau pile was clicked.
    Pile(PileIndex),
}

impl std::fmt::Display for Click {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Click::Stock => write!(f, "stock"),
            Click::Waste => write!(f, "waste"),
            Click::Foundation(i) => write!(f, "foundation #{}", i.index()),
            Click::Pile(i) => write!(f, "pile #{}", i.index()),
        }
    }
}
