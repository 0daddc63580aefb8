//! Card instances - identity plus orientation.
//!
//! A `Card` is created face-down. Its rank and suit are fixed for life;
//! only `turn_up` / `turn_down` change it.

use serde::{Deserialize, Serialize};

use super::definition::{CardColor, Rank, Suit};

/// Display key shared by every face-down card.
pub const BACK_KEY: &str = "back";

/// A card in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub const fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    #[must_use]
    pub const fn color(&self) -> CardColor {
        self.suit.color()
    }

    /// Rank label: `a`, `2`..`9`, `t`, `j`, `q`, `k`.
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        self.rank.label()
    }

    /// Turn the card face-up. Idempotent.
    pub fn turn_up(&mut self) {
        self.face_up = true;
    }

    /// Turn the card face-down. Idempotent.
    pub fn turn_down(&mut self) {
        self.face_up = false;
    }

    /// Key a renderer uses to pick the card image.
    ///
    /// Face-down cards all map to `BACK_KEY`; face-up cards map to the rank
    /// label followed by the suit symbol, e.g. `"ah"` or `"tc"`.
    #[must_use]
    pub fn display_key(&self) -> String {
        if self.face_up {
            format!("{}{}", self.rank.label(), self.suit.symbol())
        } else {
            BACK_KEY.to_string()
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let orientation = if self.face_up { "up" } else { "down" };
        write!(f, "{}{} ({})", self.rank.label(), self.suit.symbol(), orientation)
    }
}
