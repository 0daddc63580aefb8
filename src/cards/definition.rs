//! Card identity: suit and rank.
//!
//! A card's identity never changes once the card is built; only its
//! orientation does (see `Card`).

use serde::{Deserialize, Serialize};

/// Card color, used by the tableau alternating-color rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

/// One of the four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Spades,
    Clubs,
    Diamonds,
}

impl Suit {
    /// All suits, in deck build order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Clubs, Suit::Diamonds];

    /// Position in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Spades => 1,
            Suit::Clubs => 2,
            Suit::Diamonds => 3,
        }
    }

    /// Single-letter symbol used in display keys.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Spades => 's',
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
        }
    }

    /// Hearts and diamonds are red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    #[must_use]
    pub const fn color(self) -> CardColor {
        if self.is_red() {
            CardColor::Red
        } else {
            CardColor::Black
        }
    }
}

/// Card rank, 1 (ace) through 13 (king).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, or `None` outside `1..=13`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value, 1 through 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The rank directly above this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// The rank directly below this one, if any.
    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        Self::new(self.0.wrapping_sub(1))
    }

    /// Short label: `a`, `2`..`9`, `t`, `j`, `q`, `k`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "a",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "t",
            11 => "j",
            12 => "q",
            _ => "k",
        }
    }

    /// All ranks, ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("rank {} out of range (1..=13)", value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}
