//! Board layout and game configuration.
//!
//! The board has a fixed shape:
//! - one stock and one waste
//! - `FOUNDATION_COUNT` foundations, addressed by `FoundationIndex`
//! - `PILE_COUNT` tableau piles, addressed by `PileIndex`
//!
//! Region indices are validated when they are built, so the engine never
//! sees an out-of-range index.

use serde::{Deserialize, Serialize};

use super::error::SolitaireError;

/// Number of foundations.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau piles.
pub const PILE_COUNT: usize = 7;

/// Default number of cards moved from stock to waste per click.
pub const DEFAULT_DRAW_COUNT: usize = 3;

/// Index of a foundation, always in `0..FOUNDATION_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FoundationIndex(u8);

impl FoundationIndex {
    /// Create a foundation index, or `None` if out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < FOUNDATION_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all foundations in order.
    pub fn all() -> impl Iterator<Item = FoundationIndex> {
        (0..FOUNDATION_COUNT as u8).map(FoundationIndex)
    }
}

impl TryFrom<usize> for FoundationIndex {
    type Error = SolitaireError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(SolitaireError::IndexOutOfRange {
            region: "foundation",
            index,
            len: FOUNDATION_COUNT,
        })
    }
}

impl std::fmt::Display for FoundationIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Foundation({})", self.0)
    }
}

/// Index of a tableau pile, always in `0..PILE_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PileIndex(u8);

impl PileIndex {
    /// Create a pile index, or `None` if out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < PILE_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all piles in order.
    pub fn all() -> impl Iterator<Item = PileIndex> {
        (0..PILE_COUNT as u8).map(PileIndex)
    }
}

impl TryFrom<usize> for PileIndex {
    type Error = SolitaireError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(SolitaireError::IndexOutOfRange {
            region: "pile",
            index,
            len: PILE_COUNT,
        })
    }
}

impl std::fmt::Display for PileIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}

/// A card container on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    /// Face-down draw pile.
    Stock,
    /// Face-up cards drawn from the stock.
    Waste,
    /// Ascending same-suit build pile.
    Foundation(FoundationIndex),
    /// Tableau pile.
    Pile(PileIndex),
}

impl ZoneId {
    /// Every zone on the board: stock, waste, foundations, then piles.
    pub fn all() -> impl Iterator<Item = ZoneId> {
        [ZoneId::Stock, ZoneId::Waste]
            .into_iter()
            .chain(FoundationIndex::all().map(ZoneId::Foundation))
            .chain(PileIndex::all().map(ZoneId::Pile))
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneId::Stock => write!(f, "Stock"),
            ZoneId::Waste => write!(f, "Waste"),
            ZoneId::Foundation(i) => write!(f, "{}", i),
            ZoneId::Pile(i) => write!(f, "{}", i),
        }
    }
}

/// Game configuration.
///
/// The draw count is always at least 1: the builder asserts it and
/// deserialization rejects it, so every engine sees a usable value.
///
/// ```
/// use klondike_engine::core::SolitaireConfig;
///
/// let config = SolitaireConfig::new(42).with_draw_count(1);
/// assert_eq!(config.seed(), 42);
/// assert_eq!(config.draw_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct SolitaireConfig {
    seed: u64,
    draw_count: usize,
}

/// Unchecked wire form of `SolitaireConfig`.
#[derive(Deserialize)]
struct RawConfig {
    seed: u64,
    draw_count: usize,
}

impl TryFrom<RawConfig> for SolitaireConfig {
    type Error = SolitaireError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        if raw.draw_count == 0 {
            return Err(SolitaireError::ZeroDrawCount);
        }
        Ok(Self {
            seed: raw.seed,
            draw_count: raw.draw_count,
        })
    }
}

impl SolitaireConfig {
    /// Create a draw-three configuration with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            draw_count: DEFAULT_DRAW_COUNT,
        }
    }

    /// Create a draw-three configuration with a random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Set the number of cards drawn per stock click.
    #[must_use]
    pub fn with_draw_count(mut self, draw_count: usize) -> Self {
        assert!(draw_count > 0, "Must draw at least 1 card");
        self.draw_count = draw_count;
        self
    }

    /// Seed for the shuffle RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Cards moved from stock to waste per stock click.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }
}
