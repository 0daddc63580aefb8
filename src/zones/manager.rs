//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` owns the ordering of every container on the board and
//! tracks which container each card is in. It supports:
//! - Single-card transfers (`move_top`) that pop and push in one call
//! - Run transfers (`detach_run`, then `commit_run` or `rollback_run`)
//! - Ordered lookup (bottom to top) and top-card peeks
//!
//! Every zone is ordered; index 0 is the bottom, the last index is the top.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::config::ZoneId;
use crate::core::entity::CardId;

/// Longest run a tableau pile can hold: king down to ace.
pub const MAX_RUN: usize = 13;

/// A run of cards lifted off the top of a zone.
///
/// The cards keep their location in the source zone until the run is
/// committed elsewhere, so the card count never dips while a move is
/// being decided. A run must be handed back to the manager through
/// `commit_run` or `rollback_run`.
#[must_use = "a detached run must be committed or rolled back"]
#[derive(Debug, PartialEq, Eq)]
pub struct Run {
    source: ZoneId,
    /// Bottom to top, in the order they sat in the source.
    cards: SmallVec<[CardId; MAX_RUN]>,
}

impl Run {
    /// Zone the run was lifted from.
    #[must_use]
    pub fn source(&self) -> ZoneId {
        self.source
    }

    /// Bottom-most card of the run: the one that must fit the target.
    #[must_use]
    pub fn base(&self) -> Option<CardId> {
        self.cards.first().copied()
    }

    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Manages card locations across zones.
///
/// ## Usage
///
/// ```
/// use klondike_engine::zones::ZoneManager;
/// use klondike_engine::core::{CardId, ZoneId};
///
/// let mut manager = ZoneManager::new();
///
/// manager.add_to_zone(CardId::new(10), ZoneId::Stock);
/// manager.add_to_zone(CardId::new(11), ZoneId::Stock);
///
/// // Pop the top of the stock and push it onto the waste
/// let moved = manager.move_top(ZoneId::Stock, ZoneId::Waste);
/// assert_eq!(moved, Some(CardId::new(11)));
/// assert_eq!(manager.top_card(ZoneId::Waste), Some(CardId::new(11)));
/// ```
#[derive(Clone, Debug)]
pub struct ZoneManager {
    /// Card locations: card_id -> zone_id
    locations: FxHashMap<CardId, ZoneId>,

    /// Ordered card lists, one per board zone.
    zone_order: FxHashMap<ZoneId, Vec<CardId>>,
}

impl Default for ZoneManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneManager {
    /// Create a manager with every board zone present and empty.
    #[must_use]
    pub fn new() -> Self {
        let zone_order = ZoneId::all().map(|zone| (zone, Vec::new())).collect();
        Self {
            locations: FxHashMap::default(),
            zone_order,
        }
    }

    /// Empty every zone.
    pub fn clear(&mut self) {
        self.locations.clear();
        for order in self.zone_order.values_mut() {
            order.clear();
        }
    }

    /// Push a card onto the top of a zone.
    ///
    /// Panics if the card is already tracked.
    pub fn add_to_zone(&mut self, card: CardId, zone: ZoneId) {
        if self.locations.contains_key(&card) {
            panic!("{} already exists in zone manager", card);
        }

        self.locations.insert(card, zone);
        self.order_mut(zone).push(card);
    }

    /// Pop the top card of `from` and push it onto `to`.
    ///
    /// Returns the moved card, or `None` if `from` was empty.
    pub fn move_top(&mut self, from: ZoneId, to: ZoneId) -> Option<CardId> {
        let card = self.order_mut(from).pop()?;
        self.locations.insert(card, to);
        self.order_mut(to).push(card);
        Some(card)
    }

    /// Lift the maximal run of top cards of `from` that satisfy `keep`.
    ///
    /// The run may be empty. It must be passed to `commit_run` or
    /// `rollback_run` before the manager is used for anything else.
    pub fn detach_run(&mut self, from: ZoneId, mut keep: impl FnMut(CardId) -> bool) -> Run {
        let order = self.order_mut(from);
        let run_len = order.iter().rev().take_while(|&&card| keep(card)).count();
        let split = order.len() - run_len;
        let cards = order.drain(split..).collect();
        Run { source: from, cards }
    }

    /// Place a detached run on top of `to`, preserving its order.
    pub fn commit_run(&mut self, run: Run, to: ZoneId) {
        for &card in &run.cards {
            self.locations.insert(card, to);
        }
        self.order_mut(to).extend(run.cards);
    }

    /// Put a detached run back where it came from, unchanged.
    pub fn rollback_run(&mut self, run: Run) {
        self.order_mut(run.source).extend(run.cards);
    }

    /// Get the zone a card is in.
    #[must_use]
    pub fn get_zone(&self, card: CardId) -> Option<ZoneId> {
        self.locations.get(&card).copied()
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in_zone(&self, card: CardId, zone: ZoneId) -> bool {
        self.locations.get(&card) == Some(&zone)
    }

    /// Get the cards of a zone, bottom to top.
    #[must_use]
    pub fn cards_in_zone_ordered(&self, zone: ZoneId) -> &[CardId] {
        self.zone_order.get(&zone).map_or(&[], |v| v.as_slice())
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: ZoneId) -> usize {
        self.cards_in_zone_ordered(zone).len()
    }

    #[must_use]
    pub fn is_empty(&self, zone: ZoneId) -> bool {
        self.zone_size(zone) == 0
    }

    /// Get the top card of a zone.
    #[must_use]
    pub fn top_card(&self, zone: ZoneId) -> Option<CardId> {
        self.cards_in_zone_ordered(zone).last().copied()
    }

    /// Number of distinct cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// First card whose recorded location disagrees with the zone lists.
    ///
    /// Every listed card must be recorded in the zone that lists it, and
    /// every recorded card must appear in its recorded zone.
    #[must_use]
    pub fn first_misplaced(&self) -> Option<CardId> {
        for (&zone, order) in &self.zone_order {
            if let Some(&card) = order.iter().find(|&&card| self.get_zone(card) != Some(zone)) {
                return Some(card);
            }
        }
        self.locations
            .iter()
            .find(|&(&card, &zone)| !self.cards_in_zone_ordered(zone).contains(&card))
            .map(|(&card, _)| card)
    }

    fn order_mut(&mut self, zone: ZoneId) -> &mut Vec<CardId> {
        self.zone_order.entry(zone).or_default()
    }
}
