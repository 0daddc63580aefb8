//! Klondike engine: deal, stock/waste cycle, and the click protocol.

use rustc_hash::FxHashSet;

use super::selection::Selection;
use crate::cards::{Card, CardArena};
use crate::core::{
    CardId, Click, FoundationIndex, GameRng, PileIndex, SolitaireConfig, SolitaireError, ZoneId,
    DECK_SIZE,
};
use crate::rules::{can_add_to_foundation, can_add_to_pile};
use crate::zones::ZoneManager;

/// Authoritative state of one Klondike game.
///
/// The engine owns every card and container plus the current selection.
/// Callers feed it already-classified clicks and redraw from the query
/// accessors afterwards; the engine never calls back out.
///
/// ## Usage
///
/// ```
/// use klondike_engine::Solitaire;
///
/// let mut game = Solitaire::with_seed(42);
/// assert_eq!(game.stock_len(), 24);
///
/// game.stock_clicked();
/// assert_eq!(game.waste_len(), 3);
/// assert!(game.waste_card().unwrap().is_face_up());
/// ```
#[derive(Clone, Debug)]
pub struct Solitaire {
    config: SolitaireConfig,
    rng: GameRng,
    cards: CardArena,
    zones: ZoneManager,
    selection: Selection,
}

impl Solitaire {
    /// Create an engine and deal the first game.
    #[must_use]
    pub fn new(config: SolitaireConfig) -> Self {
        let rng = GameRng::new(config.seed());
        let mut game = Self {
            config,
            rng,
            cards: CardArena::standard(),
            zones: ZoneManager::new(),
            selection: Selection::Idle,
        };
        game.new_game();
        game
    }

    /// Create a draw-three engine with the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SolitaireConfig::new(seed))
    }

    /// Create an engine dealt from a fixed stock order instead of a shuffle.
    ///
    /// `order` lists all 52 cards from the bottom of the stock to the top.
    /// Dealing pops from the top, so `order[51]` becomes pile 0.
    pub fn from_deck_order(config: SolitaireConfig, order: &[CardId]) -> Result<Self, SolitaireError> {
        if order.len() != DECK_SIZE {
            return Err(SolitaireError::CardCount { found: order.len() });
        }
        let mut seen = FxHashSet::default();
        for &id in order {
            if id.index() >= DECK_SIZE {
                return Err(SolitaireError::UnknownCard(id));
            }
            if !seen.insert(id) {
                return Err(SolitaireError::DuplicateCard(id));
            }
        }

        let rng = GameRng::new(config.seed());
        let mut game = Self {
            config,
            rng,
            cards: CardArena::standard(),
            zones: ZoneManager::new(),
            selection: Selection::Idle,
        };
        game.deal_from(order);
        Ok(game)
    }

    /// Shuffle a fresh deck and deal it.
    ///
    /// The shuffle repeatedly removes a uniformly random remaining card and
    /// pushes it onto the stock. Successive calls continue the same RNG
    /// stream, so a seeded engine deals a reproducible series of games.
    pub fn new_game(&mut self) {
        let mut deck: Vec<CardId> = CardId::all().collect();
        let mut order = Vec::with_capacity(DECK_SIZE);
        while !deck.is_empty() {
            let pick = self.rng.gen_range_usize(0..deck.len());
            order.push(deck.remove(pick));
        }
        self.deal_from(&order);
    }

    fn deal_from(&mut self, order: &[CardId]) {
        self.cards = CardArena::standard();
        self.zones.clear();
        self.selection = Selection::Idle;

        for &id in order {
            self.zones.add_to_zone(id, ZoneId::Stock);
        }

        for pile in PileIndex::all() {
            let zone = ZoneId::Pile(pile);
            for _ in 0..=pile.index() {
                self.zones.move_top(ZoneId::Stock, zone);
            }
            self.turn_up_top(zone);
        }

        log::trace!(
            "dealt seed {}: {} cards left in stock",
            self.rng.seed(),
            self.zones.zone_size(ZoneId::Stock)
        );
    }

    // === Click Entry Points ===

    /// Dispatch a click to the matching entry point.
    pub fn apply(&mut self, click: Click) {
        match click {
            Click::Stock => self.stock_clicked(),
            Click::Waste => self.waste_clicked(),
            Click::Foundation(index) => self.foundation_clicked(index),
            Click::Pile(index) => self.pile_clicked(index),
        }
    }

    /// Draw from the stock, or recycle the waste when the stock is empty.
    ///
    /// Does nothing while anything is selected.
    pub fn stock_clicked(&mut self) {
        if !self.selection.is_idle() {
            log::debug!("stock clicked: busy ({:?} selected)", self.selection);
            return;
        }

        if self.zones.is_empty(ZoneId::Stock) {
            self.reset_stock();
        } else {
            self.draw_cards();
        }
    }

    /// Toggle the waste selection.
    ///
    /// Selecting needs a non-empty waste and no selected pile; clicking an
    /// already selected waste deselects it.
    pub fn waste_clicked(&mut self) {
        match self.selection {
            Selection::Waste => {
                self.selection = Selection::Idle;
                log::debug!("waste clicked: deselected");
            }
            Selection::Pile(pile) => {
                log::debug!("waste clicked: busy ({} selected)", pile);
            }
            Selection::Idle => {
                if self.zones.is_empty(ZoneId::Waste) {
                    log::debug!("waste clicked: empty");
                } else {
                    self.selection = Selection::Waste;
                    log::debug!("waste clicked: selected");
                }
            }
        }
    }

    /// Move the selected card onto a foundation if it fits.
    ///
    /// With the waste selected, a legal move clears the selection and an
    /// illegal one leaves the waste selected. With a pile selected, the
    /// selection is cleared either way.
    pub fn foundation_clicked(&mut self, index: FoundationIndex) {
        let target = ZoneId::Foundation(index);

        match self.selection {
            Selection::Idle => {
                log::debug!("foundation #{} clicked: nothing selected", index.index());
            }
            Selection::Waste => {
                if self.top_fits_foundation(ZoneId::Waste, index) {
                    self.zones.move_top(ZoneId::Waste, target);
                    self.selection = Selection::Idle;
                    log::debug!("foundation #{} clicked: moved waste card", index.index());
                } else {
                    log::debug!("foundation #{} clicked: rejected waste card", index.index());
                }
            }
            Selection::Pile(pile) => {
                let source = ZoneId::Pile(pile);
                if self.top_fits_foundation(source, index) {
                    self.zones.move_top(source, target);
                    self.turn_up_top(source);
                    log::debug!("foundation #{} clicked: moved card from {}", index.index(), pile);
                } else {
                    log::debug!("foundation #{} clicked: rejected card from {}", index.index(), pile);
                }
                self.selection = Selection::Idle;
            }
        }
    }

    /// Select a pile, reveal its top card, or complete a move onto it.
    ///
    /// With no pile selected: a selected waste card that fits moves here;
    /// otherwise a face-down top card is turned up; otherwise this pile
    /// becomes the selection. With a pile selected: clicking it again
    /// deselects, clicking another pile tries to move the face-up run
    /// there. The selection is cleared after either.
    pub fn pile_clicked(&mut self, index: PileIndex) {
        let target = ZoneId::Pile(index);

        if let Selection::Pile(selected) = self.selection {
            if selected == index {
                log::debug!("pile #{} clicked: deselected", index.index());
            } else {
                self.move_run(selected, index);
            }
            self.selection = Selection::Idle;
            return;
        }

        if self.selection.is_waste() && self.top_fits_pile(ZoneId::Waste, index) {
            self.zones.move_top(ZoneId::Waste, target);
            self.selection = Selection::Idle;
            log::debug!("pile #{} clicked: moved waste card", index.index());
        } else if self.top(target).is_some_and(|card| !card.is_face_up()) {
            self.turn_up_top(target);
            log::debug!("pile #{} clicked: revealed top card", index.index());
        } else {
            self.selection = Selection::Pile(index);
            log::debug!("pile #{} clicked: selected", index.index());
        }
    }

    // === Moves ===

    fn draw_cards(&mut self) {
        let mut drawn = 0;
        while drawn < self.config.draw_count() {
            let Some(id) = self.zones.move_top(ZoneId::Stock, ZoneId::Waste) else {
                break;
            };
            self.cards.get_mut(id).turn_up();
            drawn += 1;
        }
        log::debug!("stock clicked: drew {} card(s)", drawn);
    }

    fn reset_stock(&mut self) {
        let mut recycled = 0;
        while let Some(id) = self.zones.move_top(ZoneId::Waste, ZoneId::Stock) {
            self.cards.get_mut(id).turn_down();
            recycled += 1;
        }
        log::debug!("stock clicked: recycled {} waste card(s)", recycled);
    }

    /// Move the face-up run of `from` onto `to` as one unit, or leave it.
    ///
    /// Returns whether the run moved.
    fn move_run(&mut self, from: PileIndex, to: PileIndex) -> bool {
        let source = ZoneId::Pile(from);
        let target = ZoneId::Pile(to);

        let cards = &self.cards;
        let run = self.zones.detach_run(source, |id| cards.get(id).is_face_up());
        let fits = run
            .base()
            .is_some_and(|base| can_add_to_pile(cards.get(base), self.top(target)));

        if fits {
            let moved = run.len();
            self.zones.commit_run(run, target);
            self.turn_up_top(source);
            log::debug!("pile #{} clicked: moved {} card(s) from {}", to.index(), moved, from);
        } else {
            self.zones.rollback_run(run);
            log::debug!("pile #{} clicked: rejected run from {}", to.index(), from);
        }
        fits
    }

    fn top_fits_foundation(&self, source: ZoneId, index: FoundationIndex) -> bool {
        self.top(source)
            .is_some_and(|card| can_add_to_foundation(card, self.top(ZoneId::Foundation(index))))
    }

    fn top_fits_pile(&self, source: ZoneId, index: PileIndex) -> bool {
        self.top(source)
            .is_some_and(|card| can_add_to_pile(card, self.top(ZoneId::Pile(index))))
    }

    fn turn_up_top(&mut self, zone: ZoneId) {
        if let Some(id) = self.zones.top_card(zone) {
            self.cards.get_mut(id).turn_up();
        }
    }

    fn top(&self, zone: ZoneId) -> Option<&Card> {
        self.zones.top_card(zone).map(|id| self.cards.get(id))
    }

    // === Queries ===

    /// Top of the stock, or `None` if empty.
    #[must_use]
    pub fn stock_card(&self) -> Option<&Card> {
        self.top(ZoneId::Stock)
    }

    /// Top of the waste, or `None` if empty.
    #[must_use]
    pub fn waste_card(&self) -> Option<&Card> {
        self.top(ZoneId::Waste)
    }

    /// Top of a foundation, or `None` if empty.
    #[must_use]
    pub fn foundation_card(&self, index: FoundationIndex) -> Option<&Card> {
        self.top(ZoneId::Foundation(index))
    }

    /// Cards of a pile, bottom to top, or `None` if the pile is empty.
    #[must_use]
    pub fn pile(&self, index: PileIndex) -> Option<&[CardId]> {
        let cards = self.zones.cards_in_zone_ordered(ZoneId::Pile(index));
        (!cards.is_empty()).then_some(cards)
    }

    /// Iterate the cards of a pile, bottom to top.
    pub fn pile_cards(&self, index: PileIndex) -> impl Iterator<Item = &Card> + '_ {
        self.zones
            .cards_in_zone_ordered(ZoneId::Pile(index))
            .iter()
            .map(|&id| self.cards.get(id))
    }

    /// Resolve a card ID.
    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        self.cards.get(id)
    }

    /// Read-only view of every container.
    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    #[must_use]
    pub fn config(&self) -> &SolitaireConfig {
        &self.config
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn is_waste_selected(&self) -> bool {
        self.selection.is_waste()
    }

    #[must_use]
    pub fn is_pile_selected(&self) -> bool {
        self.selection.is_pile()
    }

    /// The selected pile, if a pile is selected.
    #[must_use]
    pub fn selected_pile(&self) -> Option<PileIndex> {
        self.selection.pile()
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.zones.zone_size(ZoneId::Stock)
    }

    #[must_use]
    pub fn waste_len(&self) -> usize {
        self.zones.zone_size(ZoneId::Waste)
    }

    #[must_use]
    pub fn foundation_len(&self, index: FoundationIndex) -> usize {
        self.zones.zone_size(ZoneId::Foundation(index))
    }

    #[must_use]
    pub fn pile_len(&self, index: PileIndex) -> usize {
        self.zones.zone_size(ZoneId::Pile(index))
    }

    /// All four foundations are complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        FoundationIndex::all().all(|f| self.foundation_len(f) == 13)
    }

    /// Check the board invariants.
    ///
    /// - the containers hold each of the 52 cards exactly once
    /// - each card's recorded location matches the container holding it
    /// - no tableau pile has a face-down card above a face-up card
    /// - every foundation is an ascending run of one suit from the ace
    pub fn validate(&self) -> Result<(), SolitaireError> {
        let found: usize = ZoneId::all().map(|z| self.zones.zone_size(z)).sum();
        if found != DECK_SIZE {
            return Err(SolitaireError::CardCount { found });
        }

        let mut seen = FxHashSet::default();
        for zone in ZoneId::all() {
            for &id in self.zones.cards_in_zone_ordered(zone) {
                if id.index() >= DECK_SIZE {
                    return Err(SolitaireError::UnknownCard(id));
                }
                if !seen.insert(id) {
                    return Err(SolitaireError::DuplicateCard(id));
                }
            }
        }

        if let Some(id) = self.zones.first_misplaced() {
            return Err(SolitaireError::MisplacedCard(id));
        }

        for pile in PileIndex::all() {
            let mut seen_face_up = false;
            for card in self.pile_cards(pile) {
                if card.is_face_up() {
                    seen_face_up = true;
                } else if seen_face_up {
                    return Err(SolitaireError::FaceDownAboveFaceUp { pile });
                }
            }
        }

        for foundation in FoundationIndex::all() {
            let cards = self.zones.cards_in_zone_ordered(ZoneId::Foundation(foundation));
            let Some(&first) = cards.first() else {
                continue;
            };
            let suit = self.cards.get(first).suit();
            let ascending = cards.iter().enumerate().all(|(i, &id)| {
                let card = self.cards.get(id);
                card.suit() == suit && usize::from(card.rank().value()) == i + 1
            });
            if !ascending {
                return Err(SolitaireError::BrokenFoundation { foundation });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn id(value: u8, suit: Suit) -> CardId {
        CardArena::id_of(Rank::new(value).unwrap(), suit)
    }

    fn pile(i: usize) -> PileIndex {
        PileIndex::new(i).unwrap()
    }

    fn foundation(i: usize) -> FoundationIndex {
        FoundationIndex::new(i).unwrap()
    }

    /// Build a stock order that deals `tops[p]` as the face-up top of pile
    /// `p` and leaves `stock_top` (last element on top) on top of the stock.
    fn order_with(tops: [CardId; 7], stock_top: &[CardId]) -> Vec<CardId> {
        let fixed: Vec<CardId> = tops.iter().chain(stock_top).copied().collect();
        let mut filler = CardId::all().filter(|c| !fixed.contains(c));

        // Cards in the order the deal pops them.
        let mut popped = Vec::new();
        for (p, &top) in tops.iter().enumerate() {
            for _ in 0..p {
                popped.push(filler.next().unwrap());
            }
            popped.push(top);
        }

        let mut order: Vec<CardId> = filler.collect();
        order.extend_from_slice(stock_top);
        order.extend(popped.into_iter().rev());
        order
    }

    fn game_with(tops: [CardId; 7], stock_top: &[CardId]) -> Solitaire {
        let order = order_with(tops, stock_top);
        Solitaire::from_deck_order(SolitaireConfig::new(0), &order).unwrap()
    }

    fn default_tops() -> [CardId; 7] {
        [
            id(13, Suit::Spades),
            id(8, Suit::Hearts),
            id(7, Suit::Clubs),
            id(5, Suit::Spades),
            id(5, Suit::Hearts),
            id(12, Suit::Diamonds),
            id(3, Suit::Diamonds),
        ]
    }

    #[test]
    fn test_fresh_deal_shape() {
        let game = Solitaire::with_seed(42);

        assert_eq!(game.stock_len(), 24);
        assert_eq!(game.waste_len(), 0);
        for p in PileIndex::all() {
            assert_eq!(game.pile_len(p), p.index() + 1);
            let cards: Vec<_> = game.pile_cards(p).collect();
            let (top, rest) = cards.split_last().unwrap();
            assert!(top.is_face_up());
            assert!(rest.iter().all(|c| !c.is_face_up()));
        }
        assert!(game.stock_card().is_some_and(|c| !c.is_face_up()));
        assert!(game.selection().is_idle());
        game.validate().unwrap();
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = Solitaire::with_seed(7);
        let b = Solitaire::with_seed(7);
        for zone in ZoneId::all() {
            assert_eq!(a.zones().cards_in_zone_ordered(zone), b.zones().cards_in_zone_ordered(zone));
        }
    }

    #[test]
    fn test_new_game_reshuffles() {
        let mut game = Solitaire::with_seed(7);
        let first = game.zones().cards_in_zone_ordered(ZoneId::Stock).to_vec();
        game.stock_clicked();
        game.waste_clicked();

        game.new_game();
        assert!(game.selection().is_idle());
        assert_eq!(game.waste_len(), 0);
        assert_ne!(game.zones().cards_in_zone_ordered(ZoneId::Stock), first.as_slice());
        game.validate().unwrap();
    }

    #[test]
    fn test_from_deck_order_rejects_bad_orders() {
        let config = SolitaireConfig::new(0);
        let short: Vec<_> = CardId::all().take(51).collect();
        assert_eq!(
            Solitaire::from_deck_order(config.clone(), &short).unwrap_err(),
            SolitaireError::CardCount { found: 51 }
        );

        let mut dup: Vec<_> = CardId::all().collect();
        dup[1] = dup[0];
        assert_eq!(
            Solitaire::from_deck_order(config.clone(), &dup).unwrap_err(),
            SolitaireError::DuplicateCard(dup[0])
        );

        let mut unknown: Vec<_> = CardId::all().collect();
        unknown[0] = CardId(60);
        assert_eq!(
            Solitaire::from_deck_order(config, &unknown).unwrap_err(),
            SolitaireError::UnknownCard(CardId(60))
        );
    }

    #[test]
    fn test_from_deck_order_places_tops() {
        let tops = default_tops();
        let game = game_with(tops, &[id(1, Suit::Hearts)]);
        for (p, &top) in tops.iter().enumerate() {
            assert_eq!(game.zones().top_card(ZoneId::Pile(pile(p))), Some(top));
        }
        assert_eq!(game.zones().top_card(ZoneId::Stock), Some(id(1, Suit::Hearts)));
    }

    #[test]
    fn test_draw_three_and_reset() {
        let mut game = Solitaire::with_seed(3);
        let original = game.zones().cards_in_zone_ordered(ZoneId::Stock).to_vec();

        for _ in 0..8 {
            game.stock_clicked();
        }
        assert_eq!(game.stock_len(), 0);
        assert_eq!(game.waste_len(), 24);
        assert!(game.stock_card().is_none());

        game.stock_clicked();
        assert_eq!(game.waste_len(), 0);
        assert_eq!(game.zones().cards_in_zone_ordered(ZoneId::Stock), original.as_slice());
        assert!(game.zones().cards_in_zone_ordered(ZoneId::Stock).iter().all(|&c| !game.card(c).is_face_up()));
    }

    #[test]
    fn test_draw_stops_when_stock_runs_out() {
        let mut game = Solitaire::new(SolitaireConfig::new(3).with_draw_count(5));
        for _ in 0..4 {
            game.stock_clicked();
        }
        assert_eq!(game.waste_len(), 20);
        game.stock_clicked();
        assert_eq!(game.waste_len(), 24);
        assert_eq!(game.stock_len(), 0);
    }

    #[test]
    fn test_stock_busy_while_selected() {
        let mut game = Solitaire::with_seed(3);
        game.stock_clicked();
        game.waste_clicked();
        assert!(game.is_waste_selected());

        game.stock_clicked();
        assert_eq!(game.waste_len(), 3);

        game.waste_clicked();
        game.pile_clicked(pile(0));
        assert!(game.is_pile_selected());
        game.stock_clicked();
        assert_eq!(game.waste_len(), 3);
    }

    #[test]
    fn test_waste_toggle_and_busy() {
        let mut game = Solitaire::with_seed(3);

        game.waste_clicked();
        assert!(game.selection().is_idle(), "empty waste cannot be selected");

        game.stock_clicked();
        game.waste_clicked();
        assert!(game.is_waste_selected());
        game.waste_clicked();
        assert!(game.selection().is_idle());

        game.pile_clicked(pile(4));
        game.waste_clicked();
        assert_eq!(game.selected_pile(), Some(pile(4)));
    }

    #[test]
    fn test_waste_ace_to_foundation() {
        // Draw pops the stock top first, so the waste ends up topped by
        // the third card from the top of the stock.
        let mut game = game_with(default_tops(), &[id(1, Suit::Hearts), id(2, Suit::Spades), id(9, Suit::Clubs)]);
        game.stock_clicked();
        assert_eq!(game.waste_card().map(|c| c.display_key()), Some("ah".to_string()));

        game.waste_clicked();
        game.foundation_clicked(foundation(0));

        assert_eq!(game.foundation_len(foundation(0)), 1);
        assert_eq!(game.foundation_card(foundation(0)).map(|c| c.rank()), Some(Rank::ACE));
        assert_eq!(game.waste_card().map(|c| c.display_key()), Some("2s".to_string()));
        assert!(game.selection().is_idle());
        game.validate().unwrap();
    }

    #[test]
    fn test_waste_illegal_foundation_keeps_selection() {
        let mut game = game_with(default_tops(), &[id(9, Suit::Clubs), id(2, Suit::Spades), id(4, Suit::Hearts)]);
        game.stock_clicked();
        assert_eq!(game.waste_card().map(|c| c.display_key()), Some("9c".to_string()));

        game.waste_clicked();
        game.foundation_clicked(foundation(1));
        assert!(game.is_waste_selected());
        assert_eq!(game.foundation_len(foundation(1)), 0);
        assert_eq!(game.waste_len(), 3);
    }

    #[test]
    fn test_waste_to_pile() {
        // Black 7 from the waste onto the red 8 of pile 1.
        let mut game = game_with(default_tops(), &[id(7, Suit::Spades), id(3, Suit::Hearts), id(2, Suit::Hearts)]);
        game.stock_clicked();
        assert_eq!(game.waste_card().map(|c| c.display_key()), Some("7s".to_string()));

        game.waste_clicked();
        game.pile_clicked(pile(1));

        assert_eq!(game.pile_len(pile(1)), 3);
        assert_eq!(game.zones().top_card(ZoneId::Pile(pile(1))), Some(id(7, Suit::Spades)));
        assert!(game.selection().is_idle());
        game.validate().unwrap();
    }

    #[test]
    fn test_waste_illegal_pile_selects_target() {
        let mut game = game_with(default_tops(), &[id(7, Suit::Spades), id(3, Suit::Hearts), id(2, Suit::Hearts)]);
        game.stock_clicked();
        game.waste_clicked();

        // Pile 2 is topped by a black 7: not a legal target for a black 7.
        game.pile_clicked(pile(2));
        assert_eq!(game.selected_pile(), Some(pile(2)));
        assert_eq!(game.waste_len(), 3);
    }

    #[test]
    fn test_pile_run_move_reveals_source() {
        // Black 7 on pile 2 onto red 8 on pile 1.
        let mut game = game_with(default_tops(), &[]);

        game.pile_clicked(pile(2));
        assert_eq!(game.selected_pile(), Some(pile(2)));
        game.pile_clicked(pile(1));

        assert!(game.selection().is_idle());
        assert_eq!(game.pile_len(pile(1)), 3);
        assert_eq!(game.pile_len(pile(2)), 2);
        assert!(game.pile_cards(pile(2)).last().unwrap().is_face_up());
        game.validate().unwrap();

        // Move the two-card run (8h, 7c) onto nothing legal: rollback.
        game.pile_clicked(pile(1));
        game.pile_clicked(pile(3));
        assert_eq!(game.pile_len(pile(1)), 3);
        assert_eq!(game.zones().top_card(ZoneId::Pile(pile(1))), Some(id(7, Suit::Clubs)));
        assert!(game.selection().is_idle());
        game.validate().unwrap();
    }

    #[test]
    fn test_run_move_carries_whole_run() {
        let mut tops = default_tops();
        tops[5] = id(9, Suit::Spades);
        let mut game = game_with(tops, &[]);

        // 7c onto 8h builds a two-card run on pile 1.
        game.pile_clicked(pile(2));
        game.pile_clicked(pile(1));
        let run = [id(8, Suit::Hearts), id(7, Suit::Clubs)];

        // The whole run moves onto the black 9, in order.
        game.pile_clicked(pile(1));
        game.pile_clicked(pile(5));

        let target = game.zones().cards_in_zone_ordered(ZoneId::Pile(pile(5)));
        assert_eq!(target.len(), 8);
        assert_eq!(&target[6..], &run[..]);
        assert_eq!(game.pile_len(pile(1)), 1);
        assert!(game.pile_cards(pile(1)).all(Card::is_face_up));
        game.validate().unwrap();
    }

    #[test]
    fn test_same_color_same_rank_rejected() {
        // Red 5 (pile 4) onto black 5 (pile 3).
        let mut game = game_with(default_tops(), &[]);
        let before: Vec<_> = ZoneId::all()
            .map(|z| game.zones().cards_in_zone_ordered(z).to_vec())
            .collect();

        game.pile_clicked(pile(4));
        game.pile_clicked(pile(3));

        let after: Vec<_> = ZoneId::all()
            .map(|z| game.zones().cards_in_zone_ordered(z).to_vec())
            .collect();
        assert_eq!(before, after);
        assert!(game.selection().is_idle());
    }

    #[test]
    fn test_reselect_same_pile_deselects() {
        let mut game = Solitaire::with_seed(11);
        game.pile_clicked(pile(3));
        assert_eq!(game.selected_pile(), Some(pile(3)));
        game.pile_clicked(pile(3));
        assert!(game.selection().is_idle());
        assert_eq!(game.pile_len(pile(3)), 4);
    }

    #[test]
    fn test_pile_to_foundation_clears_selection() {
        let mut tops = default_tops();
        tops[6] = id(1, Suit::Diamonds);
        let mut game = game_with(tops, &[]);

        // Illegal: king of spades onto an empty foundation.
        game.pile_clicked(pile(0));
        game.foundation_clicked(foundation(2));
        assert!(game.selection().is_idle());
        assert_eq!(game.pile_len(pile(0)), 1);

        // Legal: ace of diamonds, and the card beneath turns up.
        game.pile_clicked(pile(6));
        game.foundation_clicked(foundation(2));
        assert!(game.selection().is_idle());
        assert_eq!(game.foundation_len(foundation(2)), 1);
        assert_eq!(game.pile_len(pile(6)), 6);
        assert!(game.pile_cards(pile(6)).last().unwrap().is_face_up());
        game.validate().unwrap();
    }

    #[test]
    fn test_king_to_empty_pile() {
        let mut tops = default_tops();
        tops[0] = id(1, Suit::Clubs);
        tops[3] = id(13, Suit::Hearts);
        let mut game = game_with(tops, &[]);

        game.pile_clicked(pile(0));
        game.foundation_clicked(foundation(0));
        assert!(game.pile(pile(0)).is_none());

        game.pile_clicked(pile(3));
        game.pile_clicked(pile(0));
        assert_eq!(game.pile(pile(0)), Some(&[id(13, Suit::Hearts)][..]));
        game.validate().unwrap();
    }

    #[test]
    fn test_empty_pile_selection_is_harmless() {
        let mut tops = default_tops();
        tops[0] = id(1, Suit::Clubs);
        let mut game = game_with(tops, &[]);
        game.pile_clicked(pile(0));
        game.foundation_clicked(foundation(0));

        // Select the empty pile, then try to use it as a source.
        game.pile_clicked(pile(0));
        assert_eq!(game.selected_pile(), Some(pile(0)));
        game.pile_clicked(pile(1));
        assert!(game.selection().is_idle());

        game.pile_clicked(pile(0));
        game.foundation_clicked(foundation(1));
        assert!(game.selection().is_idle());
        game.validate().unwrap();
    }

    #[test]
    fn test_idle_click_reveals_face_down_top() {
        let mut game = game_with(default_tops(), &[]);
        let top = id(5, Suit::Spades);
        game.cards.get_mut(top).turn_down();
        assert!(!game.card(top).is_face_up());

        game.pile_clicked(pile(3));
        assert!(game.card(top).is_face_up());
        assert!(game.selection().is_idle());
        assert_eq!(game.pile_len(pile(3)), 4);

        // Now face-up, the next click selects it.
        game.pile_clicked(pile(3));
        assert_eq!(game.selected_pile(), Some(pile(3)));
        game.validate().unwrap();
    }

    #[test]
    fn test_deserialized_config_always_draws() {
        assert!(serde_json::from_str::<SolitaireConfig>(r#"{"seed":1,"draw_count":0}"#).is_err());

        let config: SolitaireConfig = serde_json::from_str(r#"{"seed":1,"draw_count":1}"#).unwrap();
        let mut game = Solitaire::new(config);
        game.stock_clicked();
        assert_eq!(game.waste_len(), 1);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut a = Solitaire::with_seed(5);
        let mut b = Solitaire::with_seed(5);

        a.stock_clicked();
        a.waste_clicked();
        b.apply(Click::Stock);
        b.apply(Click::Waste);

        assert_eq!(a.selection(), b.selection());
        assert_eq!(a.waste_len(), b.waste_len());
    }

    #[test]
    fn test_not_won_at_start() {
        assert!(!Solitaire::with_seed(1).is_won());
    }
}
