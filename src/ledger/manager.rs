//! Card ledger: the single source of truth for card placement.
//!
//! The `Ledger` owns every card record in a session. It supports:
//! - Bulk creation from a validated layout
//! - Snapshot queries by id, by zone, and by stacking order
//! - Moves that record their inverse on a `MoveHistory`
//!
//! The ledger is a mechanism, not a policy: `move_card` performs no legality
//! check. Callers consult `rules::check_move` first.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::core::card::{Card, CardId, Position, Zone};
use crate::core::error::{LedgerError, LoadError};
use crate::history::{MoveHistory, MoveRecord};
use crate::layout::Layout;

/// Owns all cards of a session.
///
/// ## Usage
///
/// ```
/// use patience_core::core::{CardId, Position, Zone};
/// use patience_core::history::MoveHistory;
/// use patience_core::layout::{Layout, LayoutEntry};
/// use patience_core::ledger::Ledger;
///
/// let layout = Layout::new(
///     vec![LayoutEntry::new(3, 0, Position::new(0.0, 0.0))],
///     vec![
///         LayoutEntry::new(7, 1, Position::new(0.0, -400.0)),
///         LayoutEntry::new(8, 2, Position::new(100.0, -400.0)),
///     ],
/// );
/// let mut ledger = Ledger::load(&layout).unwrap();
/// let mut history = MoveHistory::new();
///
/// assert_eq!(ledger.query_by_id(CardId(2)).unwrap().zone, Zone::Discard);
///
/// ledger
///     .move_card(&mut history, CardId(1), Zone::Discard, Position::new(100.0, -400.0))
///     .unwrap();
/// assert_eq!(ledger.discard_top().unwrap().id, CardId(1));
///
/// history.pop_and_restore(&mut ledger);
/// assert_eq!(ledger.discard_top().unwrap().id, CardId(2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    /// Card records: card_id -> card
    cards: FxHashMap<CardId, Card>,

    /// Next stacking order to hand out. Strictly greater than every order
    /// currently held by a card.
    next_order: u32,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from a layout.
    ///
    /// IDs are assigned from 0, main entries first then stack entries, both
    /// in input order. Every stack entry starts in Stock except the last,
    /// which starts on the discard pile. Validation runs before any card is
    /// created, so an error leaves nothing behind.
    pub fn load(layout: &Layout) -> Result<Self, LoadError> {
        let (main, stack) = layout.resolve()?;
        let discard_index = stack.len() - 1;

        let placements = main
            .iter()
            .map(|entry| (entry, Zone::Main))
            .chain(stack.iter().enumerate().map(|(i, entry)| {
                let zone = if i == discard_index { Zone::Discard } else { Zone::Stock };
                (entry, zone)
            }));

        let mut ledger = Self::new();
        for (entry, zone) in placements {
            let id = CardId(ledger.next_order);
            ledger.cards.insert(
                id,
                Card {
                    id,
                    rank: entry.rank,
                    suit: entry.suit,
                    zone,
                    position: entry.position,
                    order: ledger.next_order,
                },
            );
            ledger.next_order += 1;
        }

        debug!(
            main = main.len(),
            stock = discard_index,
            discard = 1,
            "layout loaded"
        );
        Ok(ledger)
    }

    /// Get a snapshot of a card.
    #[must_use]
    pub fn query_by_id(&self, id: CardId) -> Option<Card> {
        self.cards.get(&id).cloned()
    }

    /// Get snapshots of every card in a zone, sorted by id.
    #[must_use]
    pub fn query_by_zone(&self, zone: Zone) -> Vec<Card> {
        let mut cards: Vec<Card> = self.cards_in_zone(zone).cloned().collect();
        cards.sort_by_key(|c| c.id);
        cards
    }

    /// Get snapshots of a zone in stacking order, bottom first.
    #[must_use]
    pub fn zone_stack(&self, zone: Zone) -> Vec<Card> {
        let mut cards: Vec<Card> = self.cards_in_zone(zone).cloned().collect();
        cards.sort_by_key(|c| c.order);
        cards
    }

    /// The most recently placed discard card.
    #[must_use]
    pub fn discard_top(&self) -> Option<Card> {
        self.cards_in_zone(Zone::Discard)
            .max_by_key(|c| c.order)
            .cloned()
    }

    /// Move a card, recording its previous placement on `history`.
    ///
    /// The moved card gets a fresh stacking order, placing it on top of its
    /// target zone. An unknown id, or running out of stacking orders,
    /// changes neither the ledger nor the history.
    pub fn move_card(
        &mut self,
        history: &mut MoveHistory,
        id: CardId,
        zone: Zone,
        position: Position,
    ) -> Result<MoveRecord, LedgerError> {
        let card = self.cards.get_mut(&id).ok_or(LedgerError::NotFound(id))?;
        let order = self.next_order;
        let next_order = order.checked_add(1).ok_or(LedgerError::OrderExhausted)?;

        let record = MoveRecord {
            card: id,
            previous_zone: card.zone,
            previous_position: card.position,
            previous_order: card.order,
        };

        card.zone = zone;
        card.position = position;
        card.order = order;
        self.next_order = next_order;

        debug!(card = %id, from = %record.previous_zone, to = %zone, "card moved");
        history.push(record.clone());
        Ok(record)
    }

    /// Put a card back where a move record says it was.
    ///
    /// Returns `false` if the card is not in the ledger. Only undo may call
    /// this; any other record would break stacking-order uniqueness.
    pub(crate) fn restore(&mut self, record: &MoveRecord) -> bool {
        let Some(card) = self.cards.get_mut(&record.card) else {
            warn!(card = %record.card, "undo references a card missing from the ledger");
            return false;
        };

        card.zone = record.previous_zone;
        card.position = record.previous_position;
        card.order = record.previous_order;
        true
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.cards_in_zone(zone).count()
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the ledger holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check if a card exists.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    fn cards_in_zone(&self, zone: Zone) -> impl Iterator<Item = &Card> + '_ {
        self.cards.values().filter(move |c| c.zone == zone)
    }
}
