//! Game session: one ledger, one move history, one configuration.
//!
//! A `Session` is created explicitly at game start and ends when dropped.
//! Nothing is shared between sessions. Cloning is cheap and yields an
//! independent snapshot.

use tracing::info;

use crate::core::card::{Card, CardId, Position, Zone};
use crate::core::config::SessionConfig;
use crate::core::error::{LedgerError, LoadError, MoveRejection};
use crate::history::{MoveHistory, MoveRecord};
use crate::layout::Layout;
use crate::ledger::Ledger;
use crate::rules::{self, GameStatus, OverlapTest};

/// A single game in progress.
///
/// ## Usage
///
/// ```
/// use patience_core::core::{CardId, Position, SessionConfig, Zone};
/// use patience_core::rules::CardBounds;
/// use patience_core::session::Session;
///
/// let json = r#"{
///     "mainZoneEntries": [{"face": 7, "suit": 0, "position": {"x": 0, "y": 0}}],
///     "stackZoneEntries": [{"face": 8, "suit": 1, "position": {"x": 0, "y": -400}}]
/// }"#;
/// let mut session = Session::from_json(json, SessionConfig::default()).unwrap();
/// let bounds = CardBounds::new(100.0, 140.0);
///
/// let record = session.play(CardId(0), Position::new(0.0, -400.0), &bounds).unwrap();
/// assert_eq!(record.previous_zone, Zone::Main);
/// assert_eq!(session.discard_top().unwrap().id, CardId(0));
///
/// session.undo();
/// assert_eq!(session.query_by_id(CardId(0)).unwrap().zone, Zone::Main);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    ledger: Ledger,
    history: MoveHistory,
    config: SessionConfig,
}

impl Session {
    /// Start a session from a layout.
    pub fn start(layout: &Layout, config: SessionConfig) -> Result<Self, LoadError> {
        let ledger = Ledger::load(layout)?;
        let history = MoveHistory::with_limit(config.max_undo_depth);

        info!(cards = ledger.len(), wrap_ranks = config.wrap_ranks, "session started");
        Ok(Self {
            ledger,
            history,
            config,
        })
    }

    /// Start a session from a layout JSON document.
    pub fn from_json(json: &str, config: SessionConfig) -> Result<Self, LoadError> {
        Self::start(&Layout::from_json(json)?, config)
    }

    /// The card ledger.
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The undo stack.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // === Queries ===

    /// Snapshot of a card, or `None` for an unknown id.
    #[must_use]
    pub fn query_by_id(&self, id: CardId) -> Option<Card> {
        self.ledger.query_by_id(id)
    }

    /// Snapshots of every card in a zone, sorted by id.
    #[must_use]
    pub fn query_by_zone(&self, zone: Zone) -> Vec<Card> {
        self.ledger.query_by_zone(zone)
    }

    /// Snapshots of a zone in stacking order, bottom first.
    #[must_use]
    pub fn zone_stack(&self, zone: Zone) -> Vec<Card> {
        self.ledger.zone_stack(zone)
    }

    /// The most recently placed discard card.
    #[must_use]
    pub fn discard_top(&self) -> Option<Card> {
        self.ledger.discard_top()
    }

    // === Rules ===

    /// Check a card's rank against the discard top.
    #[must_use]
    pub fn is_match(&self, id: CardId) -> bool {
        rules::is_match(&self.ledger, id, &self.config)
    }

    /// Check if a card is covered within its zone. Unknown cards are not.
    #[must_use]
    pub fn is_occluded<T: OverlapTest + ?Sized>(&self, id: CardId, test: &T) -> bool {
        self.ledger
            .query_by_id(id)
            .is_some_and(|card| rules::is_occluded(&card, &self.ledger.zone_stack(card.zone), test))
    }

    /// Check whether a card may move onto the discard pile.
    pub fn check_move<T: OverlapTest + ?Sized>(
        &self,
        id: CardId,
        test: &T,
    ) -> Result<(), MoveRejection> {
        rules::check_move(&self.ledger, id, Zone::Discard, test, &self.config)
    }

    /// Every card that may currently move onto the discard pile, by id.
    #[must_use]
    pub fn legal_moves<T: OverlapTest + ?Sized>(&self, test: &T) -> Vec<CardId> {
        rules::legal_moves(&self.ledger, test, &self.config)
    }

    /// Whether the game is cleared, stuck, or still in progress.
    #[must_use]
    pub fn status<T: OverlapTest + ?Sized>(&self, test: &T) -> GameStatus {
        rules::game_status(&self.ledger, test, &self.config)
    }

    // === Mutation ===

    /// Move a card without checking legality.
    pub fn move_card(
        &mut self,
        id: CardId,
        zone: Zone,
        position: Position,
    ) -> Result<MoveRecord, LedgerError> {
        self.ledger.move_card(&mut self.history, id, zone, position)
    }

    /// Check a move and, if legal, put the card on the discard pile.
    pub fn play<T: OverlapTest + ?Sized>(
        &mut self,
        id: CardId,
        position: Position,
        test: &T,
    ) -> Result<MoveRecord, MoveRejection> {
        self.check_move(id, test)?;
        Ok(self.move_card(id, Zone::Discard, position)?)
    }

    /// Undo the most recent move. `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        self.history.pop_and_restore(&mut self.ledger)
    }
}
