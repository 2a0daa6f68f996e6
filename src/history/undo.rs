//! Move records and the undo stack.
//!
//! Every successful `Ledger::move_card` pushes the card's placement from just
//! before the move. Undo pops the most recent record and writes that
//! placement back. There is no redo: a popped record is gone.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::card::{CardId, Position, Zone};
use crate::ledger::Ledger;

/// Placement of a card immediately before a move.
///
/// Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The card that moved.
    pub card: CardId,

    /// Zone before the move.
    pub previous_zone: Zone,

    /// Position before the move.
    pub previous_position: Position,

    /// Stacking order before the move.
    pub previous_order: u32,
}

/// LIFO stack of move records, most recent last.
///
/// Uses `im::Vector` so cloning a session is O(1). Only the ledger adds
/// records, so the history cannot be built from outside the crate.
#[derive(Clone, Debug, Default)]
pub struct MoveHistory {
    records: Vector<MoveRecord>,

    /// Maximum depth. `None` for unlimited.
    limit: Option<usize>,
}

impl MoveHistory {
    /// Create an unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `limit` records.
    ///
    /// `None` is unbounded.
    #[must_use]
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            records: Vector::new(),
            limit,
        }
    }

    /// Push a record, dropping the oldest one if the limit is exceeded.
    ///
    /// Records only come from `Ledger::move_card`.
    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push_back(record);
        if let Some(limit) = self.limit {
            while self.records.len() > limit {
                self.records.pop_front();
            }
        }
    }

    /// Undo the most recent move.
    ///
    /// Returns `None` when there is nothing to undo. Otherwise the record is
    /// consumed and returned so the caller can reflect the restoration, even
    /// if the card it names is no longer in the ledger.
    pub fn pop_and_restore(&mut self, ledger: &mut Ledger) -> Option<MoveRecord> {
        let record = self.records.pop_back()?;
        let restored = ledger.restore(&record);
        debug!(card = %record.card, to = %record.previous_zone, restored, "move undone");
        Some(record)
    }

    /// The most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// Iterate records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.records.iter()
    }

    /// Number of undoable moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Discard every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
