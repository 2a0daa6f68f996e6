//! Error types.
//!
//! Every operation reports failure as a value. Absence (unknown id on a
//! query, empty undo stack) is an `Option`; the types here cover outcomes
//! the caller has to classify.

use thiserror::Error;

use super::card::{CardId, Rank, Zone};

/// Which list of the layout an entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutList {
    Main,
    Stack,
}

impl std::fmt::Display for LayoutList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutList::Main => f.write_str("mainZoneEntries"),
            LayoutList::Stack => f.write_str("stackZoneEntries"),
        }
    }
}

/// A layout could not be loaded. Nothing is populated when this is returned.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("malformed layout document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{list}[{index}]: face {face} outside 0..=12")]
    FaceOutOfRange { list: LayoutList, index: usize, face: u8 },
    #[error("{list}[{index}]: suit {suit} outside 0..=3")]
    SuitOutOfRange { list: LayoutList, index: usize, suit: u8 },
    #[error("{list}[{index}]: position is not finite")]
    NonFinitePosition { list: LayoutList, index: usize },
    #[error("stackZoneEntries is empty; no card can start on the discard pile")]
    EmptyStack,
}

/// Ledger mutation failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("{0} not found")]
    NotFound(CardId),
    #[error("stacking orders exhausted for this session")]
    OrderExhausted,
}

/// A requested move is not legal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("{0} not found")]
    NotFound(CardId),
    #[error("{0} is covered by a later card")]
    Occluded(CardId),
    #[error("{0} is already on the discard pile")]
    AlreadyDiscarded(CardId),
    #[error("{card} ({rank}) does not match discard top ({top})")]
    NoMatch { card: CardId, rank: Rank, top: Rank },
    #[error("invariant violation moving {card} from {from} to {to}: {detail}")]
    InvariantViolation {
        card: CardId,
        from: Zone,
        to: Zone,
        detail: &'static str,
    },
    #[error("stacking orders exhausted for this session")]
    OrderExhausted,
}

impl From<LedgerError> for MoveRejection {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound(id) => MoveRejection::NotFound(id),
            LedgerError::OrderExhausted => MoveRejection::OrderExhausted,
        }
    }
}
