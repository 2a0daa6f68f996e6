//! Core types: card identity and placement, configuration, errors.
//!
//! These are plain values shared by every other module. None of them hold
//! references into the ledger.

pub mod card;
pub mod config;
pub mod error;

pub use card::{Card, CardId, Position, Rank, Suit, Zone};
pub use config::SessionConfig;
pub use error::{LayoutList, LedgerError, LoadError, MoveRejection};
