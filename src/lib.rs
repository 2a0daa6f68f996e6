//! # patience-core
//!
//! State engine for a single-deck rank-matching patience game.
//!
//! ## Design Principles
//!
//! 1. **Single Source of Truth**: The `Ledger` owns every card. Callers only
//!    ever receive snapshots and mutate through ledger operations.
//!
//! 2. **Mechanism vs. Policy**: Moving a card never checks legality. The
//!    rules module decides; the ledger executes.
//!
//! 3. **Explicit Sessions**: No globals. A `Session` is constructed at game
//!    start, passed around by the caller, and dropped at game end.
//!
//! ## Architecture
//!
//! - **Explicit Stacking Order**: Every card carries an `order`; the most
//!   recently placed card in a zone has the highest. Occlusion and the
//!   discard top are defined on it, never on container iteration order.
//!
//! - **Exact Undo**: Each move pushes the card's previous zone, position,
//!   and order. Undo pops and restores them verbatim.
//!
//! - **Presentation Protocol**: Overlap geometry is supplied through the
//!   `OverlapTest` trait. The engine is pull-based and never calls back.
//!
//! ## Modules
//!
//! - `core`: Card identity and placement types, configuration, errors
//! - `layout`: Initial layout document and validation
//! - `ledger`: Card ledger
//! - `history`: Move records and undo
//! - `rules`: Occlusion, matching, and move legality
//! - `session`: Game session composing the above

pub mod core;
pub mod layout;
pub mod ledger;
pub mod history;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, Position, Rank, Suit, Zone,
    SessionConfig,
    LayoutList, LedgerError, LoadError, MoveRejection,
};

pub use crate::layout::{Layout, LayoutEntry};

pub use crate::ledger::Ledger;

pub use crate::history::{MoveHistory, MoveRecord};

pub use crate::rules::{
    check_move, game_status, is_match, is_occluded, legal_moves,
    CardBounds, GameStatus, OverlapTest,
};

pub use crate::session::Session;
