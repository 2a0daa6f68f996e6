//! Move history for undo.
//!
//! ## Key Types
//!
//! - `MoveRecord`: A card's placement captured before a move
//! - `MoveHistory`: LIFO stack of records with pop-and-restore

pub mod undo;

pub use undo::{MoveHistory, MoveRecord};
