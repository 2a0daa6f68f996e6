//! Match & visibility rules.
//!
//! These gate moves but never perform them:
//! - Occlusion: is a card covered by a later, active, overlapping card?
//! - Matching: is a card's rank adjacent to the discard top?
//! - Legality: the composed policy for moving a card onto the discard pile
//!
//! Geometry and activity come from the presentation layer through
//! `OverlapTest`; the engine only declares the decision rule.

pub mod legality;
pub mod matching;
pub mod occlusion;

pub use legality::{check_move, game_status, legal_moves, GameStatus};
pub use matching::is_match;
pub use occlusion::{is_occluded, CardBounds, OverlapTest};
