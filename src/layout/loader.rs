//! Layout document and validation.
//!
//! The layout is the only external data the engine consumes:
//!
//! ```json
//! {
//!   "mainZoneEntries":  [{ "face": 3, "suit": 0, "position": { "x": 0, "y": 0 } }],
//!   "stackZoneEntries": [{ "face": 7, "suit": 1, "position": { "x": 0, "y": -400 } }]
//! }
//! ```
//!
//! Faces and suits stay raw integers here so that validation can report the
//! exact list and index of a bad entry.

use serde::{Deserialize, Serialize};

use crate::core::card::{Position, Rank, Suit};
use crate::core::error::{LayoutList, LoadError};

/// One card in the initial layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub face: u8,
    pub suit: u8,
    pub position: Position,
}

impl LayoutEntry {
    /// Create a layout entry.
    #[must_use]
    pub fn new(face: u8, suit: u8, position: Position) -> Self {
        Self { face, suit, position }
    }

    /// Validate and convert to typed rank and suit.
    fn resolve(&self, list: LayoutList, index: usize) -> Result<(Rank, Suit), LoadError> {
        let rank = Rank::new(self.face).ok_or(LoadError::FaceOutOfRange {
            list,
            index,
            face: self.face,
        })?;
        let suit = Suit::from_index(self.suit).ok_or(LoadError::SuitOutOfRange {
            list,
            index,
            suit: self.suit,
        })?;
        if !self.position.is_finite() {
            return Err(LoadError::NonFinitePosition { list, index });
        }
        Ok((rank, suit))
    }
}

/// A validated layout entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedEntry {
    pub rank: Rank,
    pub suit: Suit,
    pub position: Position,
}

/// Initial layout: the main tableau and the stack, both in input order.
///
/// The last stack entry starts on the discard pile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub main_zone_entries: Vec<LayoutEntry>,
    pub stack_zone_entries: Vec<LayoutEntry>,
}

impl Layout {
    /// Create a layout from entry lists.
    #[must_use]
    pub fn new(main_zone_entries: Vec<LayoutEntry>, stack_zone_entries: Vec<LayoutEntry>) -> Self {
        Self {
            main_zone_entries,
            stack_zone_entries,
        }
    }

    /// Parse a layout document. Both lists are required.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Total number of cards the layout describes.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.main_zone_entries.len() + self.stack_zone_entries.len()
    }

    /// Check every entry, reporting the first problem found.
    pub fn validate(&self) -> Result<(), LoadError> {
        self.resolve().map(|_| ())
    }

    /// Validate and return typed entries for the main list and stack list.
    pub fn resolve(&self) -> Result<(Vec<ResolvedEntry>, Vec<ResolvedEntry>), LoadError> {
        if self.stack_zone_entries.is_empty() {
            return Err(LoadError::EmptyStack);
        }
        let main = resolve_list(&self.main_zone_entries, LayoutList::Main)?;
        let stack = resolve_list(&self.stack_zone_entries, LayoutList::Stack)?;
        Ok((main, stack))
    }
}

fn resolve_list(
    entries: &[LayoutEntry],
    list: LayoutList,
) -> Result<Vec<ResolvedEntry>, LoadError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let (rank, suit) = entry.resolve(list, index)?;
            Ok(ResolvedEntry {
                rank,
                suit,
                position: entry.position,
            })
        })
        .collect()
}
