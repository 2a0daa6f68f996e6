//! Card identity and placement.
//!
//! A `Card` has an immutable identity (`id`, `rank`, `suit`) and a mutable
//! placement (`zone`, `position`, `order`). Only the `Ledger` mutates
//! placement; everything handed out to callers is a snapshot.
//!
//! ## Stacking Order
//!
//! `order` is an explicit stacking attribute: within a zone, a card with a
//! higher order was placed later and sits above cards with lower orders.
//! Orders are unique across the whole session, so comparing two cards in the
//! same zone never ties.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card in a session.
///
/// Assigned sequentially at load time and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Face value of a card, 0 (Ace) through 12 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// Ace.
    pub const ACE: Rank = Rank(0);
    /// King.
    pub const KING: Rank = Rank(12);

    /// Create a rank, returning `None` outside [0, 12].
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::KING.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw face value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Linear distance between two ranks.
    #[must_use]
    pub const fn distance(self, other: Rank) -> u8 {
        self.0.abs_diff(other.0)
    }

    /// Check if two ranks are one apart.
    ///
    /// With `wrap` set, Ace and King are also adjacent. Equal ranks never are.
    ///
    /// ```
    /// use patience_core::core::Rank;
    ///
    /// let five = Rank::new(5).unwrap();
    /// let six = Rank::new(6).unwrap();
    /// assert!(five.is_adjacent(six, false));
    /// assert!(!Rank::ACE.is_adjacent(Rank::KING, false));
    /// assert!(Rank::ACE.is_adjacent(Rank::KING, true));
    /// ```
    #[must_use]
    pub const fn is_adjacent(self, other: Rank, wrap: bool) -> bool {
        let distance = self.distance(other);
        distance == 1 || (wrap && distance == Self::KING.0)
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("face {value} outside 0..=12"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const NAMES: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        f.write_str(NAMES[self.0 as usize])
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// Suit for an index in [0, 3].
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Index of this suit.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Logical area a card is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Initial tableau.
    Main,
    /// Reserve pile.
    Stock,
    /// Played pile. Cards never leave it except through undo.
    Discard,
}

impl Zone {
    /// All zones.
    pub const ALL: [Zone; 3] = [Zone::Main, Zone::Stock, Zone::Discard];
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Main => "main",
            Zone::Stock => "stock",
            Zone::Discard => "discard",
        };
        f.write_str(name)
    }
}

/// Presentation-space coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A card snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique ID for this card.
    pub id: CardId,

    /// Face value.
    pub rank: Rank,

    /// Suit.
    pub suit: Suit,

    /// Current zone.
    pub zone: Zone,

    /// Current presentation position.
    pub position: Position,

    /// Stacking order; higher is placed later.
    pub order: u32,
}

impl Card {
    /// Check if this card sits above `other` in stacking order.
    #[must_use]
    pub fn is_above(&self, other: &Card) -> bool {
        self.order > other.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_bounds() {
        assert_eq!(Rank::new(0), Some(Rank::ACE));
        assert_eq!(Rank::new(12), Some(Rank::KING));
        assert_eq!(Rank::new(13), None);
    }

    #[test]
    fn test_rank_adjacency_is_symmetric() {
        let five = Rank::new(5).unwrap();
        let six = Rank::new(6).unwrap();

        assert!(five.is_adjacent(six, false));
        assert!(six.is_adjacent(five, false));
        assert!(!five.is_adjacent(five, false));
        assert!(!five.is_adjacent(five, true));
    }

    #[test]
    fn test_rank_no_wraparound_by_default() {
        assert!(!Rank::ACE.is_adjacent(Rank::KING, false));
        assert!(!Rank::KING.is_adjacent(Rank::ACE, false));
        assert!(Rank::KING.is_adjacent(Rank::ACE, true));
    }

    #[test]
    fn test_rank_display() {
        assert_eq!(Rank::ACE.to_string(), "A");
        assert_eq!(Rank::new(9).unwrap().to_string(), "10");
        assert_eq!(Rank::KING.to_string(), "K");
    }

    #[test]
    fn test_rank_serde_rejects_out_of_range() {
        let rank: Rank = serde_json::from_str("7").unwrap();
        assert_eq!(rank.value(), 7);
        assert!(serde_json::from_str::<Rank>("13").is_err());
    }

    #[test]
    fn test_suit_from_index() {
        assert_eq!(Suit::from_index(0), Some(Suit::Club));
        assert_eq!(Suit::from_index(3), Some(Suit::Spade));
        assert_eq!(Suit::from_index(4), None);
        assert_eq!(Suit::Heart.index(), 2);
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
    }

    #[test]
    fn test_position_finite() {
        assert!(Position::new(1.0, -2.5).is_finite());
        assert!(!Position::new(f32::NAN, 0.0).is_finite());
        assert!(!Position::new(0.0, f32::INFINITY).is_finite());
    }
}
