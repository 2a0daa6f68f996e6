//! Occlusion: whether a card is covered by a later card in its zone.
//!
//! The engine owns the decision rule; geometry belongs to the presentation
//! layer. A card is occluded iff some other card in the same zone that
//! - sits above it in stacking order,
//! - is active, and
//! - overlaps it
//!
//! exists. `OverlapTest` is how the presentation layer supplies the last two.

use crate::core::card::{Card, Position};

/// Presentation-supplied overlap and activity checks.
///
/// Any `Fn(&Card, &Card) -> bool` closure works as an overlap test with
/// every card active.
pub trait OverlapTest {
    /// Does `upper` visually cover any part of `lower`?
    fn overlaps(&self, lower: &Card, upper: &Card) -> bool;

    /// Is the card currently shown? Inactive cards never occlude.
    fn is_active(&self, _card: &Card) -> bool {
        true
    }
}

impl<F> OverlapTest for F
where
    F: Fn(&Card, &Card) -> bool,
{
    fn overlaps(&self, lower: &Card, upper: &Card) -> bool {
        self(lower, upper)
    }
}

/// Axis-aligned card box centered on each card's position.
///
/// Boxes that only touch at an edge do not overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardBounds {
    pub width: f32,
    pub height: f32,
}

impl CardBounds {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if boxes centered at `a` and `b` overlap.
    #[must_use]
    pub fn intersects(&self, a: Position, b: Position) -> bool {
        (a.x - b.x).abs() < self.width && (a.y - b.y).abs() < self.height
    }
}

impl OverlapTest for CardBounds {
    fn overlaps(&self, lower: &Card, upper: &Card) -> bool {
        self.intersects(lower.position, upper.position)
    }
}

/// Decide whether `card` is occluded within `zone_stack`.
///
/// `zone_stack` holds the cards of `card`'s zone; only entries with a higher
/// stacking order than `card` are considered, so the slice need not be
/// sorted and may include `card` itself.
pub fn is_occluded<T: OverlapTest + ?Sized>(card: &Card, zone_stack: &[Card], test: &T) -> bool {
    zone_stack.iter().any(|other| {
        other.id != card.id
            && other.zone == card.zone
            && other.is_above(card)
            && test.is_active(other)
            && test.overlaps(card, other)
    })
}
