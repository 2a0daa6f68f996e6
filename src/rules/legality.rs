//! Move legality: the composed policy callers check before moving a card.
//!
//! A card may go to the discard pile when:
//! 1. It is not occluded.
//! 2. It is not already on the discard pile.
//! 3. It comes from Stock (always allowed), or
//! 4. It comes from Main and matches the discard top.

use tracing::warn;

use super::matching::is_match;
use super::occlusion::{is_occluded, OverlapTest};
use crate::core::card::{Card, CardId, Zone};
use crate::core::config::SessionConfig;
use crate::core::error::MoveRejection;
use crate::ledger::Ledger;

/// Overall state of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Main still has cards and at least one move is legal.
    InProgress,
    /// Main is empty.
    Cleared,
    /// Main still has cards but no move is legal.
    Stuck,
}

/// Check whether `id` may move into `target`.
pub fn check_move<T: OverlapTest + ?Sized>(
    ledger: &Ledger,
    id: CardId,
    target: Zone,
    test: &T,
    config: &SessionConfig,
) -> Result<(), MoveRejection> {
    let card = ledger.query_by_id(id).ok_or(MoveRejection::NotFound(id))?;

    if is_occluded(&card, &ledger.zone_stack(card.zone), test) {
        return Err(MoveRejection::Occluded(id));
    }

    match (card.zone, target) {
        (Zone::Discard, _) => Err(MoveRejection::AlreadyDiscarded(id)),
        (Zone::Stock, Zone::Discard) => Ok(()),
        (Zone::Main, Zone::Discard) => check_match(ledger, &card, config),
        (from, to) => Err(violation(id, from, to, "cards only move onto the discard pile")),
    }
}

fn check_match(ledger: &Ledger, card: &Card, config: &SessionConfig) -> Result<(), MoveRejection> {
    let Some(top) = ledger.discard_top() else {
        return Err(violation(card.id, card.zone, Zone::Discard, "discard pile is empty"));
    };

    if is_match(ledger, card.id, config) {
        Ok(())
    } else {
        Err(MoveRejection::NoMatch {
            card: card.id,
            rank: card.rank,
            top: top.rank,
        })
    }
}

fn violation(card: CardId, from: Zone, to: Zone, detail: &'static str) -> MoveRejection {
    warn!(%card, %from, %to, detail, "move rejected on invariant violation");
    MoveRejection::InvariantViolation { card, from, to, detail }
}

/// Every card that may currently move onto the discard pile, by id.
#[must_use]
pub fn legal_moves<T: OverlapTest + ?Sized>(
    ledger: &Ledger,
    test: &T,
    config: &SessionConfig,
) -> Vec<CardId> {
    let mut moves = [Zone::Main, Zone::Stock]
        .into_iter()
        .flat_map(|zone| ledger.query_by_zone(zone))
        .filter(|card| check_move(ledger, card.id, Zone::Discard, test, config).is_ok())
        .map(|card| card.id)
        .collect::<Vec<_>>();
    moves.sort_unstable();
    moves
}

/// Classify the game as cleared, stuck, or still in progress.
#[must_use]
pub fn game_status<T: OverlapTest + ?Sized>(
    ledger: &Ledger,
    test: &T,
    config: &SessionConfig,
) -> GameStatus {
    if ledger.zone_size(Zone::Main) == 0 {
        GameStatus::Cleared
    } else if legal_moves(ledger, test, config).is_empty() {
        GameStatus::Stuck
    } else {
        GameStatus::InProgress
    }
}
