//! Move history integration tests.
//!
//! Property tests cover the move/undo inverse law and move atomicity over
//! arbitrary move sequences.

use proptest::prelude::*;

use patience_core::core::{Card, CardId, Position, Zone};
use patience_core::history::MoveHistory;
use patience_core::layout::{Layout, LayoutEntry};
use patience_core::ledger::Ledger;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("patience_core=debug")
        .with_test_writer()
        .try_init();
}

fn deal(main: usize, stack: usize) -> Ledger {
    let entry = |i: usize| {
        LayoutEntry::new((i % 13) as u8, (i % 4) as u8, Position::new(i as f32 * 30.0, 0.0))
    };
    let layout = Layout::new(
        (0..main).map(entry).collect(),
        (main..main + stack).map(entry).collect(),
    );
    Ledger::load(&layout).unwrap()
}

fn snapshot(ledger: &Ledger) -> Vec<Card> {
    let mut cards: Vec<Card> = Zone::ALL
        .iter()
        .flat_map(|&zone| ledger.query_by_zone(zone))
        .collect();
    cards.sort_by_key(|c| c.id);
    cards
}

fn zone_strategy() -> impl Strategy<Value = Zone> {
    prop_oneof![Just(Zone::Main), Just(Zone::Stock), Just(Zone::Discard)]
}

fn move_strategy() -> impl Strategy<Value = (u32, Zone, f32, f32)> {
    (0u32..20, zone_strategy(), -500.0f32..500.0, -500.0f32..500.0)
}

// =============================================================================
// Unit Scenarios
// =============================================================================

/// Test that undo on an empty history changes nothing, repeatedly.
#[test]
fn test_undo_empty_is_idempotent() {
    init_tracing();
    let mut ledger = deal(4, 3);
    let mut history = MoveHistory::new();
    let before = snapshot(&ledger);

    for _ in 0..5 {
        assert!(history.pop_and_restore(&mut ledger).is_none());
        assert_eq!(snapshot(&ledger), before);
    }
}

/// Test that moving the same card twice unwinds in two steps.
#[test]
fn test_repeated_moves_of_one_card() {
    init_tracing();
    let mut ledger = deal(2, 2);
    let mut history = MoveHistory::new();
    let original = ledger.query_by_id(CardId(0)).unwrap();

    ledger.move_card(&mut history, CardId(0), Zone::Stock, Position::new(1.0, 1.0)).unwrap();
    ledger.move_card(&mut history, CardId(0), Zone::Discard, Position::new(2.0, 2.0)).unwrap();

    history.pop_and_restore(&mut ledger);
    let middle = ledger.query_by_id(CardId(0)).unwrap();
    assert_eq!(middle.zone, Zone::Stock);
    assert_eq!(middle.position, Position::new(1.0, 1.0));

    history.pop_and_restore(&mut ledger);
    assert_eq!(ledger.query_by_id(CardId(0)).unwrap(), original);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Any sequence of moves followed by as many undos restores every card.
    #[test]
    fn prop_move_undo_inverse(moves in prop::collection::vec(move_strategy(), 0..40)) {
        let mut ledger = deal(8, 6);
        let mut history = MoveHistory::new();
        let before = snapshot(&ledger);

        let mut made = 0;
        for (id, zone, x, y) in moves {
            if ledger.move_card(&mut history, CardId(id), zone, Position::new(x, y)).is_ok() {
                made += 1;
            }
        }
        prop_assert_eq!(history.len(), made);

        for _ in 0..made {
            prop_assert!(history.pop_and_restore(&mut ledger).is_some());
        }

        prop_assert!(history.is_empty());
        prop_assert_eq!(snapshot(&ledger), before);
    }

    /// Moving an unknown id changes neither the ledger nor the history.
    #[test]
    fn prop_unknown_move_is_atomic(
        prefix in prop::collection::vec(move_strategy(), 0..10),
        missing in 14u32..1000,
        zone in zone_strategy(),
    ) {
        let mut ledger = deal(8, 6);
        let mut history = MoveHistory::new();
        for (id, zone, x, y) in prefix {
            let _ = ledger.move_card(&mut history, CardId(id), zone, Position::new(x, y));
        }

        let cards = snapshot(&ledger);
        let depth = history.len();

        let result = ledger.move_card(&mut history, CardId(missing), zone, Position::default());
        prop_assert!(result.is_err());
        prop_assert_eq!(snapshot(&ledger), cards);
        prop_assert_eq!(history.len(), depth);
    }

    /// The discard top is always the most recent card moved onto the pile.
    #[test]
    fn prop_discard_top_is_latest(ids in prop::collection::vec(0u32..13, 1..20)) {
        let mut ledger = deal(8, 5);
        let mut history = MoveHistory::new();

        for id in ids {
            ledger.move_card(&mut history, CardId(id), Zone::Discard, Position::default()).unwrap();
            prop_assert_eq!(ledger.discard_top().map(|c| c.id), Some(CardId(id)));
        }
    }
}
