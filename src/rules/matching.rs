//! Rank matching against the discard top.

use crate::core::card::CardId;
use crate::core::config::SessionConfig;
use crate::ledger::Ledger;

/// Check if a card's rank is adjacent to the discard top's rank.
///
/// False if the card does not exist or the discard pile is empty. Ranks are
/// compared linearly unless `config.wrap_ranks` is set.
#[must_use]
pub fn is_match(ledger: &Ledger, id: CardId, config: &SessionConfig) -> bool {
    let (Some(card), Some(top)) = (ledger.query_by_id(id), ledger.discard_top()) else {
        return false;
    };
    card.rank.is_adjacent(top.rank, config.wrap_ranks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Position, Zone};
    use crate::history::MoveHistory;
    use crate::layout::{Layout, LayoutEntry};

    fn ledger(main: &[u8], stack: &[u8]) -> Ledger {
        let entries = |faces: &[u8]| -> Vec<LayoutEntry> {
            faces
                .iter()
                .map(|&f| LayoutEntry::new(f, 0, Position::default()))
                .collect()
        };
        Ledger::load(&Layout::new(entries(main), entries(stack))).unwrap()
    }

    #[test]
    fn test_adjacent_ranks_match_both_ways() {
        let config = SessionConfig::default();

        assert!(is_match(&ledger(&[5], &[6]), CardId(0), &config));
        assert!(is_match(&ledger(&[6], &[5]), CardId(0), &config));
    }

    #[test]
    fn test_no_wraparound() {
        let config = SessionConfig::default();

        assert!(!is_match(&ledger(&[0], &[12]), CardId(0), &config));
        assert!(!is_match(&ledger(&[12], &[0]), CardId(0), &config));
        assert!(is_match(&ledger(&[12], &[0]), CardId(0), &config.with_wrap_ranks()));
    }

    #[test]
    fn test_same_rank_never_matches() {
        let config = SessionConfig::default().with_wrap_ranks();
        assert!(!is_match(&ledger(&[4], &[4]), CardId(0), &config));
    }

    #[test]
    fn test_unknown_card() {
        assert!(!is_match(&ledger(&[5], &[6]), CardId(42), &SessionConfig::default()));
    }

    #[test]
    fn test_empty_discard() {
        let mut ledger = ledger(&[5], &[6]);
        let mut history = MoveHistory::new();
        ledger
            .move_card(&mut history, CardId(1), Zone::Stock, Position::default())
            .unwrap();

        assert!(!is_match(&ledger, CardId(0), &SessionConfig::default()));
    }

    #[test]
    fn test_matches_most_recent_discard() {
        let mut ledger = ledger(&[3, 9], &[8, 4]);
        let mut history = MoveHistory::new();
        let config = SessionConfig::default();

        assert!(is_match(&ledger, CardId(0), &config));
        assert!(!is_match(&ledger, CardId(1), &config));

        ledger
            .move_card(&mut history, CardId(2), Zone::Discard, Position::default())
            .unwrap();

        assert!(!is_match(&ledger, CardId(0), &config));
        assert!(is_match(&ledger, CardId(1), &config));
    }
}
