use super::store::RatingStore;
use crate::domain::LeaderboardEntry;

/// Every fighter in the store, best current rating first.
/// Equal ratings keep first-appearance order.
pub fn build_leaderboard(store: &RatingStore) -> Vec<LeaderboardEntry> {
    let mut fighters: Vec<_> = store.iter().collect();
    fighters.sort_by(|a, b| b.current.total_cmp(&a.current));

    fighters
        .into_iter()
        .enumerate()
        .map(|(idx, fighter)| LeaderboardEntry {
            rank: idx + 1,
            fighter: fighter.name.clone(),
            final_rating: fighter.current,
            peak_rating: fighter.peak,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_descending_by_current() {
        let mut store = RatingStore::new(1500.0);
        store.record("Low", 1400.0);
        store.record("High", 1600.0);
        store.record("Mid", 1500.0);

        let board = build_leaderboard(&store);
        let names: Vec<&str> = board.iter().map(|e| e.fighter.as_str()).collect();

        assert_eq!(names, vec!["High", "Mid", "Low"]);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[2].rank, 3);
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let mut store = RatingStore::new(1500.0);
        store.ensure("First");
        store.ensure("Second");
        store.record("Leader", 1550.0);
        store.ensure("Third");

        let board = build_leaderboard(&store);
        let names: Vec<&str> = board.iter().map(|e| e.fighter.as_str()).collect();

        assert_eq!(names, vec!["Leader", "First", "Second", "Third"]);
    }

    #[test]
    fn test_reports_peak_alongside_final() {
        let mut store = RatingStore::new(1500.0);
        store.record("A", 1580.0);
        store.record("A", 1510.0);

        let board = build_leaderboard(&store);

        assert_eq!(board[0].final_rating, 1510.0);
        assert_eq!(board[0].peak_rating, 1580.0);
    }

    #[test]
    fn test_empty_store() {
        assert!(build_leaderboard(&RatingStore::new(1500.0)).is_empty());
    }
}
