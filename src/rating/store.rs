use std::collections::HashMap;

use super::types::FighterRating;
use crate::domain::{FighterName, RatingValue};

/// Current and peak rating of every fighter seen in a batch run.
///
/// Fighters are kept in first-appearance order, which the leaderboard
/// relies on to break ties. Names are exact, case-sensitive keys.
#[derive(Debug, Clone)]
pub struct RatingStore {
    default_rating: RatingValue,
    index: HashMap<FighterName, usize>,
    fighters: Vec<FighterRating>,
}

impl RatingStore {
    pub fn new(default_rating: RatingValue) -> Self {
        Self {
            default_rating,
            index: HashMap::new(),
            fighters: Vec::new(),
        }
    }

    /// Current rating of `name`, registering the fighter at the default rating on first sight
    pub fn ensure(&mut self, name: &str) -> RatingValue {
        let idx = self.ensure_index(name);
        self.fighters[idx].current
    }

    fn ensure_index(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }

        let idx = self.fighters.len();
        self.fighters
            .push(FighterRating::new(name, self.default_rating));
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Store a new current rating and raise the peak if it was exceeded
    pub fn record(&mut self, name: &str, rating: RatingValue) {
        let idx = self.ensure_index(name);
        let fighter = &mut self.fighters[idx];
        fighter.current = rating;
        fighter.peak = fighter.peak.max(rating);
    }

    fn get(&self, name: &str) -> Option<&FighterRating> {
        self.index.get(name).map(|&idx| &self.fighters[idx])
    }

    pub fn current(&self, name: &str) -> Option<RatingValue> {
        self.get(name).map(|f| f.current)
    }

    pub fn peak(&self, name: &str) -> Option<RatingValue> {
        self.get(name).map(|f| f.peak)
    }

    /// Fighters in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = &FighterRating> {
        self.fighters.iter()
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_initialization() {
        let mut store = RatingStore::new(1500.0);
        assert_eq!(store.current("A"), None);

        assert_eq!(store.ensure("A"), 1500.0);
        assert_eq!(store.peak("A"), Some(1500.0));
        assert_eq!(store.len(), 1);

        // Second sight keeps the existing entry
        store.record("A", 1520.0);
        assert_eq!(store.ensure("A"), 1520.0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_peak_never_decreases() {
        let mut store = RatingStore::new(1500.0);
        store.record("A", 1530.0);
        store.record("A", 1490.0);

        assert_eq!(store.current("A"), Some(1490.0));
        assert_eq!(store.peak("A"), Some(1530.0));
    }

    #[test]
    fn test_peak_starts_at_default_for_losers() {
        let mut store = RatingStore::new(1500.0);
        store.record("B", 1480.0);

        assert_eq!(store.peak("B"), Some(1500.0));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut store = RatingStore::new(1500.0);
        store.ensure("Jon Jones");
        store.ensure("jon jones");

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_iteration_follows_first_appearance() {
        let mut store = RatingStore::new(1500.0);
        store.ensure("C");
        store.ensure("A");
        store.ensure("B");
        store.ensure("A");

        let names: Vec<&str> = store.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
