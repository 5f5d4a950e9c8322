use super::store::RatingStore;
use super::types::{RatingChange, RatingDelta};
use crate::config::settings::RatingSettings;
use crate::domain::{Method, RatingValue};

const LOGISTIC_SCALE: f64 = 400.0;

/// Elo update rule with a finish bonus and half-weight draws.
///
/// Both participants are updated from the same pre-contest pair of
/// ratings, and every stored rating is rounded to `precision` decimals at
/// the moment it is written, so later contests compute from the rounded value.
#[derive(Debug, Clone)]
pub struct EloEngine {
    settings: RatingSettings,
}

impl EloEngine {
    pub fn new(settings: RatingSettings) -> Self {
        Self { settings }
    }

    /// Probability that a fighter rated `rating_a` beats one rated `rating_b`
    pub fn expected_score(rating_a: RatingValue, rating_b: RatingValue) -> f64 {
        1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / LOGISTIC_SCALE))
    }

    pub fn k_for(&self, method: Method) -> f64 {
        if method.is_finish() {
            self.settings.k_factor * self.settings.finish_multiplier
        } else {
            self.settings.k_factor
        }
    }

    pub fn apply_win(
        &self,
        store: &mut RatingStore,
        winner: &str,
        loser: &str,
        method: Method,
    ) -> RatingChange {
        let winner_before = store.ensure(winner);
        let loser_before = store.ensure(loser);

        let expected = Self::expected_score(winner_before, loser_before);
        let transfer = self.k_for(method) * (1.0 - expected);

        let winner_after = self.round(winner_before + transfer);
        let loser_after = self.round(loser_before - transfer);

        store.record(winner, winner_after);
        store.record(loser, loser_after);

        RatingChange {
            first: RatingDelta {
                before: winner_before,
                after: winner_after,
            },
            second: RatingDelta {
                before: loser_before,
                after: loser_after,
            },
        }
    }

    pub fn apply_draw(&self, store: &mut RatingStore, fighter_a: &str, fighter_b: &str) -> RatingChange {
        let a_before = store.ensure(fighter_a);
        let b_before = store.ensure(fighter_b);

        let expected_a = Self::expected_score(a_before, b_before);
        let k = self.settings.k_factor * self.settings.draw_weight;

        let a_after = self.round(a_before + k * (0.5 - expected_a));
        let b_after = self.round(b_before + k * (0.5 - (1.0 - expected_a)));

        store.record(fighter_a, a_after);
        store.record(fighter_b, b_after);

        RatingChange {
            first: RatingDelta {
                before: a_before,
                after: a_after,
            },
            second: RatingDelta {
                before: b_before,
                after: b_after,
            },
        }
    }

    /// Registers both fighters but leaves ratings and peaks untouched
    pub fn apply_no_contest(
        &self,
        store: &mut RatingStore,
        fighter_a: &str,
        fighter_b: &str,
    ) -> RatingChange {
        RatingChange {
            first: RatingDelta::unchanged(store.ensure(fighter_a)),
            second: RatingDelta::unchanged(store.ensure(fighter_b)),
        }
    }

    fn round(&self, value: RatingValue) -> RatingValue {
        round_to(value, self.settings.precision)
    }
}

/// Half-way values go to the even neighbour
pub fn round_to(value: RatingValue, precision: u32) -> RatingValue {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round_ties_even() / factor
}
