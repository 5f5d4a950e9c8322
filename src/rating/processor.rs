use log::{debug, info, warn};

use super::elo::EloEngine;
use super::store::RatingStore;
use crate::config::settings::RatingSettings;
use crate::domain::{
    BatchProgress, ContestRecord, FlaggedContest, Outcome, RatingSnapshot, is_distinct_pairing,
};
use crate::errors::RatingError;

const INVALID_PAIRING: &str = "Invalid pairing";

/// Result of one full chronological pass
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub snapshots: Vec<RatingSnapshot>,
    pub flagged: Vec<FlaggedContest>,
    pub store: RatingStore,
    rated: usize,
}

impl BatchOutcome {
    /// Contests whose outcome was applied, flagged ones excluded
    pub fn contests_rated(&self) -> usize {
        self.rated
    }
}

/// Drives the rating engine over an ordered contest sequence.
///
/// A processor owns its store for exactly one run; `run` consumes it.
pub struct BatchProcessor {
    engine: EloEngine,
    store: RatingStore,
    snapshots: Vec<RatingSnapshot>,
    flagged: Vec<FlaggedContest>,
    rated: usize,
}

impl BatchProcessor {
    pub fn new(settings: &RatingSettings) -> Self {
        Self {
            engine: EloEngine::new(settings.clone()),
            store: RatingStore::new(settings.default_rating),
            snapshots: Vec::new(),
            flagged: Vec::new(),
            rated: 0,
        }
    }

    pub fn run(mut self, contests: &[ContestRecord]) -> Result<BatchOutcome, RatingError> {
        ensure_chronological(contests)?;
        info!("Rating {} contests in chronological order", contests.len());

        self.snapshots.reserve(contests.len() * 2);
        let mut progress = BatchProgress::new(contests.len());

        for contest in contests {
            if self.process_contest(contest) {
                self.rated += 1;
                progress.increment_processed();
            } else {
                progress.increment_flagged();
            }
        }

        info!(
            "  → {} fighters rated across {} contests",
            self.store.len(),
            progress.processed()
        );

        Ok(BatchOutcome {
            snapshots: self.snapshots,
            flagged: self.flagged,
            store: self.store,
            rated: self.rated,
        })
    }

    /// Returns false when the contest was flagged instead of rated
    fn process_contest(&mut self, contest: &ContestRecord) -> bool {
        let a = contest.fighter_a.as_str();
        let b = contest.fighter_b.as_str();

        if !is_distinct_pairing(a, b) {
            warn!(
                "Contest #{} ({}) does not name two distinct fighters ('{}' vs '{}'); not rated",
                contest.sequence, contest.event, a, b
            );
            self.flag(contest, INVALID_PAIRING);
            return false;
        }

        let before_a = self.store.ensure(a);
        let before_b = self.store.ensure(b);

        let recognized = self.dispatch(contest);

        let after_a = self.store.ensure(a);
        let after_b = self.store.ensure(b);

        debug!(
            "{} | {} {:.2} -> {:.2} vs {} {:.2} -> {:.2} ({})",
            contest.event,
            a,
            before_a,
            after_a,
            b,
            before_b,
            after_b,
            contest.outcome.label()
        );

        self.snapshots.push(snapshot(contest, a, b, &contest.outcome, before_a, after_a));
        self.snapshots.push(snapshot(
            contest,
            b,
            a,
            &contest.outcome.mirrored(),
            before_b,
            after_b,
        ));

        recognized
    }

    fn dispatch(&mut self, contest: &ContestRecord) -> bool {
        let a = contest.fighter_a.as_str();
        let b = contest.fighter_b.as_str();

        match &contest.outcome {
            Outcome::NoContest => {
                self.engine.apply_no_contest(&mut self.store, a, b);
            }
            Outcome::Draw => {
                self.engine.apply_draw(&mut self.store, a, b);
            }
            Outcome::Win => {
                self.engine.apply_win(&mut self.store, a, b, contest.method);
            }
            Outcome::Loss => {
                self.engine.apply_win(&mut self.store, b, a, contest.method);
            }
            Outcome::Unknown(label) => {
                warn!(
                    "Unrecognized result '{}' for contest #{} ({} vs {}, {}); ratings left unchanged",
                    label, contest.sequence, a, b, contest.event
                );
                self.engine.apply_no_contest(&mut self.store, a, b);
                self.flag(contest, label);
                return false;
            }
        }

        true
    }

    fn flag(&mut self, contest: &ContestRecord, label: &str) {
        self.flagged.push(FlaggedContest {
            sequence: contest.sequence,
            event: contest.event.clone(),
            fighters: (contest.fighter_a.clone(), contest.fighter_b.clone()),
            label: label.to_string(),
        });
    }
}

fn ensure_chronological(contests: &[ContestRecord]) -> Result<(), RatingError> {
    match contests
        .windows(2)
        .position(|pair| pair[0].chronological_key() > pair[1].chronological_key())
    {
        Some(idx) => Err(RatingError::OutOfOrder { position: idx + 1 }),
        None => Ok(()),
    }
}

fn snapshot(
    contest: &ContestRecord,
    fighter: &str,
    opponent: &str,
    outcome: &Outcome,
    before: f64,
    after: f64,
) -> RatingSnapshot {
    RatingSnapshot {
        event: contest.event.clone(),
        event_date: contest.date,
        fighter: fighter.to_string(),
        opponent: opponent.to_string(),
        result: outcome.label().to_string(),
        rating_before: before,
        rating_after: after,
    }
}
