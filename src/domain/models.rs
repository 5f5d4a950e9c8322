use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type FighterName = String;
pub type RatingValue = f64;

/// One row of the contest log as supplied by the ingestion collaborator
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawContest {
    #[serde(default)]
    pub event: String,
    #[serde(alias = "date", default)]
    pub event_date: String,
    pub fighter_1: String,
    pub fighter_2: String,
    /// Result text phrased relative to `fighter_1`
    #[serde(alias = "winner", default)]
    pub result: String,
    #[serde(default)]
    pub method: String,
}

/// Outcome of a contest as experienced by one fighter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
    NoContest,
    /// Unrecognized result text, kept as a capitalized literal
    Unknown(String),
}

impl Outcome {
    /// The same outcome seen from the opponent's corner
    pub fn mirrored(&self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            other => other.clone(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Outcome::Win => "Win",
            Outcome::Loss => "Loss",
            Outcome::Draw => "Draw",
            Outcome::NoContest => "NC",
            Outcome::Unknown(literal) => literal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// Knockout, technical knockout or submission
    Finish,
    /// Decision or any other ending
    Decision,
}

impl Method {
    pub fn is_finish(self) -> bool {
        matches!(self, Method::Finish)
    }
}

/// Normalized contest, ready for the rating engine
#[derive(Debug, Clone, PartialEq)]
pub struct ContestRecord {
    /// Position in the input stream, breaks same-date ties
    pub sequence: usize,
    pub event: String,
    pub date: NaiveDate,
    pub fighter_a: FighterName,
    pub fighter_b: FighterName,
    /// Result relative to `fighter_a`
    pub outcome: Outcome,
    pub method: Method,
}

impl ContestRecord {
    pub fn chronological_key(&self) -> (NaiveDate, usize) {
        (self.date, self.sequence)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSnapshot {
    pub event: String,
    pub event_date: NaiveDate,
    pub fighter: FighterName,
    pub opponent: FighterName,
    pub result: String,
    pub rating_before: RatingValue,
    pub rating_after: RatingValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub fighter: FighterName,
    pub final_rating: RatingValue,
    pub peak_rating: RatingValue,
}

/// Contest excluded before rating: undatable, or not two distinct named fighters
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedContest {
    pub sequence: usize,
    pub event: String,
    pub fighters: (FighterName, FighterName),
    pub raw_date: String,
}

/// Contest rated as a no-op because its result text was not recognized
#[derive(Debug, Clone, PartialEq)]
pub struct FlaggedContest {
    pub sequence: usize,
    pub event: String,
    pub fighters: (FighterName, FighterName),
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataQualityReport {
    pub total_records: usize,
    pub rated_contests: usize,
    pub malformed_rows: usize,
    pub unparseable_dates: Vec<SkippedContest>,
    /// Rows naming the same fighter twice or leaving a corner empty
    pub invalid_pairings: Vec<SkippedContest>,
    pub ambiguous_outcomes: Vec<FlaggedContest>,
}

impl DataQualityReport {
    pub fn skipped_count(&self) -> usize {
        self.malformed_rows + self.unparseable_dates.len() + self.invalid_pairings.len()
    }

    pub fn flagged_count(&self) -> usize {
        self.ambiguous_outcomes.len()
    }

    pub fn is_complete(&self) -> bool {
        self.skipped_count() == 0 && self.flagged_count() == 0
    }
}
