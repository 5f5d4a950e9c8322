use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Fighter {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub id: i64,
    pub fighter_id: i64,
    pub event_date: NaiveDate,
    pub event_name: String,
    pub opponent_name: String,
    pub result: String,
    pub rating_before: f64,
    pub rating_after: f64,
}

/// Leaderboard row joined with the fighter's name
#[derive(Debug, Clone, PartialEq)]
pub struct RankedFighter {
    pub fighter_id: i64,
    pub name: String,
    pub rank: i64,
    pub final_rating: f64,
    pub peak_rating: f64,
}
