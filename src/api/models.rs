use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterItem {
    pub id: i64,
    pub name: String,
}

/// Chart-ready rating series: one label per data point
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingHistoryResponse {
    pub fighter_name: String,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardItem {
    pub rank: i64,
    pub fighter_id: i64,
    pub name: String,
    pub final_rating: f64,
    pub peak_rating: f64,
}
