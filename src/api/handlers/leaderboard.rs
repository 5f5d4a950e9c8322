use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, LeaderboardParams};
use crate::api::models::LeaderboardItem;
use crate::database;

const DEFAULT_LIMIT: usize = 100;
const MAX_LIMIT: usize = 1000;

pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let rows = match database::leaderboard::list_top(&conn, limit) {
        Ok(rows) => rows,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    let items: Vec<LeaderboardItem> = rows
        .into_iter()
        .map(|row| LeaderboardItem {
            rank: row.rank,
            fighter_id: row.fighter_id,
            name: row.name,
            final_rating: row.final_rating,
            peak_rating: row.peak_rating,
        })
        .collect();

    Json(items).into_response()
}
