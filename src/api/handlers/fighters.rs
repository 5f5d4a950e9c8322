use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::{FighterItem, RatingHistoryResponse};
use crate::database;

pub async fn get_fighters(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let fighters = match database::fighters::list_all(&conn) {
        Ok(fighters) => fighters,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    let items: Vec<FighterItem> = fighters
        .into_iter()
        .map(|f| FighterItem { id: f.id, name: f.name })
        .collect();

    Json(items).into_response()
}

pub async fn get_rating_history(
    State(state): State<Arc<AppState>>,
    Path(fighter_id): Path<i64>,
) -> impl IntoResponse {
    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let fighter = match database::fighters::find_by_id(&conn, fighter_id) {
        Ok(Some(fighter)) => fighter,
        Ok(None) => return (StatusCode::NOT_FOUND, "Fighter not found").into_response(),
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    let rows = match database::history::list_by_fighter(&conn, fighter.id) {
        Ok(rows) => rows,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    let (labels, data): (Vec<String>, Vec<f64>) = rows
        .into_iter()
        .map(|row| (row.event_date.format("%Y-%m-%d").to_string(), row.rating_after))
        .unzip();

    Json(RatingHistoryResponse {
        fighter_name: fighter.name,
        labels,
        data,
    })
    .into_response()
}
