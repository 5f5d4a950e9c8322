use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    fighters::{get_fighters, get_rating_history},
    leaderboard::get_leaderboard,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/fighters", get(get_fighters))
        .route("/api/rating_history/:id", get(get_rating_history))
        .route("/api/leaderboard", get(get_leaderboard))
        .with_state(state)
}
