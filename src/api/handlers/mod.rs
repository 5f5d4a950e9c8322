use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use serde::Deserialize;

pub mod fighters;
pub mod leaderboard;

pub struct AppState {
    pub pool: Pool<SqliteConnectionManager>,
}

#[derive(Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<usize>,
}
