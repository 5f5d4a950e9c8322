pub mod elo;
pub mod leaderboard;
pub mod processor;
pub mod store;
pub mod types;

pub use elo::EloEngine;
pub use leaderboard::build_leaderboard;
pub use processor::{BatchOutcome, BatchProcessor};
pub use store::RatingStore;
pub use types::{FighterRating, RatingChange, RatingDelta};
