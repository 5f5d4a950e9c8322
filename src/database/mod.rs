pub mod connection;
pub mod fighters;
pub mod history;
pub mod leaderboard;
pub mod models;
pub mod setup;

pub use connection::{DbConn, DbPool, create_pool, get_connection};
pub use models::*;
