pub mod chronology;
pub mod models;
mod progress;

pub use chronology::{PreparedContests, is_distinct_pairing, parse_event_date, prepare_contests};
pub use models::*;
pub use progress::BatchProgress;
