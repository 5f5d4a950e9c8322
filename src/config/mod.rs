pub mod settings;

pub use settings::{AppConfig, IngestSettings, RatingSettings, StorageSettings};
