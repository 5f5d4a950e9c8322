use std::path::PathBuf;

use crate::errors::RatingError;

#[derive(Debug, Clone, PartialEq)]
pub struct RatingSettings {
    pub default_rating: f64,
    pub k_factor: f64,
    pub finish_multiplier: f64,
    /// Fraction of the K-factor applied to draws
    pub draw_weight: f64,
    /// Decimal places kept on every stored rating
    pub precision: u32,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            default_rating: 1500.0,
            k_factor: 40.0,
            finish_multiplier: 1.25,
            draw_weight: 0.5,
            precision: 2,
        }
    }
}

impl RatingSettings {
    pub fn validate(&self) -> Result<(), RatingError> {
        if !self.default_rating.is_finite() {
            return Err(invalid("default rating must be a finite number"));
        }
        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(invalid("K-factor must be positive"));
        }
        if !self.finish_multiplier.is_finite() || self.finish_multiplier < 1.0 {
            return Err(invalid("finish multiplier must be at least 1.0"));
        }
        if !(0.0..=1.0).contains(&self.draw_weight) {
            return Err(invalid("draw weight must be within 0.0..=1.0"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> RatingError {
    RatingError::InvalidSettings(message.to_string())
}

#[derive(Debug, Clone)]
pub struct IngestSettings {
    pub input_path: PathBuf,
    /// Source lists contests newest-first and must be reversed before sequencing
    pub newest_first: bool,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("fights.csv"),
            newest_first: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub database_path: String,
    pub snapshots_path: PathBuf,
    pub leaderboard_path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "fight_ratings.db".to_string()),
            snapshots_path: PathBuf::from("fights_with_ratings.csv"),
            leaderboard_path: PathBuf::from("fighter_rankings.csv"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub rating: RatingSettings,
    pub ingest: IngestSettings,
    pub storage: StorageSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
