use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use rusqlite::Connection;

use crate::config::settings::AppConfig;
use crate::database::{self, history::NewHistoryRow};
use crate::domain::{self, DataQualityReport, LeaderboardEntry, RatingSnapshot};
use crate::normalizer::ContestNormalizer;
use crate::rating::{BatchOutcome, BatchProcessor, build_leaderboard};
use crate::services::{export, ingestion, report};

/// Output of one rating run, before anything is written out
#[derive(Debug, Clone)]
pub struct RatedRun {
    pub outcome: BatchOutcome,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub report: DataQualityReport,
}

pub struct ProcessingService {
    config: AppConfig,
    normalizer: ContestNormalizer,
}

impl ProcessingService {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.rating.validate()?;

        Ok(Self {
            config,
            normalizer: ContestNormalizer::new()?,
        })
    }

    pub fn run(&self) -> Result<RatedRun> {
        info!("=== Starting Rating Run ===\n");

        let log = ingestion::load_contest_log(&self.config.ingest.input_path)?;
        let run = self.rate(log)?;

        self.export(&run)?;
        self.rebuild_database(&run)?;

        report::print_leaderboard_preview(&run.leaderboard);
        report::print_quality_summary(&run.report);

        info!("=== Rating Run Complete ===");
        Ok(run)
    }

    pub fn rate(&self, log: ingestion::ContestLog) -> Result<RatedRun> {
        let prepared =
            domain::prepare_contests(log.rows, &self.normalizer, self.config.ingest.newest_first);
        info!(
            "  → {} contests dated and ordered ({} excluded)\n",
            prepared.contests.len(),
            prepared.report.unparseable_dates.len() + prepared.report.invalid_pairings.len()
        );

        let outcome = BatchProcessor::new(&self.config.rating).run(&prepared.contests)?;
        let leaderboard = build_leaderboard(&outcome.store);

        let mut report = prepared.report;
        report.malformed_rows = log.malformed_rows;
        report.total_records += log.malformed_rows;
        report.rated_contests = outcome.contests_rated();
        report.ambiguous_outcomes = outcome.flagged.clone();

        Ok(RatedRun {
            outcome,
            leaderboard,
            report,
        })
    }

    fn export(&self, run: &RatedRun) -> Result<()> {
        export::export_snapshots(&self.config.storage.snapshots_path, &run.outcome.snapshots)?;
        export::export_leaderboard(&self.config.storage.leaderboard_path, &run.leaderboard)?;
        Ok(())
    }

    fn rebuild_database(&self, run: &RatedRun) -> Result<()> {
        let db_path = &self.config.storage.database_path;
        let temp_db_path = format!("{}.tmp", db_path);

        info!("Target DB: {}, Temp DB: {}", db_path, temp_db_path);

        if Path::new(&temp_db_path).exists() {
            std::fs::remove_file(&temp_db_path)?;
        }

        self.process_to_db(&temp_db_path, run)?;

        std::fs::rename(&temp_db_path, db_path)
            .with_context(|| format!("Failed to move {} into place", temp_db_path))?;
        info!("Successfully swapped database to {}", db_path);
        Ok(())
    }

    fn process_to_db(&self, db_path: &str, run: &RatedRun) -> Result<()> {
        let pool = database::create_pool(db_path)?;
        let mut conn = database::get_connection(&pool)?;

        database::setup::reset_database(&conn)?;
        info!("  → Database schema reset");

        let tx = conn.transaction().context("Failed to open transaction")?;
        write_ratings(
            &tx,
            &run.outcome.snapshots,
            &run.leaderboard,
            self.config.rating.default_rating,
        )?;
        tx.commit().context("Failed to commit rating tables")?;

        info!(
            "  → Stored {} fighters and {} history rows\n",
            run.leaderboard.len(),
            run.outcome.snapshots.len()
        );
        Ok(())
    }
}

/// Fill the fighter, rating history and leaderboard tables of a fresh schema
pub fn write_ratings(
    conn: &Connection,
    snapshots: &[RatingSnapshot],
    leaderboard: &[LeaderboardEntry],
    default_rating: f64,
) -> Result<()> {
    let mut ids: HashMap<&str, i64> = HashMap::new();
    let mut debuts: Vec<(&str, NaiveDate)> = Vec::new();

    for snapshot in snapshots {
        let name = snapshot.fighter.as_str();
        if !ids.contains_key(name) {
            let fighter = database::fighters::get_or_create_fighter(conn, name)?;
            ids.insert(name, fighter.id);
            debuts.push((name, snapshot.event_date));
        }
    }

    for (name, first_contest) in &debuts {
        database::history::insert_initial_rating(conn, ids[name], *first_contest, default_rating)?;
    }

    for snapshot in snapshots {
        database::history::insert_history_row(
            conn,
            &NewHistoryRow {
                fighter_id: ids[snapshot.fighter.as_str()],
                event_date: snapshot.event_date,
                event_name: &snapshot.event,
                opponent_name: &snapshot.opponent,
                result: &snapshot.result,
                rating_before: snapshot.rating_before,
                rating_after: snapshot.rating_after,
            },
        )?;
    }

    for entry in leaderboard {
        let fighter_id = match ids.get(entry.fighter.as_str()) {
            Some(id) => *id,
            None => database::fighters::get_or_create_fighter(conn, &entry.fighter)?.id,
        };
        database::leaderboard::insert_entry(
            conn,
            fighter_id,
            entry.rank,
            entry.final_rating,
            entry.peak_rating,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::RatingSettings;
    use crate::domain::RawContest;
    use crate::services::ingestion::ContestLog;

    fn raw(date: &str, a: &str, b: &str, result: &str, method: &str) -> RawContest {
        RawContest {
            event: "Event".to_string(),
            event_date: date.to_string(),
            fighter_1: a.to_string(),
            fighter_2: b.to_string(),
            result: result.to_string(),
            method: method.to_string(),
        }
    }

    fn service() -> ProcessingService {
        ProcessingService::new(AppConfig::new()).unwrap()
    }

    #[test]
    fn test_invalid_settings_rejected_before_run() {
        let mut config = AppConfig::new();
        config.rating = RatingSettings {
            k_factor: -1.0,
            ..RatingSettings::default()
        };
        assert!(ProcessingService::new(config).is_err());
    }

    #[test]
    fn test_rate_builds_report() {
        let log = ContestLog {
            rows: vec![
                raw("2020-01-01", "A", "B", "win", "KO/TKO"),
                raw("not a date", "C", "D", "win", "Decision"),
                raw("2020-02-01", "A", "C", "pending", "Decision"),
            ],
            malformed_rows: 1,
        };

        let run = service().rate(log).unwrap();

        assert_eq!(run.report.total_records, 4);
        assert_eq!(run.report.malformed_rows, 1);
        assert_eq!(run.report.unparseable_dates.len(), 1);
        assert_eq!(run.report.ambiguous_outcomes.len(), 1);
        assert_eq!(run.report.rated_contests, 1);
        assert!(!run.report.is_complete());

        assert_eq!(run.outcome.snapshots.len(), 4);
        assert_eq!(run.leaderboard[0].fighter, "A");
        assert_eq!(run.leaderboard[0].final_rating, 1525.0);
    }

    #[test]
    fn test_self_pairing_rows_are_skipped_and_counted() {
        let log = ContestLog {
            rows: vec![
                raw("2020-01-01", "A", "B", "win", "Decision"),
                raw("2020-02-01", "A", "A", "win", "KO/TKO"),
            ],
            malformed_rows: 0,
        };

        let run = service().rate(log).unwrap();

        assert_eq!(run.report.invalid_pairings.len(), 1);
        assert_eq!(run.report.skipped_count(), 1);
        assert_eq!(run.report.rated_contests, 1);
        assert_eq!(run.outcome.snapshots.len(), 2);
        assert_eq!(run.leaderboard[0].fighter, "A");
        assert_eq!(run.leaderboard[0].final_rating, 1520.0);
        assert_eq!(run.leaderboard[0].peak_rating, 1520.0);
    }

    #[test]
    fn test_write_ratings_stores_initial_rows() {
        let log = ContestLog {
            rows: vec![
                raw("2020-01-01", "A", "B", "win", "Decision"),
                raw("2020-03-01", "B", "C", "draw", "Decision"),
            ],
            malformed_rows: 0,
        };
        let run = service().rate(log).unwrap();

        let conn = Connection::open_in_memory().unwrap();
        database::setup::reset_database(&conn).unwrap();
        write_ratings(&conn, &run.outcome.snapshots, &run.leaderboard, 1500.0).unwrap();

        let c = database::fighters::find_by_name(&conn, "C").unwrap().unwrap();
        let rows = database::history::list_by_fighter(&conn, c.id).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].event_name, database::history::INITIAL_EVENT);
        assert_eq!(rows[0].event_date, NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());
        assert_eq!(rows[0].rating_after, 1500.0);
        assert_eq!(rows[1].result, "Draw");

        let top = database::leaderboard::list_top(&conn, 10).unwrap();
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].name, "A");
    }

    #[test]
    fn test_run_writes_exports_and_swaps_database() {
        let dir = std::env::temp_dir().join(format!("fight_elo_run_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("fights.csv");
        std::fs::write(
            &input,
            "event,event_date,fighter_1,fighter_2,result,method\n\
             UFC 2,\"March 11, 1994\",Royce Gracie,Patrick Smith,win,SUB\n\
             UFC 1,\"November 12, 1993\",Royce Gracie,Gerard Gordeau,win,SUB\n",
        )
        .unwrap();

        let mut config = AppConfig::new();
        config.ingest.input_path = input;
        config.ingest.newest_first = true;
        config.storage.database_path = dir.join("ratings.db").display().to_string();
        config.storage.snapshots_path = dir.join("snapshots.csv");
        config.storage.leaderboard_path = dir.join("leaderboard.csv");

        let run = ProcessingService::new(config.clone()).unwrap().run().unwrap();
        assert_eq!(run.outcome.snapshots[0].event, "UFC 1");
        assert!(config.storage.snapshots_path.exists());
        assert!(config.storage.leaderboard_path.exists());
        assert!(!Path::new(&format!("{}.tmp", config.storage.database_path)).exists());

        let conn = Connection::open(&config.storage.database_path).unwrap();
        let fighters = database::fighters::list_all(&conn).unwrap();
        assert_eq!(fighters.len(), 3);

        std::fs::remove_dir_all(&dir).ok();
    }
}
