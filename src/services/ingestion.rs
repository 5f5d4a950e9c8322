use std::io::Read;
use std::path::Path;

use anyhow::Result;
use log::{info, warn};

use crate::domain::RawContest;
use crate::errors::{RatingError, with_parse_context};

/// Raw contest rows read from the contest log
#[derive(Debug, Default)]
pub struct ContestLog {
    pub rows: Vec<RawContest>,
    pub malformed_rows: usize,
}

/// Read the contest log CSV produced by the scraping collaborator.
///
/// A missing or unreadable file and a log without a single usable row are
/// both fatal: there is nothing to rate.
pub fn load_contest_log(path: &Path) -> Result<ContestLog> {
    info!("Loading contest log from {}", path.display());

    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_path(path)
        .map_err(|e| RatingError::source_unavailable(path, e))?;

    let log = read_rows(reader)?;
    ensure_not_empty(log, path)
}

pub fn read_contest_log<R: Read>(input: R) -> Result<ContestLog> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(input);

    read_rows(reader)
}

fn read_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<ContestLog> {
    with_parse_context(reader.headers(), "contest log header")?;

    let mut log = ContestLog::default();
    for (idx, record) in reader.deserialize::<RawContest>().enumerate() {
        match record {
            Ok(row) => log.rows.push(row),
            Err(e) => {
                warn!("Skipping malformed contest row {}: {}", idx + 1, e);
                log.malformed_rows += 1;
            }
        }
    }

    info!(
        "  → Read {} contest rows ({} malformed)",
        log.rows.len(),
        log.malformed_rows
    );
    Ok(log)
}

fn ensure_not_empty(log: ContestLog, path: &Path) -> Result<ContestLog> {
    if log.rows.is_empty() {
        return Err(RatingError::EmptySource {
            path: path.display().to_string(),
        }
        .into());
    }
    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
event,event_date,fighter_1,fighter_2,result,method,round,time
UFC 1,1993-11-12,Royce Gracie,Art Jimmerson,win,SUB,1,2:18
UFC 1,1993-11-12,Ken Shamrock,Patrick Smith,win,SUB,1,1:49
";

    #[test]
    fn test_reads_standard_header() {
        let log = read_contest_log(SAMPLE.as_bytes()).unwrap();

        assert_eq!(log.rows.len(), 2);
        assert_eq!(log.malformed_rows, 0);
        assert_eq!(log.rows[0].fighter_1, "Royce Gracie");
        assert_eq!(log.rows[0].result, "win");
        assert_eq!(log.rows[1].method, "SUB");
    }

    #[test]
    fn test_accepts_scraper_aliases() {
        let input = "event,date,fighter_1,fighter_2,winner,method\nUFC 2,1994-03-11,A,B,loss,U-DEC\n";
        let log = read_contest_log(input.as_bytes()).unwrap();

        assert_eq!(log.rows[0].event_date, "1994-03-11");
        assert_eq!(log.rows[0].result, "loss");
    }

    #[test]
    fn test_multiline_cells_survive() {
        let input = "event,event_date,fighter_1,fighter_2,result,method\nUFC 3,1994-09-09,A,B,\"\nwin\n\",\"KO/TKO\n\nPunches\"\n";
        let log = read_contest_log(input.as_bytes()).unwrap();

        assert_eq!(log.rows[0].result, "\nwin\n");
        assert!(log.rows[0].method.contains("Punches"));
    }

    #[test]
    fn test_counts_malformed_rows() {
        let input = "event,event_date,fighter_1,fighter_2,result,method\nUFC 4,1994-12-16,A\nUFC 4,1994-12-16,C,D,win,SUB\n";
        let log = read_contest_log(input.as_bytes()).unwrap();

        assert_eq!(log.rows.len(), 1);
        assert_eq!(log.malformed_rows, 1);
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let path = std::env::temp_dir().join("fight_elo_missing_contest_log.csv");
        let err = load_contest_log(&path).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RatingError>(),
            Some(RatingError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_header_only_file_is_empty_source() {
        let path = std::env::temp_dir().join(format!(
            "fight_elo_empty_log_{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, "event,event_date,fighter_1,fighter_2,result,method\n").unwrap();

        let err = load_contest_log(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            err.downcast_ref::<RatingError>(),
            Some(RatingError::EmptySource { .. })
        ));
    }
}
