use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::warn;

use super::models::{ContestRecord, DataQualityReport, RawContest, SkippedContest};
use crate::normalizer::ContestNormalizer;

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%m/%d/%Y", "%d.%m.%Y"];

/// Contests ready for the batch processor, plus what was left out on the way
#[derive(Debug, Default)]
pub struct PreparedContests {
    pub contests: Vec<ContestRecord>,
    pub report: DataQualityReport,
}

/// Normalize raw rows, drop the ones that cannot be placed in time and sort
/// the rest by date, ties broken by stream position.
pub fn prepare_contests(
    raw: Vec<RawContest>,
    normalizer: &ContestNormalizer,
    newest_first: bool,
) -> PreparedContests {
    let mut prepared = PreparedContests::default();
    prepared.report.total_records = raw.len();

    for (sequence, row) in sequence_rows(raw, newest_first) {
        if !is_distinct_pairing(&row.fighter_1, &row.fighter_2) {
            warn!(
                "Skipping contest #{} ({}): fighters '{}' and '{}' are not two distinct competitors",
                sequence, row.event, row.fighter_1, row.fighter_2
            );
            prepared.report.invalid_pairings.push(skipped(sequence, row));
            continue;
        }

        match parse_event_date(&row.event_date) {
            Some(date) => prepared
                .contests
                .push(build_record(sequence, date, row, normalizer)),
            None => {
                warn!(
                    "Skipping contest #{} ({} vs {}, {}): unparseable date '{}'",
                    sequence, row.fighter_1, row.fighter_2, row.event, row.event_date
                );
                prepared.report.unparseable_dates.push(skipped(sequence, row));
            }
        }
    }

    order_chronologically(&mut prepared.contests);
    prepared
}

/// Both corners named and not the same fighter, compared after trimming
pub fn is_distinct_pairing(fighter_1: &str, fighter_2: &str) -> bool {
    let a = fighter_1.trim();
    let b = fighter_2.trim();
    !a.is_empty() && !b.is_empty() && a != b
}

fn sequence_rows(
    raw: Vec<RawContest>,
    newest_first: bool,
) -> impl Iterator<Item = (usize, RawContest)> {
    let mut rows = raw;
    if newest_first {
        rows.reverse();
    }
    rows.into_iter().enumerate()
}

fn build_record(
    sequence: usize,
    date: NaiveDate,
    row: RawContest,
    normalizer: &ContestNormalizer,
) -> ContestRecord {
    let (outcome, method) = normalizer.normalize(&row.result, &row.method);

    ContestRecord {
        sequence,
        event: normalizer.clean(&row.event),
        date,
        fighter_a: row.fighter_1.trim().to_string(),
        fighter_b: row.fighter_2.trim().to_string(),
        outcome,
        method,
    }
}

fn skipped(sequence: usize, row: RawContest) -> SkippedContest {
    SkippedContest {
        sequence,
        event: row.event,
        fighters: (row.fighter_1, row.fighter_2),
        raw_date: row.event_date,
    }
}

/// Stable sort, so equal dates keep their stream order
pub fn order_chronologically(contests: &mut [ContestRecord]) {
    contests.sort_by_key(ContestRecord::chronological_key);
}

pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}
