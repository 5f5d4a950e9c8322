use anyhow::{Result, anyhow};
use colored::*;
use rusqlite::Connection;

use crate::database::{self, Fighter, HistoryRow, RankedFighter};
use crate::domain::{DataQualityReport, LeaderboardEntry};
use crate::rating::EloEngine;

const PREVIEW_ROWS: usize = 10;

/// Everything stored about one fighter, read back from the database
#[derive(Debug, Clone)]
pub struct FighterHistory {
    pub fighter: Fighter,
    pub rows: Vec<HistoryRow>,
    pub standing: Option<RankedFighter>,
}

impl FighterHistory {
    pub fn current_rating(&self) -> Option<f64> {
        self.rows.last().map(|row| row.rating_after)
    }

    pub fn peak_rating(&self) -> Option<f64> {
        self.standing.as_ref().map(|s| s.peak_rating)
    }

    /// Rated contests only, the initial rating row excluded
    pub fn contests(&self) -> impl Iterator<Item = &HistoryRow> {
        self.rows
            .iter()
            .filter(|row| row.event_name != database::history::INITIAL_EVENT)
    }
}

pub fn load_history(conn: &Connection, name: &str) -> Result<FighterHistory> {
    let fighter = database::fighters::find_by_name(conn, name.trim())?
        .ok_or_else(|| anyhow!("Fighter '{}' not found", name.trim()))?;

    let rows = database::history::list_by_fighter(conn, fighter.id)?;
    let standing = database::leaderboard::find_by_fighter(conn, fighter.id)?;

    Ok(FighterHistory {
        fighter,
        rows,
        standing,
    })
}

/// Head-to-head view of two fighters at their latest ratings
#[derive(Debug, Clone)]
pub struct Comparison {
    pub first: FighterHistory,
    pub second: FighterHistory,
    pub expected_first: f64,
}

pub fn compare(conn: &Connection, first: &str, second: &str, default_rating: f64) -> Result<Comparison> {
    let first = load_history(conn, first)?;
    let second = load_history(conn, second)?;

    let expected_first = EloEngine::expected_score(
        first.current_rating().unwrap_or(default_rating),
        second.current_rating().unwrap_or(default_rating),
    );

    Ok(Comparison {
        first,
        second,
        expected_first,
    })
}

fn colorize_result(result: &str) -> ColoredString {
    match result {
        "Win" => result.green(),
        "Loss" => result.red(),
        "Draw" => result.yellow(),
        _ => result.dimmed(),
    }
}

fn format_change(before: f64, after: f64) -> ColoredString {
    let change = after - before;
    let text = format!("{:+.2}", change);
    if change > 0.0 {
        text.green()
    } else if change < 0.0 {
        text.red()
    } else {
        text.dimmed()
    }
}

pub fn print_history(history: &FighterHistory) {
    println!();
    println!("{}", format!("Fight history: {}", history.fighter.name).cyan().bold());
    println!(
        "{:<12} {:<40} {:<28} {:<8} {:>9} {:>9} {:>8}",
        "Date", "Event", "Opponent", "Result", "Before", "After", "Change"
    );

    for row in history.contests() {
        println!(
            "{:<12} {:<40} {:<28} {:<8} {:>9.2} {:>9.2} {:>8}",
            row.event_date.format("%Y-%m-%d").to_string(),
            truncate(&row.event_name, 40),
            truncate(&row.opponent_name, 28),
            colorize_result(&row.result),
            row.rating_before,
            row.rating_after,
            format_change(row.rating_before, row.rating_after)
        );
    }

    let current = history
        .current_rating()
        .map(|r| format!("{:.2}", r))
        .unwrap_or_else(|| "-".to_string());
    let peak = history
        .peak_rating()
        .map(|r| format!("{:.2}", r))
        .unwrap_or_else(|| "-".to_string());
    let rank = history
        .standing
        .as_ref()
        .map(|s| format!("#{}", s.rank))
        .unwrap_or_else(|| "-".to_string());

    println!(
        "{} {}  {} {}  {} {}",
        "Current:".bold(),
        current,
        "Peak:".bold(),
        peak,
        "Rank:".bold(),
        rank
    );
}

pub fn print_comparison(comparison: &Comparison) {
    print_history(&comparison.first);
    print_history(&comparison.second);

    println!();
    println!(
        "{} {} vs {}: {:.1}% / {:.1}%",
        "Expected score".bold(),
        comparison.first.fighter.name,
        comparison.second.fighter.name,
        comparison.expected_first * 100.0,
        (1.0 - comparison.expected_first) * 100.0
    );
}

pub fn print_leaderboard_preview(entries: &[LeaderboardEntry]) {
    println!();
    println!("{}", "Top fighters".cyan().bold());
    println!("{:>4}  {:<32} {:>9} {:>9}", "Rank", "Fighter", "Rating", "Peak");

    for entry in entries.iter().take(PREVIEW_ROWS) {
        println!(
            "{:>4}  {:<32} {:>9.2} {:>9.2}",
            entry.rank,
            truncate(&entry.fighter, 32),
            entry.final_rating,
            entry.peak_rating
        );
    }
}

pub fn print_quality_summary(report: &DataQualityReport) {
    println!();
    println!(
        "Rated {} of {} contest records",
        report.rated_contests, report.total_records
    );

    if report.is_complete() {
        println!("{}", "No records skipped or flagged".green());
        return;
    }

    if report.skipped_count() > 0 {
        println!(
            "{}",
            format!(
                "Skipped {} records ({} malformed rows, {} unparseable dates, {} invalid pairings)",
                report.skipped_count(),
                report.malformed_rows,
                report.unparseable_dates.len(),
                report.invalid_pairings.len()
            )
            .yellow()
        );
    }
    if report.flagged_count() > 0 {
        println!(
            "{}",
            format!(
                "Flagged {} contests with unrecognized results",
                report.flagged_count()
            )
            .yellow()
        );
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(width.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}
