use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

use super::models::RankedFighter;

pub fn insert_entry(
    conn: &Connection,
    fighter_id: i64,
    rank: usize,
    final_rating: f64,
    peak_rating: f64,
) -> Result<()> {
    let sql = "INSERT INTO leaderboard (fighter_id, rank, final_rating, peak_rating) VALUES (?1, ?2, ?3, ?4)";

    conn.execute(sql, params![fighter_id, rank as i64, final_rating, peak_rating])
        .context("Failed to insert leaderboard entry")
        .map(|_| ())
}

fn parse_ranked_row(row: &rusqlite::Row) -> rusqlite::Result<RankedFighter> {
    Ok(RankedFighter {
        fighter_id: row.get(0)?,
        name: row.get(1)?,
        rank: row.get(2)?,
        final_rating: row.get(3)?,
        peak_rating: row.get(4)?,
    })
}

pub fn list_top(conn: &Connection, limit: usize) -> Result<Vec<RankedFighter>> {
    let sql = "SELECT l.fighter_id, f.name, l.rank, l.final_rating, l.peak_rating FROM leaderboard l JOIN fighters f ON f.id = l.fighter_id ORDER BY l.rank ASC LIMIT ?1";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![limit as i64], parse_ranked_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn find_by_fighter(conn: &Connection, fighter_id: i64) -> Result<Option<RankedFighter>> {
    let sql = "SELECT l.fighter_id, f.name, l.rank, l.final_rating, l.peak_rating FROM leaderboard l JOIN fighters f ON f.id = l.fighter_id WHERE l.fighter_id = ?1";

    conn.query_row(sql, params![fighter_id], parse_ranked_row)
        .optional()
        .context("Failed to query leaderboard entry")
}
