use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{Connection, params};

use super::models::HistoryRow;

pub const INITIAL_EVENT: &str = "Initial Rating";
pub const INITIAL_RESULT: &str = "Initial";
pub const NO_OPPONENT: &str = "N/A";

pub struct NewHistoryRow<'a> {
    pub fighter_id: i64,
    pub event_date: NaiveDate,
    pub event_name: &'a str,
    pub opponent_name: &'a str,
    pub result: &'a str,
    pub rating_before: f64,
    pub rating_after: f64,
}

pub fn insert_history_row(conn: &Connection, row: &NewHistoryRow) -> Result<i64> {
    let sql = "INSERT INTO rating_history (fighter_id, event_date, event_name, opponent_name, result, rating_before, rating_after) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

    conn.execute(
        sql,
        params![
            row.fighter_id,
            row.event_date,
            row.event_name,
            row.opponent_name,
            row.result,
            row.rating_before,
            row.rating_after
        ],
    )
    .context("Failed to insert rating history row")?;

    Ok(conn.last_insert_rowid())
}

/// Starting point plotted one day before the fighter's first contest
pub fn insert_initial_rating(
    conn: &Connection,
    fighter_id: i64,
    first_contest: NaiveDate,
    default_rating: f64,
) -> Result<i64> {
    let event_date = first_contest.pred_opt().unwrap_or(first_contest);

    insert_history_row(
        conn,
        &NewHistoryRow {
            fighter_id,
            event_date,
            event_name: INITIAL_EVENT,
            opponent_name: NO_OPPONENT,
            result: INITIAL_RESULT,
            rating_before: default_rating,
            rating_after: default_rating,
        },
    )
}

fn parse_history_row(row: &rusqlite::Row) -> rusqlite::Result<HistoryRow> {
    Ok(HistoryRow {
        id: row.get(0)?,
        fighter_id: row.get(1)?,
        event_date: row.get(2)?,
        event_name: row.get(3)?,
        opponent_name: row.get(4)?,
        result: row.get(5)?,
        rating_before: row.get(6)?,
        rating_after: row.get(7)?,
    })
}

/// Full time series of a fighter: by date, then by insertion order
pub fn list_by_fighter(conn: &Connection, fighter_id: i64) -> Result<Vec<HistoryRow>> {
    let sql = "SELECT id, fighter_id, event_date, event_name, opponent_name, result, rating_before, rating_after FROM rating_history WHERE fighter_id = ?1 ORDER BY event_date ASC, id ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![fighter_id], parse_history_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list rating history")?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::fighters::get_or_create_fighter;
    use crate::database::setup::reset_database;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_initial_rating_precedes_first_contest() {
        let conn = Connection::open_in_memory().unwrap();
        reset_database(&conn).unwrap();
        let fighter = get_or_create_fighter(&conn, "A").unwrap();

        insert_history_row(
            &conn,
            &NewHistoryRow {
                fighter_id: fighter.id,
                event_date: date(2020, 1, 1),
                event_name: "E1",
                opponent_name: "B",
                result: "Win",
                rating_before: 1500.0,
                rating_after: 1520.0,
            },
        )
        .unwrap();
        insert_initial_rating(&conn, fighter.id, date(2020, 1, 1), 1500.0).unwrap();

        let rows = list_by_fighter(&conn, fighter.id).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].event_name, INITIAL_EVENT);
        assert_eq!(rows[0].event_date, date(2019, 12, 31));
        assert_eq!(rows[0].opponent_name, NO_OPPONENT);
        assert_eq!(rows[1].rating_after, 1520.0);
    }

    #[test]
    fn test_same_day_rows_keep_insertion_order() {
        let conn = Connection::open_in_memory().unwrap();
        reset_database(&conn).unwrap();
        let fighter = get_or_create_fighter(&conn, "A").unwrap();

        for (event, after) in [("First", 1520.0), ("Second", 1540.0)] {
            insert_history_row(
                &conn,
                &NewHistoryRow {
                    fighter_id: fighter.id,
                    event_date: date(2020, 1, 1),
                    event_name: event,
                    opponent_name: "B",
                    result: "Win",
                    rating_before: after - 20.0,
                    rating_after: after,
                },
            )
            .unwrap();
        }

        let events: Vec<String> = list_by_fighter(&conn, fighter.id)
            .unwrap()
            .into_iter()
            .map(|r| r.event_name)
            .collect();
        assert_eq!(events, vec!["First", "Second"]);
    }
}
