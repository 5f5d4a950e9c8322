use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn reset_database(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    log::info!("Database schema reset successfully");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skips_blank_statements() {
        let statements = split_sql_statements("CREATE TABLE a (x INT);\n\n;DROP TABLE b;  ");
        assert_eq!(statements, vec!["CREATE TABLE a (x INT)", "DROP TABLE b"]);
    }

    #[test]
    fn test_reset_is_repeatable() {
        let conn = Connection::open_in_memory().unwrap();
        reset_database(&conn).unwrap();
        conn.execute("INSERT INTO fighters (name) VALUES ('A')", [])
            .unwrap();

        reset_database(&conn).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM fighters", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
