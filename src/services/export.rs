use std::io::Write;
use std::path::Path;

use anyhow::Result;
use log::info;
use serde::Serialize;

use crate::domain::{LeaderboardEntry, RatingSnapshot};
use crate::errors::with_export_context;

pub fn export_snapshots(path: &Path, snapshots: &[RatingSnapshot]) -> Result<()> {
    write_file(path, snapshots)?;
    info!("  → Wrote {} rating snapshots to {}", snapshots.len(), path.display());
    Ok(())
}

pub fn export_leaderboard(path: &Path, entries: &[LeaderboardEntry]) -> Result<()> {
    write_file(path, entries)?;
    info!("  → Wrote {} leaderboard rows to {}", entries.len(), path.display());
    Ok(())
}

fn write_file<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let writer = with_export_context(csv::Writer::from_path(path), path)?;
    write_rows(writer, rows).map_err(|e| e.context(format!("while writing {}", path.display())))
}

pub fn write_rows<T: Serialize, W: Write>(mut writer: csv::Writer<W>, rows: &[T]) -> Result<()> {
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
