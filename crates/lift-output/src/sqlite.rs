//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `trips.db` file in the configured output directory with
//! two tables: `trips` and `run_summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, RunSummaryRow, TripRow};

/// Writes the trip log and the run summary to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `trips.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("trips.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS trips (
                 passenger_id INTEGER PRIMARY KEY,
                 source       INTEGER NOT NULL,
                 destination  INTEGER NOT NULL,
                 cab_id       INTEGER NOT NULL,
                 arrival      INTEGER NOT NULL,
                 pickup       INTEGER NOT NULL,
                 exit         INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS run_summary (
                 final_time INTEGER NOT NULL,
                 arrivals   INTEGER NOT NULL,
                 exits      INTEGER NOT NULL,
                 total_wait INTEGER NOT NULL,
                 total_time INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO trips \
                 (passenger_id, source, destination, cab_id, arrival, pickup, exit) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.passenger_id as i64,
                    row.source,
                    row.destination,
                    row.cab_id,
                    row.arrival as i64,
                    row.pickup as i64,
                    row.exit as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_summary (final_time, arrivals, exits, total_wait, total_time) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                row.final_time as i64,
                row.arrivals as i64,
                row.exits as i64,
                row.total_wait as i64,
                row.total_time as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
