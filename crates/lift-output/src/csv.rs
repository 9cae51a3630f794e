//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trips.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RunSummaryRow, TripRow};

/// Writes the trip log and the run summary to two CSV files.
pub struct CsvWriter {
    trips:    Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trips = Writer::from_path(dir.join("trips.csv"))?;
        trips.write_record([
            "passenger_id",
            "source",
            "destination",
            "cab_id",
            "arrival",
            "pickup",
            "exit",
        ])?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record(["final_time", "arrivals", "exits", "total_wait", "total_time"])?;

        Ok(Self {
            trips,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        for row in rows {
            self.trips.write_record(&[
                row.passenger_id.to_string(),
                row.source.to_string(),
                row.destination.to_string(),
                row.cab_id.to_string(),
                row.arrival.to_string(),
                row.pickup.to_string(),
                row.exit.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.final_time.to_string(),
            row.arrivals.to_string(),
            row.exits.to_string(),
            row.total_wait.to_string(),
            row.total_time.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trips.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
