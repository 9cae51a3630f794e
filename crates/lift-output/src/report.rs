//! End-of-run text reports.

use lift_core::DispatchAlgorithm;
use lift_dispatch::Stats;
use lift_sim::RunSummary;

use crate::OutputResult;

/// Renders a finished run's statistics.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    algorithm: DispatchAlgorithm,
    summary:   RunSummary,
}

impl Report {
    pub fn new(algorithm: DispatchAlgorithm, summary: &RunSummary) -> Self {
        Self { algorithm, summary: *summary }
    }

    pub fn stats(&self) -> &Stats {
        &self.summary.stats
    }

    /// Multi-line human-readable block.  Undefined averages print `n/a`.
    pub fn verbose(&self) -> String {
        let stats = self.stats();
        format!(
            "Algorithm: {}\n\
             Simulated Time: {}\n\
             Events Processed: {}\n\
             Number of Users Arrived: {}\n\
             Number of Users Exited: {}\n\
             Average Time Spent Waiting for Cab: {}\n\
             Average Time Spent Waiting and Travelling: {}",
            self.algorithm,
            self.summary.final_time,
            self.summary.events_processed,
            stats.arrivals,
            stats.exits,
            text(stats.average_wait()),
            text(stats.average_total()),
        )
    }

    /// One delimited line: `arrivals,exits,avg_wait,avg_total`.  Undefined
    /// averages are empty fields.
    pub fn quiet_line(&self) -> OutputResult<String> {
        let stats = self.stats();
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        wtr.write_record([
            stats.arrivals.to_string(),
            stats.exits.to_string(),
            field(stats.average_wait()),
            field(stats.average_total()),
        ])?;
        let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8_lossy(&bytes).trim_end().to_owned())
    }
}

fn text(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |v| format!("{v:.2}"))
}

fn field(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| format!("{v:.2}"))
}
