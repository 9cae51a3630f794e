//! `TripLogObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::Tick;
use lift_dispatch::Stats;
use lift_sim::{SimEvent, SimObserver};

use crate::row::{RunSummaryRow, TripRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Trips buffered before a batch is handed to the writer.
const DEFAULT_BATCH: usize = 1_024;

/// A [`SimObserver`] that logs one [`TripRow`] per delivered passenger and
/// the final counters to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TripLogObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<TripRow>,
    batch:      usize,
    written:    u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TripLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self::with_batch(writer, DEFAULT_BATCH)
    }

    /// Hand rows to the writer every `batch` trips (at least 1).
    pub fn with_batch(writer: W, batch: usize) -> Self {
        let batch = batch.max(1);
        Self {
            writer,
            pending: Vec::with_capacity(batch),
            batch,
            written: 0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Trips handed to the writer so far.
    pub fn trips_written(&self) -> u64 {
        self.written
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush(&mut self) -> OutputResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        self.writer.write_trips(&self.pending)?;
        self.written += self.pending.len() as u64;
        self.pending.clear();
        Ok(())
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                log::error!("trip log: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TripLogObserver<W> {
    fn on_event(&mut self, now: Tick, event: &SimEvent) {
        let SimEvent::Exit { passenger, .. } = event else {
            return;
        };
        match TripRow::from_exit(passenger, now) {
            Ok(row) => {
                self.pending.push(row);
                if self.pending.len() >= self.batch {
                    let result = self.flush();
                    self.store_err(result);
                }
            }
            Err(e) => self.store_err(Err(e)),
        }
    }

    fn on_sim_end(&mut self, final_time: Tick, stats: &Stats) {
        let result = self.flush();
        self.store_err(result);
        let result = self.writer.write_summary(&RunSummaryRow::new(final_time, stats));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
