//! `lift-output` — what a run leaves behind.
//!
//! Two trip-log backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                      |
//! |-----------|---------|------------------------------------|
//! | *(none)*  | CSV     | `trips.csv`, `run_summary.csv`     |
//! | `sqlite`  | SQLite  | `trips.db`                         |
//!
//! Both implement [`OutputWriter`] and are driven by [`TripLogObserver`],
//! which implements `lift_sim::SimObserver`.  [`Report`] renders the end of
//! run statistics as text.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, Report, TripLogObserver};
//!
//! let writer = CsvWriter::new(Path::new("./out"))?;
//! let mut obs = TripLogObserver::new(writer);
//! let summary = sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! println!("{}", Report::new(config.algorithm, &summary).verbose());
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TripLogObserver;
pub use report::Report;
pub use row::{RunSummaryRow, TripRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
