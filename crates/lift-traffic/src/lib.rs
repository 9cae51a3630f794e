//! `lift-traffic` — the passenger side of the simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`passenger`]   | `Passenger`, `PassengerArena` (id allocation)             |
//! | [`destination`] | `SourceBucket`, `DestinationTable`, `DestinationTables`   |
//! | [`stream`]      | `RandomStream` (triangular offsets + destination draws)   |
//! | [`generator`]   | `ArrivalGenerator` (one per floor)                        |
//!
//! # Arrival model (summary)
//!
//! ```text
//! next_arrival  = created_at + round(Triangular(a, b, c) * scale)
//! destination   = inverse_cdf(table[bucket(source)], U)   resampled while == source
//! ```
//!
//! Every floor owns one `ArrivalGenerator` with its own child `SimRng`, so the
//! draws for one floor never depend on how busy the other floors are.

pub mod destination;
pub mod generator;
pub mod passenger;
pub mod stream;

#[cfg(test)]
mod tests;

pub use destination::{DestinationTable, DestinationTables, SourceBucket};
pub use generator::ArrivalGenerator;
pub use passenger::{Passenger, PassengerArena};
pub use stream::RandomStream;
