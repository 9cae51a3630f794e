//! `lift-core` — foundational types for the stacked-cab elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ids`]         | `PassengerId`, `CabId`, `ShaftId`                          |
//! | [`time`]        | `Tick`, `SimClock`                                         |
//! | [`rng`]         | `SimRng` (seedable, injectable stream)                     |
//! | [`config`]      | `SimConfig`, `FloorRange`, `ZoneBounds`, `DispatchAlgorithm` |
//! | [`error`]       | `LiftError`, `LiftResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `SimConfig` from a JSON file.             |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    CabPosition, DispatchAlgorithm, Floor, FloorRange, InterArrivalShape, SimConfig, ZoneBounds,
};
pub use error::{LiftError, LiftResult};
pub use ids::{CabId, PassengerId, ShaftId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
