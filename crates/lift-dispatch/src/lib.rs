//! `lift-dispatch` — cabs, the shared-shaft collision rule, and the
//! dispatcher that assigns each arriving passenger to a cab.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`cab`]       | `Cab`, `PickupCosts`                                      |
//! | [`bank`]      | `CabBank` (flat storage, sibling lookup, collision rule), `Trip` |
//! | [`model`]     | `DispatchModel`, `Assignment`, `SiblingMove`              |
//! | [`stats`]     | `Stats` running counters                                  |
//! | [`error`]     | `DispatchError`, `DispatchResult<T>`                      |
//!
//! # Dispatch (summary)
//!
//! ```text
//! legal      = cabs whose zone covers source and destination
//! costs      = per candidate: no-wait ETA, collision-aware ETA
//! Algorithm A: min no-wait ETA over non-colliding candidates,
//!              else min no-wait ETA over all legal candidates
//! Algorithm B: min collision-aware ETA over all legal candidates
//! apply      = reserve cab, reposition its sibling, update stats
//! ```
//!
//! `DispatchModel::assign` applies the whole assignment inside one
//! `&mut self` call, so no partially applied assignment is ever observable.

pub mod bank;
pub mod cab;
pub mod error;
pub mod model;
pub mod stats;


pub use bank::{CabBank, Trip};
pub use cab::{Cab, PickupCosts};
pub use error::{DispatchError, DispatchResult};
pub use model::{Assignment, DispatchModel, SiblingMove};
pub use stats::Stats;
