//! `lift-sim` — the discrete-event kernel of the elevator simulator.
//!
//! # Event loop
//!
//! ```text
//! seed: one passenger per floor, Generate(T0) each
//! while clock < horizon:
//!   ① Pop     — earliest (timestamp, passenger id) from EventQueue
//!   ② Advance — clock jumps to the event's timestamp
//!   ③ Process — Generate → Arrive(t')
//!               Arrive   → Exit(drop-off) + Generate(t) for a fresh passenger
//!               Exit     → nothing
//!   ④ Push    — every follow-up event goes back into the queue
//! ```
//!
//! The horizon check comes before the pop, so the event that first reaches
//! the horizon is still processed.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("{} passengers delivered", summary.stats.exits);
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod queue;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::{EventKind, Outcome, SimEvent};
pub use observer::{NoopObserver, SimObserver};
pub use queue::EventQueue;
pub use sim::{RunSummary, Sim};
