//! `SimEvent` — the three-state passenger lifecycle.

use std::fmt;

use lift_core::{PassengerId, Tick};
use lift_dispatch::{Assignment, DispatchModel};
use lift_traffic::Passenger;

use crate::SimResult;

/// Discriminant of a [`SimEvent`], for logging and observers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EventKind {
    Generate,
    Arrive,
    Exit,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventKind::Generate => "generate",
            EventKind::Arrive => "arrive",
            EventKind::Exit => "exit",
        })
    }
}

/// A pending transition of one passenger.
///
/// Each event owns its passenger and is consumed by [`SimEvent::process`],
/// which hands the passenger on to the follow-up event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimEvent {
    /// Passenger created; draw the instant it reaches the lobby.
    Generate { at: Tick, passenger: Passenger },
    /// Passenger in the lobby; dispatch a cab.
    Arrive { at: Tick, passenger: Passenger },
    /// Passenger delivered.
    Exit { at: Tick, passenger: Passenger },
}

/// What processing one event produced.
#[derive(Debug, Default)]
pub struct Outcome {
    /// Follow-up events to enqueue.
    pub spawned:    Vec<SimEvent>,
    /// Set by Arrive.
    pub assignment: Option<Assignment>,
}

impl SimEvent {
    #[inline]
    pub fn at(&self) -> Tick {
        match self {
            SimEvent::Generate { at, .. }
            | SimEvent::Arrive { at, .. }
            | SimEvent::Exit { at, .. } => *at,
        }
    }

    #[inline]
    pub fn passenger(&self) -> &Passenger {
        match self {
            SimEvent::Generate { passenger, .. }
            | SimEvent::Arrive { passenger, .. }
            | SimEvent::Exit { passenger, .. } => passenger,
        }
    }

    #[inline]
    pub fn kind(&self) -> EventKind {
        match self {
            SimEvent::Generate { .. } => EventKind::Generate,
            SimEvent::Arrive { .. } => EventKind::Arrive,
            SimEvent::Exit { .. } => EventKind::Exit,
        }
    }

    /// Queue ordering key: timestamp, then passenger id.
    #[inline]
    pub fn key(&self) -> (Tick, PassengerId) {
        (self.at(), self.passenger().id)
    }

    /// Apply this transition to `model`.
    pub fn process(self, model: &mut DispatchModel) -> SimResult<Outcome> {
        match self {
            SimEvent::Generate { mut passenger, .. } => {
                let at = model.schedule_arrival(&mut passenger)?;
                Ok(Outcome {
                    spawned:    vec![SimEvent::Arrive { at, passenger }],
                    assignment: None,
                })
            }
            SimEvent::Arrive { at, mut passenger } => {
                let assignment = model.assign(at, &mut passenger)?;
                let next = model.spawn_passenger(at, passenger.source)?;
                Ok(Outcome {
                    spawned: vec![
                        SimEvent::Exit { at: assignment.drop_off, passenger },
                        SimEvent::Generate { at, passenger: next },
                    ],
                    assignment: Some(assignment),
                })
            }
            SimEvent::Exit { at, passenger } => {
                model.retire(at, &passenger)?;
                Ok(Outcome::default())
            }
        }
    }
}
