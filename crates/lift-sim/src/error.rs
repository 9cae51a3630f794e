use lift_core::{LiftError, Tick};
use lift_dispatch::DispatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] LiftError),

    #[error("dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("event at {event} popped after the clock reached {now}")]
    Causality { event: Tick, now: Tick },
}

pub type SimResult<T> = Result<T, SimError>;
