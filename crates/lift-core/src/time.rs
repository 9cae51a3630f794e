//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically non-decreasing `Tick` counter.  One
//! tick is one simulated second: travel costs are whole ticks per floor and
//! inter-arrival offsets are rounded to whole ticks.
//!
//! Using an integer tick as the canonical time unit means all dispatch
//! arithmetic is exact (no floating-point drift), event ordering is a plain
//! integer comparison, and two runs with the same seed agree bit for bit.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation instant, in seconds since the start of the run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The scheduler's global clock.
///
/// Only ever moves forward: the event queue hands out timestamps in
/// ascending order, and `advance_to` refuses to go backwards.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current simulated instant.
    #[inline]
    pub fn now(&self) -> Tick {
        self.current_tick
    }

    /// Move the clock to `tick`.
    ///
    /// Returns `false` (and leaves the clock untouched) if `tick` lies in the
    /// past.
    #[inline]
    pub fn advance_to(&mut self, tick: Tick) -> bool {
        if tick < self.current_tick {
            return false;
        }
        self.current_tick = tick;
        true
    }

    /// Break the current instant into (hour, minute, second) components.
    /// Useful for human-readable logging without a datetime library.
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let total = self.current_tick.0;
        let hours = total / 3_600;
        let minutes = ((total % 3_600) / 60) as u32;
        let seconds = (total % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "{} ({:02}:{:02}:{:02})", self.current_tick, h, m, s)
    }
}
