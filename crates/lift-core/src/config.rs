//! Run configuration: building shape, cab zones, arrival process, algorithm.
//!
//! `SimConfig::default()` is the reference building (21 floors, 6 shafts of
//! two stacked cabs).  Applications either tweak the default in code or, with
//! the `serde` feature, load a partial JSON document on top of it.

use std::fmt;
use std::str::FromStr;

use crate::{LiftError, LiftResult, Tick};

/// A 1-based floor number.
pub type Floor = u32;

// ── CabPosition ───────────────────────────────────────────────────────────────

/// Vertical slot of a cab inside its shaft.  Fixed at construction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CabPosition {
    Lower,
    Upper,
}

impl CabPosition {
    /// Both positions, bottom first.  Cab ids are laid out in this order.
    pub const ALL: [CabPosition; 2] = [CabPosition::Lower, CabPosition::Upper];

    /// Offset of this position within its shaft (0 = lower, 1 = upper).
    #[inline]
    pub fn index(self) -> u32 {
        match self {
            CabPosition::Lower => 0,
            CabPosition::Upper => 1,
        }
    }

    /// The other slot in the same shaft.
    #[inline]
    pub fn opposite(self) -> CabPosition {
        match self {
            CabPosition::Lower => CabPosition::Upper,
            CabPosition::Upper => CabPosition::Lower,
        }
    }

    /// Floor a cab in this position occupies when the run starts.
    #[inline]
    pub fn starting_floor(self) -> Floor {
        self.index() + 1
    }
}

impl fmt::Display for CabPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CabPosition::Lower => "lower",
            CabPosition::Upper => "upper",
        })
    }
}

// ── FloorRange / ZoneBounds ───────────────────────────────────────────────────

/// Inclusive floor interval a cab may legally serve.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorRange {
    pub lowest:  Floor,
    pub highest: Floor,
}

impl FloorRange {
    pub const fn new(lowest: Floor, highest: Floor) -> Self {
        Self { lowest, highest }
    }

    #[inline]
    pub fn contains(self, floor: Floor) -> bool {
        (self.lowest..=self.highest).contains(&floor)
    }

    /// `true` if a trip from `source` to `destination` stays inside the range.
    #[inline]
    pub fn covers(self, source: Floor, destination: Floor) -> bool {
        self.contains(source) && self.contains(destination)
    }
}

impl fmt::Display for FloorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lowest, self.highest)
    }
}

/// Legal zones for the two cab positions, shared by every shaft.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneBounds {
    pub lower: FloorRange,
    pub upper: FloorRange,
}

impl ZoneBounds {
    #[inline]
    pub fn for_position(&self, position: CabPosition) -> FloorRange {
        match position {
            CabPosition::Lower => self.lower,
            CabPosition::Upper => self.upper,
        }
    }

    /// `true` if at least one cab position may carry `source → destination`.
    pub fn serves(&self, source: Floor, destination: Floor) -> bool {
        CabPosition::ALL
            .iter()
            .any(|&p| self.for_position(p).covers(source, destination))
    }
}

impl Default for ZoneBounds {
    fn default() -> Self {
        Self {
            lower: FloorRange::new(1, 12),
            upper: FloorRange::new(2, 21),
        }
    }
}

// ── InterArrivalShape ─────────────────────────────────────────────────────────

/// Triangular inter-arrival distribution, sampled in minutes and scaled to
/// ticks by `scale`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterArrivalShape {
    pub min:   f64,
    pub max:   f64,
    pub mode:  f64,
    pub scale: f64,
}

impl Default for InterArrivalShape {
    /// Maximum-likelihood fit on observed lobby arrivals.
    fn default() -> Self {
        let min = -0.000_001_841_785_86;
        Self {
            min,
            max:   min + 7.656_072_828_9,
            mode:  0.000_000_168_798_4,
            scale: 60.0,
        }
    }
}

// ── DispatchAlgorithm ─────────────────────────────────────────────────────────

/// Which cost model the dispatcher uses to pick a cab.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DispatchAlgorithm {
    /// Algorithm A: skip candidates that would collide right now; fall back
    /// to the cheapest legal cab when every candidate collides.
    #[default]
    AvoidCollision,
    /// Algorithm B: price the collision wait into every candidate's cost.
    CollisionCost,
}

impl FromStr for DispatchAlgorithm {
    type Err = LiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "1" | "avoid-collision" => Ok(DispatchAlgorithm::AvoidCollision),
            "b" | "2" | "collision-cost" => Ok(DispatchAlgorithm::CollisionCost),
            other => Err(LiftError::Parse(format!(
                "unknown dispatch algorithm {other:?}: expected \"a\"/\"1\" or \"b\"/\"2\""
            ))),
        }
    }
}

impl fmt::Display for DispatchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DispatchAlgorithm::AvoidCollision => "avoid-collision",
            DispatchAlgorithm::CollisionCost => "collision-cost",
        })
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Supplied once at construction; validated by [`SimConfig::validate`]
/// before any state is built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of floors, numbered `1..=floors`.
    pub floors: u32,

    /// Number of shafts.  Every shaft holds `cabs_per_shaft` cabs.
    pub shafts: u32,

    /// Must be 2: the collision logic only applies to a lower/upper pair.
    pub cabs_per_shaft: u32,

    /// Legal floor interval for each cab position.
    pub bounds: ZoneBounds,

    /// Simulated end time.  The event that first reaches it is still processed.
    pub horizon: Tick,

    /// Ticks a cab needs to travel one floor.
    pub travel_ticks_per_floor: u64,

    /// Shape of the per-floor inter-arrival distribution.
    pub inter_arrival: InterArrivalShape,

    pub algorithm: DispatchAlgorithm,

    /// Emit a per-event trace and the long-form report.
    pub verbose: bool,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            floors:                 21,
            shafts:                 6,
            cabs_per_shaft:         2,
            bounds:                 ZoneBounds::default(),
            horizon:                Tick(3_600),
            travel_ticks_per_floor: 2,
            inter_arrival:          InterArrivalShape::default(),
            algorithm:              DispatchAlgorithm::default(),
            verbose:                false,
            seed:                   42,
        }
    }
}

impl SimConfig {
    /// Total number of cabs in the bank.
    #[inline]
    pub fn cab_count(&self) -> usize {
        self.shafts as usize * self.cabs_per_shaft as usize
    }

    /// Check the structural invariants every other component relies on.
    ///
    /// Fails fast with a descriptive message; nothing is retried.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floors < 2 {
            return Err(LiftError::Config(format!(
                "building needs at least 2 floors, got {}",
                self.floors
            )));
        }
        if self.shafts == 0 {
            return Err(LiftError::Config("building needs at least 1 shaft".into()));
        }
        if self.cabs_per_shaft != 2 {
            return Err(LiftError::Config(format!(
                "cabs_per_shaft must be 2 (one lower, one upper), got {}",
                self.cabs_per_shaft
            )));
        }
        if self.horizon == Tick::ZERO {
            return Err(LiftError::Config("horizon must be greater than zero".into()));
        }

        for position in CabPosition::ALL {
            let range = self.bounds.for_position(position);
            if range.lowest == 0 || range.lowest > range.highest || range.highest > self.floors {
                return Err(LiftError::Config(format!(
                    "{position} cab bounds {range} must satisfy 1 <= lowest <= highest <= {}",
                    self.floors
                )));
            }
            if !range.contains(position.starting_floor()) {
                return Err(LiftError::Config(format!(
                    "{position} cab bounds {range} exclude its starting floor {}",
                    position.starting_floor()
                )));
            }
        }
        if let Some(floor) = (1..=self.floors).find(|&f| {
            !self.bounds.lower.contains(f) && !self.bounds.upper.contains(f)
        }) {
            return Err(LiftError::Config(format!(
                "floor {floor} is not covered by any cab (lower {}, upper {})",
                self.bounds.lower, self.bounds.upper
            )));
        }

        let shape = &self.inter_arrival;
        let finite = [shape.min, shape.max, shape.mode, shape.scale]
            .iter()
            .all(|v| v.is_finite());
        if !finite
            || shape.min >= shape.max
            || shape.mode < shape.min
            || shape.mode > shape.max
            || shape.scale <= 0.0
        {
            return Err(LiftError::Config(format!(
                "inter-arrival shape needs min < max, min <= mode <= max and scale > 0, got {shape:?}"
            )));
        }

        Ok(())
    }
}
