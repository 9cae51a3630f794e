//! `RandomStream`: the two samplers a floor needs, over one seeded stream.

use lift_core::{Floor, InterArrivalShape, LiftError, LiftResult, SimRng};
use rand_distr::{Distribution, Triangular};

use crate::DestinationTables;

/// Inter-arrival and destination sampler backed by an injected [`SimRng`].
///
/// Each sampler consumes exactly one uniform draw per call (destination
/// resampling aside), so a stream's output is a pure function of its seed
/// and the order of calls.
pub struct RandomStream {
    rng:          SimRng,
    triangular:   Triangular<f64>,
    scale:        f64,
    destinations: DestinationTables,
}

impl RandomStream {
    /// Wrap `rng` with the configured inter-arrival shape and the building's
    /// destination tables.
    pub fn new(
        rng:          SimRng,
        shape:        &InterArrivalShape,
        destinations: DestinationTables,
    ) -> LiftResult<Self> {
        let triangular = Triangular::new(shape.min, shape.max, shape.mode).map_err(|e| {
            LiftError::Config(format!("invalid inter-arrival shape {shape:?}: {e:?}"))
        })?;
        Ok(Self {
            rng,
            triangular,
            scale: shape.scale,
            destinations,
        })
    }

    /// Ticks until the next arrival: `round(sample * scale)`, never negative.
    pub fn next_offset(&mut self) -> u64 {
        let sample = self.triangular.sample(self.rng.inner());
        (sample * self.scale).round().max(0.0) as u64
    }

    /// A destination for a passenger on `source`, never `source` itself.
    pub fn next_destination(&mut self, source: Floor) -> Floor {
        loop {
            let floor = self.destinations.floor_for(source, self.rng.uniform());
            if floor != source {
                return floor;
            }
        }
    }

    pub fn destinations(&self) -> &DestinationTables {
        &self.destinations
    }
}
