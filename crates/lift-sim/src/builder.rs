//! Fluent builder for constructing a [`Sim`].

use lift_core::{SimConfig, SimRng, Tick};
use lift_dispatch::DispatchModel;

use crate::{EventQueue, Sim, SimEvent, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method      | Default                          |
/// |-------------|----------------------------------|
/// | `.rng(r)`   | `SimRng::new(config.seed)`       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .rng(SimRng::new(7))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    rng:    Option<SimRng>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, rng: None }
    }

    /// Inject the root random stream instead of seeding from `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration, build the dispatch model, and seed one
    /// passenger per floor with a Generate event at tick 0.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let mut rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));
        let mut model = DispatchModel::new(&self.config, &mut rng)?;

        let mut queue = EventQueue::new();
        for passenger in model.seed_passengers() {
            queue.push(SimEvent::Generate { at: Tick::ZERO, passenger });
        }

        Ok(Sim::new(self.config, model, queue))
    }
}
