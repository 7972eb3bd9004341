//! Fluent builder for constructing a [`Simulation`].

use log::debug;

use pk_core::SimConfig;
use pk_spatial::{LaneRouter, RoadTopology, Router};

use crate::{SimResult, Simulation};

/// Fluent builder for [`Simulation<R>`].
///
/// | Method        | Default        |
/// |---------------|----------------|
/// | `.router(r)`  | [`LaneRouter`] |
///
/// # Example
///
/// ```rust,ignore
/// let config = SimConfig { mode: AllocationMode::Auction, ..SimConfig::default() };
/// let mut sim = SimBuilder::new(config).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: Router = LaneRouter> {
    config: SimConfig,
    router: R,
}

impl SimBuilder<LaneRouter> {
    pub fn new(config: SimConfig) -> Self {
        Self { config, router: LaneRouter }
    }
}

impl<R: Router> SimBuilder<R> {
    /// Replace the routing algorithm.
    pub fn router<R2: Router>(self, router: R2) -> SimBuilder<R2> {
        SimBuilder { config: self.config, router }
    }

    /// Validate the config, lay out the grid and create every spot.
    pub fn build(self) -> SimResult<Simulation<R>> {
        self.config.validate()?;
        let topology = RoadTopology::new(self.config.width, self.config.height)?;
        let sim = Simulation::new(self.config, topology, self.router);
        debug!(
            "built {}x{} facility with {} spots",
            sim.topology.width(),
            sim.topology.height(),
            sim.spots.len(),
        );
        Ok(sim)
    }
}
