//! Fluent builder for constructing a [`QueueSim`].

use mmn_core::{QueueConfig, ServiceTimeDist, SimRng};
use tracing::debug;

use crate::{ArrivalProcess, CustomerQueue, QueueSim, ServerPool, SimError, SimResult, Statistics};

/// Fluent builder for [`QueueSim`].
///
/// # Required inputs
///
/// - [`QueueConfig`]: arrival probability, mean service time, server count,
///   max ticks, seed.
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                          |
/// |--------------|----------------------------------|
/// | `.rng(r)`    | `SimRng::new(config.seed)`       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config).build()?;
/// let metrics = sim.run();
/// ```
pub struct SimBuilder {
    config: QueueConfig,
    rng:    Option<SimRng>,
}

impl SimBuilder {
    pub fn new(config: QueueConfig) -> Self {
        Self { config, rng: None }
    }

    /// Use `rng` instead of a generator seeded from `config.seed`.
    ///
    /// Replications use this to hand each run a child generator.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration and return a ready-to-run [`QueueSim`] at
    /// tick 0 with an empty queue and all servers idle.
    pub fn build(self) -> SimResult<QueueSim> {
        self.config.validate()?;

        let server_count = u32::try_from(self.config.server_count).map_err(|_| {
            SimError::Config(format!(
                "server_count {} exceeds the server id range",
                self.config.server_count
            ))
        })?;
        let dist = ServiceTimeDist::new(self.config.mean_service_time)?;

        // Reserve up to 1 Mi samples; longer runs grow the vectors as usual.
        let capacity = usize::try_from(self.config.max_ticks).unwrap_or(usize::MAX).min(1 << 20);

        debug!(
            arrival_probability = self.config.arrival_probability,
            mean_service_time   = self.config.mean_service_time,
            server_count        = self.config.server_count,
            max_ticks           = self.config.max_ticks,
            seed                = self.config.seed,
            offered_load        = self.config.offered_load(),
            "simulation configured"
        );

        Ok(QueueSim {
            clock:    self.config.make_clock(),
            rng:      self.rng.unwrap_or_else(|| SimRng::new(self.config.seed)),
            queue:    CustomerQueue::new(),
            arrivals: ArrivalProcess::new(self.config.arrival_probability),
            servers:  ServerPool::new(server_count, dist),
            stats:    Statistics::with_capacity(capacity),
            ended:    false,
            config:   self.config,
        })
    }
}
