//! Independent replications of one configuration.
//!
//! Each replication is a fresh `QueueSim` with its own child generator drawn
//! from `SimRng::new(config.seed)` in replication order, so the results do
//! not depend on whether they run sequentially or on Rayon's pool.

use mmn_core::{QueueConfig, SimRng};
use tracing::debug;

use crate::{Metrics, SimBuilder, SimResult};

/// Metrics of every replication plus their across-replication means.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplicationSummary {
    /// One entry per replication, in replication order.
    pub runs: Vec<Metrics>,
    /// Component-wise mean of `runs`; all zero when `runs` is empty.
    pub mean: Metrics,
}

impl ReplicationSummary {
    pub fn from_runs(runs: Vec<Metrics>) -> Self {
        let n = runs.len();
        let mut sums = [0.0f64; 4];
        for m in &runs {
            for (acc, v) in sums.iter_mut().zip(m.values()) {
                *acc += v;
            }
        }
        let avg = |i: usize| if n == 0 { 0.0 } else { sums[i] / n as f64 };
        let mean = Metrics {
            avg_time_in_queue:  avg(0),
            avg_time_in_system: avg(1),
            avg_queue_length:   avg(2),
            avg_servers_busy:   avg(3),
        };
        Self { runs, mean }
    }

    /// Sample standard deviation of one metric across replications, by key.
    /// `None` for an unknown key or fewer than two runs.
    pub fn std_dev(&self, key: &str) -> Option<f64> {
        if self.runs.len() < 2 {
            return None;
        }
        let mean = self.mean.get(key)?;
        let ss: f64 = self
            .runs
            .iter()
            .filter_map(|m| m.get(key))
            .map(|v| (v - mean) * (v - mean))
            .sum();
        Some((ss / (self.runs.len() - 1) as f64).sqrt())
    }
}

/// Run `replications` independent copies of `config` to completion.
///
/// The configuration is validated once up front; an invalid config fails
/// before any run starts.
pub fn run_replications(config: &QueueConfig, replications: usize) -> SimResult<ReplicationSummary> {
    config.validate()?;

    let mut root = SimRng::new(config.seed);
    let rngs: Vec<SimRng> = (0..replications as u64).map(|i| root.child(i)).collect();

    let runs = run_all(config, rngs)?;
    debug!(replications, "replications complete");
    Ok(ReplicationSummary::from_runs(runs))
}

#[cfg(not(feature = "parallel"))]
fn run_all(config: &QueueConfig, rngs: Vec<SimRng>) -> SimResult<Vec<Metrics>> {
    rngs.into_iter()
        .map(|rng| -> SimResult<Metrics> {
            Ok(SimBuilder::new(config.clone()).rng(rng).build()?.run())
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn run_all(config: &QueueConfig, rngs: Vec<SimRng>) -> SimResult<Vec<Metrics>> {
    use rayon::prelude::*;

    rngs.into_par_iter()
        .map(|rng| -> SimResult<Metrics> {
            Ok(SimBuilder::new(config.clone()).rng(rng).build()?.run())
        })
        .collect()
}
