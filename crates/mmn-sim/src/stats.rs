//! Running totals, per-tick samples, and the derived end-of-run metrics.
//!
//! # Metric definitions
//!
//! All times are whole ticks (see `mmn_core::time`).
//!
//! | Metric               | Definition                                            |
//! |----------------------|-------------------------------------------------------|
//! | `avg_time_in_queue`  | `total_wait_time / customers_completed`               |
//! | `avg_time_in_system` | `total_sojourn_time / customers_completed`            |
//! | `avg_queue_length`   | mean of `queue_length_samples`                        |
//! | `avg_servers_busy`   | mean of `busy_server_count_samples`                   |
//!
//! Every ratio with a zero denominator reports `0.0`.  Samples are taken once
//! per tick, after the server pool has stepped.

use std::collections::BTreeMap;

use mmn_core::Tick;

use crate::Departure;

// ── TickSample ────────────────────────────────────────────────────────────────

/// What the system looked like at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSample {
    pub tick:                Tick,
    pub queue_length:        usize,
    pub busy_servers:        usize,
    pub customers_arrived:   u64,
    pub customers_completed: u64,
}

// ── Statistics ────────────────────────────────────────────────────────────────

/// Accumulator owned by the run loop and written by the arrival process and
/// the server pool.
///
/// `customers_completed <= customers_arrived` holds at every point; both
/// only ever increase.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    pub total_wait_time:     u64,
    pub total_sojourn_time:  u64,
    pub customers_completed: u64,
    pub customers_arrived:   u64,

    /// Queue length at the end of each tick, in tick order.
    pub queue_length_samples:      Vec<usize>,
    /// Busy-server count at the end of each tick, in tick order.
    pub busy_server_count_samples: Vec<usize>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the sample vectors for a run of `ticks` ticks.
    pub fn with_capacity(ticks: usize) -> Self {
        Self {
            queue_length_samples:      Vec::with_capacity(ticks),
            busy_server_count_samples: Vec::with_capacity(ticks),
            ..Self::default()
        }
    }

    #[inline]
    pub(crate) fn record_arrival(&mut self) {
        self.customers_arrived += 1;
    }

    #[inline]
    pub(crate) fn record_departure(&mut self, departure: &Departure) {
        self.total_wait_time += departure.wait();
        self.total_sojourn_time += departure.sojourn();
        self.customers_completed += 1;
        debug_assert!(self.customers_completed <= self.customers_arrived);
    }

    pub(crate) fn record_sample(&mut self, sample: &TickSample) {
        self.queue_length_samples.push(sample.queue_length);
        self.busy_server_count_samples.push(sample.busy_servers);
    }

    /// Number of ticks sampled so far.
    #[inline]
    pub fn ticks_sampled(&self) -> usize {
        self.queue_length_samples.len()
    }

    /// Customers that arrived but have not departed (waiting or in service).
    #[inline]
    pub fn customers_in_system(&self) -> u64 {
        self.customers_arrived - self.customers_completed
    }

    /// Derive the four reported metrics.  Pure: never mutates `self`, and
    /// repeated calls return identical values.
    pub fn metrics(&self) -> Metrics {
        Metrics {
            avg_time_in_queue:  ratio(self.total_wait_time as f64, self.customers_completed),
            avg_time_in_system: ratio(self.total_sojourn_time as f64, self.customers_completed),
            avg_queue_length:   mean(&self.queue_length_samples),
            avg_servers_busy:   mean(&self.busy_server_count_samples),
        }
    }
}

fn ratio(numerator: f64, denominator: u64) -> f64 {
    if denominator == 0 { 0.0 } else { numerator / denominator as f64 }
}

fn mean(samples: &[usize]) -> f64 {
    let total: u64 = samples.iter().map(|&s| s as u64).sum();
    ratio(total as f64, samples.len() as u64)
}

// ── Metrics ───────────────────────────────────────────────────────────────────

/// The derived-metrics record returned by `QueueSim::run`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    pub avg_time_in_queue:  f64,
    pub avg_time_in_system: f64,
    pub avg_queue_length:   f64,
    pub avg_servers_busy:   f64,
}

impl Metrics {
    pub const KEYS: [&'static str; 4] = [
        "avg_time_in_queue",
        "avg_time_in_system",
        "avg_queue_length",
        "avg_servers_busy",
    ];

    /// Values in [`KEYS`][Self::KEYS] order.
    pub fn values(&self) -> [f64; 4] {
        [
            self.avg_time_in_queue,
            self.avg_time_in_system,
            self.avg_queue_length,
            self.avg_servers_busy,
        ]
    }

    /// The metrics as a mapping with the fixed key set.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        Self::KEYS.into_iter().zip(self.values()).collect()
    }

    /// Look up a metric by its key.
    pub fn get(&self, key: &str) -> Option<f64> {
        Self::KEYS
            .iter()
            .position(|&k| k == key)
            .map(|i| self.values()[i])
    }
}
