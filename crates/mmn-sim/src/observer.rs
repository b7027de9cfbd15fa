//! Simulation observer trait for progress reporting and data collection.

use mmn_core::Tick;

use crate::{Departure, Statistics, TickSample};

/// Callbacks invoked by [`QueueSim`][crate::QueueSim] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers only read; they cannot change
/// the sample path.
///
/// # Example: queue-length printer
///
/// ```rust,ignore
/// struct QueuePrinter { interval: u64 }
///
/// impl SimObserver for QueuePrinter {
///     fn on_tick_end(&mut self, tick: Tick, sample: &TickSample) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} waiting, {} busy", sample.queue_length, sample.busy_servers);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the arrival draw.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per completed service episode, in server order, after the
    /// departure has been folded into the statistics.
    fn on_departure(&mut self, _departure: &Departure) {}

    /// Called at the end of each tick with that tick's sample.
    fn on_tick_end(&mut self, _tick: Tick, _sample: &TickSample) {}

    /// Called by the first `run_observed` that brings the clock to its end
    /// tick. Later calls on the same simulation do not fire it again.
    /// Single-tick `step_observed` calls never fire it.
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &Statistics) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
