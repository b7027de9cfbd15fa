//! The `QueueSim` struct and its tick loop.

use mmn_core::{QueueConfig, SimClock, SimRng, Tick};
use tracing::debug;

use crate::{
    ArrivalProcess, CustomerQueue, Metrics, NoopObserver, ServerPool, SimObserver, Statistics,
    TickSample,
};

/// The M/M/n simulation runner.
///
/// `QueueSim` owns the queue and the statistics accumulator and passes them
/// explicitly to the arrival process and the server pool each tick:
///
/// 1. **Arrival**: one uniform draw; on success a customer joins the tail.
/// 2. **Servers**: each server, in ascending id order, dispatches from the
///    head of the queue if idle, then completes its episode if due.
/// 3. **Sample**: queue length and busy-server count are recorded.
/// 4. **Advance**: the clock moves to the next tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct QueueSim {
    pub(crate) config:   QueueConfig,
    pub(crate) clock:    SimClock,
    pub(crate) rng:      SimRng,
    pub(crate) queue:    CustomerQueue,
    pub(crate) arrivals: ArrivalProcess,
    pub(crate) servers:  ServerPool,
    pub(crate) stats:    Statistics,
    /// Set once `on_sim_end` has fired.
    pub(crate) ended:    bool,
}

impl QueueSim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance by exactly one tick.  No-op (returns `None`) once the clock
    /// has reached `max_ticks`.
    pub fn step(&mut self) -> Option<TickSample> {
        self.step_observed(&mut NoopObserver)
    }

    /// [`step`][Self::step] with observer callbacks.
    pub fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> Option<TickSample> {
        if self.clock.is_finished() {
            return None;
        }
        let now = self.clock.current_tick;

        observer.on_tick_start(now);
        let sample = self.process_tick(now, observer);
        observer.on_tick_end(now, &sample);

        self.clock.advance();
        Some(sample)
    }

    /// Step until the clock reaches `max_ticks`, then return the derived
    /// metrics.  Calling it again after completion performs no ticks and
    /// returns the same metrics.
    pub fn run(&mut self) -> Metrics {
        self.run_observed(&mut NoopObserver)
    }

    /// [`run`][Self::run] with observer callbacks.
    ///
    /// `on_sim_end` fires at most once per simulation: a repeated call on a
    /// finished sim returns the metrics without notifying the observer.
    pub fn run_observed<O: SimObserver>(&mut self, observer: &mut O) -> Metrics {
        while self.step_observed(observer).is_some() {}
        if !self.ended {
            self.ended = true;
            observer.on_sim_end(self.clock.current_tick, &self.stats);
        }

        let metrics = self.metrics();
        debug!(
            ticks     = self.clock.elapsed(),
            arrived   = self.stats.customers_arrived,
            completed = self.stats.customers_completed,
            avg_time_in_queue  = metrics.avg_time_in_queue,
            avg_time_in_system = metrics.avg_time_in_system,
            avg_queue_length   = metrics.avg_queue_length,
            avg_servers_busy   = metrics.avg_servers_busy,
            "run complete"
        );
        metrics
    }

    /// Run at most `n` ticks from the current position, stopping early at
    /// `max_ticks`.  Returns the number of ticks actually processed.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> u64 {
        let mut done = 0;
        while done < n && self.step_observed(observer).is_some() {
            done += 1;
        }
        done
    }

    /// Derived metrics for the current statistics.  Pure and idempotent.
    pub fn metrics(&self) -> Metrics {
        self.stats.metrics()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// The tick about to be processed.
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }

    pub fn queue(&self) -> &CustomerQueue {
        &self.queue
    }

    pub fn servers(&self) -> &ServerPool {
        &self.servers
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> TickSample {
        // ── Phase 1: arrival ──────────────────────────────────────────────
        self.arrivals.tick(now, &mut self.rng, &mut self.queue, &mut self.stats);

        // ── Phase 2: servers (dispatch, then completion) ──────────────────
        self.servers.step(now, &mut self.queue, &mut self.rng, &mut self.stats, observer);

        // ── Phase 3: sample ───────────────────────────────────────────────
        let sample = TickSample {
            tick:                now,
            queue_length:        self.queue.len(),
            busy_servers:        self.servers.busy_count(),
            customers_arrived:   self.stats.customers_arrived,
            customers_completed: self.stats.customers_completed,
        };
        self.stats.record_sample(&sample);
        sample
    }
}
