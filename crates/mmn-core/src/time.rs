//! Simulation time model and run configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing integer `Tick`.  Every quantity the
//! simulator reports (wait, sojourn, completion time) is measured in whole
//! ticks; service durations drawn from the exponential distribution are
//! rounded to the nearest tick before they are added to the clock.  There is
//! no second, continuous clock, so "elapsed time" and "number of ticks
//! processed" are the same number.

use std::fmt;

use crate::{MmnError, MmnResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`, saturating at `u64::MAX`.
    ///
    /// Saturation matters for service durations: a huge mean service time can
    /// produce a draw that would otherwise overflow.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0.saturating_add(n))
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.since(rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The tick counter plus the stopping condition.
///
/// Ticks `0, 1, …, end_tick - 1` are processed exactly once each; the clock
/// never moves past `end_tick`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The tick about to be processed (or `end_tick` once finished).
    pub current_tick: Tick,
    /// Exclusive upper bound.
    pub end_tick: Tick,
}

impl SimClock {
    /// A clock at tick 0 that stops after `max_ticks` ticks.
    pub fn new(max_ticks: u64) -> Self {
        Self {
            current_tick: Tick::ZERO,
            end_tick:     Tick(max_ticks),
        }
    }

    /// `true` once `current_tick >= end_tick`.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current_tick >= self.end_tick
    }

    /// Advance the clock by one tick.  No-op when already finished.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_finished() {
            self.current_tick = Tick(self.current_tick.0 + 1);
        }
    }

    /// Number of ticks processed so far.
    #[inline]
    pub fn elapsed(&self) -> u64 {
        self.current_tick.0
    }

    /// Ticks left before the stopping condition holds.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.end_tick.0.saturating_sub(self.current_tick.0)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.current_tick, self.end_tick)
    }
}

// ── QueueConfig ───────────────────────────────────────────────────────────────

/// Construction inputs for one M/M/n run.
///
/// Typically built by the driver from CLI flags or a JSON file and handed to
/// `mmn_sim::SimBuilder`, which calls [`validate`][Self::validate].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueConfig {
    /// Probability that exactly one customer arrives in a tick.  A
    /// Bernoulli-per-tick stand-in for a Poisson arrival stream.  `[0, 1]`.
    pub arrival_probability: f64,

    /// Mean of the exponential service-time distribution, in ticks.  `> 0`.
    pub mean_service_time: f64,

    /// Number of parallel servers.  `>= 1`.
    pub server_count: usize,

    /// Total ticks to simulate.  `0` is a valid, empty run.
    pub max_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: u64,
}

impl QueueConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.max_ticks)
    }

    /// Offered load per server, `ρ = λ·E[S] / n`.  Values at or above 1 mean
    /// the queue grows without bound over a long run.
    pub fn offered_load(&self) -> f64 {
        self.arrival_probability * self.mean_service_time / self.server_count as f64
    }

    /// Reject parameter values that would fault mid-run.
    pub fn validate(&self) -> MmnResult<()> {
        let p = self.arrival_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(MmnError::invalid(
                "arrival_probability",
                p,
                "must be a probability in [0, 1]",
            ));
        }

        let mean = self.mean_service_time;
        if !mean.is_finite() || mean <= 0.0 {
            return Err(MmnError::invalid(
                "mean_service_time",
                mean,
                "must be finite and strictly positive",
            ));
        }

        if self.server_count == 0 {
            return Err(MmnError::invalid(
                "server_count",
                self.server_count,
                "at least one server is required",
            ));
        }

        Ok(())
    }
}
