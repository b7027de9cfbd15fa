//! Deterministic simulation RNG and the service-time distribution.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded from `QueueConfig::seed`.  The
//! tick loop is single-threaded and consumes variates in a fixed order
//! (one arrival draw per tick, then one service draw per dispatch in
//! ascending server order), so a seed fully determines the sample path.
//!
//! Independent replications derive their generators with [`SimRng::child`]:
//!
//!   child_seed = parent.next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};

use crate::{MmnError, MmnResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── SimRng ────────────────────────────────────────────────────────────────────

/// The single random source of a simulation run.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, used to seed
    /// independent replications deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    /// For `f64` the value lies in `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// `true` when a fresh uniform `[0, 1)` draw falls below `p`.
    ///
    /// Always consumes exactly one variate, so the draw sequence does not
    /// depend on `p`.
    #[inline]
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.random::<f64>() < p
    }
}

// ── ServiceTimeDist ───────────────────────────────────────────────────────────

/// Exponential service times with a given mean, quantised to whole ticks.
#[derive(Clone, Copy, Debug)]
pub struct ServiceTimeDist {
    exp: Exp<f64>,
}

impl ServiceTimeDist {
    /// Exponential distribution with rate `1 / mean`.
    pub fn new(mean: f64) -> MmnResult<Self> {
        if !mean.is_finite() || mean <= 0.0 {
            return Err(MmnError::invalid(
                "mean_service_time",
                mean,
                "must be finite and strictly positive",
            ));
        }
        let exp = Exp::new(1.0 / mean)
            .map_err(|e| MmnError::Config(format!("exponential rate for mean {mean}: {e}")))?;
        Ok(Self { exp })
    }

    /// One continuous draw, in ticks.
    #[inline]
    pub fn sample(&self, rng: &mut SimRng) -> f64 {
        self.exp.sample(rng.inner())
    }

    /// One draw rounded to the nearest whole tick.  May be `0`, in which case
    /// the service episode ends in the tick it starts.
    #[inline]
    pub fn sample_ticks(&self, rng: &mut SimRng) -> u64 {
        // `as` saturates at u64::MAX for oversized draws.
        self.sample(rng).round() as u64
    }
}
