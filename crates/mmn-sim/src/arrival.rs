//! Bernoulli-per-tick arrival process.

use mmn_core::{CustomerId, SimRng, Tick};

use crate::{Customer, CustomerQueue, Statistics};

/// Admits at most one customer per tick.
///
/// Each tick consumes exactly one uniform variate; if it falls below
/// `probability` a customer stamped with the current tick joins the tail of
/// the queue.  Ids are handed out sequentially from 0.
#[derive(Debug, Clone)]
pub struct ArrivalProcess {
    probability: f64,
    next_id:     CustomerId,
}

impl ArrivalProcess {
    pub fn new(probability: f64) -> Self {
        Self { probability, next_id: CustomerId(0) }
    }

    /// Run the arrival draw for tick `now`.
    ///
    /// Returns the id of the admitted customer, if any.
    pub fn tick(
        &mut self,
        now:   Tick,
        rng:   &mut SimRng,
        queue: &mut CustomerQueue,
        stats: &mut Statistics,
    ) -> Option<CustomerId> {
        if !rng.bernoulli(self.probability) {
            return None;
        }
        let id = self.next_id;
        self.next_id = id.next();
        queue.push_back(Customer::arrive(id, now));
        stats.record_arrival();
        Some(id)
    }
}
