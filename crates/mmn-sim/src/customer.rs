//! Customer lifecycle: created on arrival, stamped once on dispatch, folded
//! into statistics and dropped on departure.

use mmn_core::{CustomerId, ServerId, Tick};

/// One customer moving through the system.
///
/// `service_start_tick` is `None` while the customer waits in the queue and
/// is set exactly once, by the server that dequeues it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    pub id:                 CustomerId,
    pub arrival_tick:       Tick,
    pub service_start_tick: Option<Tick>,
}

impl Customer {
    /// A waiting customer that arrived at `tick`.
    #[inline]
    pub fn arrive(id: CustomerId, tick: Tick) -> Self {
        Self { id, arrival_tick: tick, service_start_tick: None }
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.service_start_tick.is_none()
    }

    /// Record the dispatch tick.
    ///
    /// # Panics
    /// Panics in debug mode if service already started or `tick` precedes
    /// the arrival.
    #[inline]
    pub(crate) fn begin_service(&mut self, tick: Tick) {
        debug_assert!(self.service_start_tick.is_none(), "{} dispatched twice", self.id);
        debug_assert!(tick >= self.arrival_tick);
        self.service_start_tick = Some(tick);
    }

    /// Close the service episode at `tick`, consuming the customer.
    ///
    /// Returns `None` if the customer was never dispatched.
    pub(crate) fn depart(self, server: ServerId, tick: Tick) -> Option<Departure> {
        let service_start_tick = self.service_start_tick?;
        Some(Departure {
            customer:     self.id,
            server,
            arrival_tick: self.arrival_tick,
            service_start_tick,
            departure_tick: tick,
        })
    }
}

/// The record left behind by a completed service episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Departure {
    pub customer:           CustomerId,
    pub server:             ServerId,
    pub arrival_tick:       Tick,
    pub service_start_tick: Tick,
    pub departure_tick:     Tick,
}

impl Departure {
    /// Ticks spent in the queue before service began.
    #[inline]
    pub fn wait(&self) -> u64 {
        self.service_start_tick - self.arrival_tick
    }

    /// Ticks from arrival to departure.
    #[inline]
    pub fn sojourn(&self) -> u64 {
        self.departure_tick - self.arrival_tick
    }

    /// Ticks the server spent on this customer.
    #[inline]
    pub fn service(&self) -> u64 {
        self.departure_tick - self.service_start_tick
    }
}
