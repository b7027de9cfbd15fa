//! Servers and the fixed-size pool that steps them.
//!
//! # Per-tick protocol
//!
//! Servers are stepped in ascending `ServerId` order.  Each server runs two
//! phases, in this order:
//!
//! 1. **Dispatch**: if idle and the queue is non-empty, pop the head
//!    customer, stamp its service start, draw a service duration, and set
//!    `completion_tick = now + duration`.
//! 2. **Completion**: if busy and `now >= completion_tick`, fold the
//!    customer into the statistics and go idle.
//!
//! A server freed in phase 2 does not dispatch again until the next tick.
//! A zero-tick service draw completes in the tick it was dispatched.

use mmn_core::{ServerId, ServiceTimeDist, SimRng, Tick};
use tracing::trace;

use crate::{Customer, CustomerQueue, Departure, SimObserver, Statistics};

// ── Server ────────────────────────────────────────────────────────────────────

/// A single server.  Either idle or holding exactly one customer.
#[derive(Debug, Clone)]
pub struct Server {
    id:      ServerId,
    episode: Option<Episode>,
}

/// The in-progress service of one customer.  `completion_tick` only exists
/// while a customer is held, so it cannot be read on an idle server.
#[derive(Debug, Clone)]
struct Episode {
    customer:        Customer,
    completion_tick: Tick,
}

impl Server {
    pub fn new(id: ServerId) -> Self {
        Self { id, episode: None }
    }

    #[inline]
    pub fn id(&self) -> ServerId {
        self.id
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.episode.is_some()
    }

    /// The customer in service, if any.
    pub fn current_customer(&self) -> Option<&Customer> {
        self.episode.as_ref().map(|e| &e.customer)
    }

    /// When the current service episode ends; `None` while idle.
    pub fn completion_tick(&self) -> Option<Tick> {
        self.episode.as_ref().map(|e| e.completion_tick)
    }

    /// Dispatch then completion for tick `now`.
    ///
    /// Returns the departure record if an episode closed this tick.
    pub fn step(
        &mut self,
        now:   Tick,
        queue: &mut CustomerQueue,
        dist:  &ServiceTimeDist,
        rng:   &mut SimRng,
    ) -> Option<Departure> {
        if self.episode.is_none() {
            if let Some(mut customer) = queue.pop_front() {
                customer.begin_service(now);
                let duration = dist.sample_ticks(rng);
                let completion_tick = now.offset(duration);
                trace!(server = self.id.0, customer = customer.id.0, tick = now.0, duration, "dispatch");
                self.episode = Some(Episode { customer, completion_tick });
            }
        }

        let done = matches!(&self.episode, Some(e) if now >= e.completion_tick);
        if !done {
            return None;
        }
        let episode = self.episode.take()?;
        let departure = episode.customer.depart(self.id, now);
        if let Some(d) = &departure {
            trace!(server = self.id.0, customer = d.customer.0, tick = now.0, wait = d.wait(), sojourn = d.sojourn(), "completion");
        }
        departure
    }
}

// ── ServerPool ────────────────────────────────────────────────────────────────

/// The fixed set of servers, created once and kept for the whole run.
#[derive(Debug, Clone)]
pub struct ServerPool {
    servers: Vec<Server>,
    dist:    ServiceTimeDist,
}

impl ServerPool {
    /// `count` idle servers with ids `0..count`.
    ///
    /// `SimBuilder::build` rejects server counts outside the `ServerId` range.
    pub fn new(count: u32, dist: ServiceTimeDist) -> Self {
        let servers = (0..count).map(|i| Server::new(ServerId(i))).collect();
        Self { servers, dist }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    pub fn get(&self, id: ServerId) -> Option<&Server> {
        self.servers.get(id.index())
    }

    pub fn busy_count(&self) -> usize {
        self.servers.iter().filter(|s| s.is_busy()).count()
    }

    /// Step every server for tick `now`, in ascending id order.
    ///
    /// Each departure is folded into `stats` and reported to `observer`
    /// before the next server steps.  Returns the number of departures.
    pub fn step<O: SimObserver>(
        &mut self,
        now:      Tick,
        queue:    &mut CustomerQueue,
        rng:      &mut SimRng,
        stats:    &mut Statistics,
        observer: &mut O,
    ) -> usize {
        let mut departures = 0;
        for server in &mut self.servers {
            if let Some(departure) = server.step(now, queue, &self.dist, rng) {
                stats.record_departure(&departure);
                observer.on_departure(&departure);
                departures += 1;
            }
        }
        departures
    }
}
