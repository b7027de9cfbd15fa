//! Plain data row types written by output backends.

use mmn_sim::{Departure, Metrics, TickSample};

/// One line of the per-tick time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSampleRow {
    pub tick:                u64,
    pub queue_length:        u64,
    pub busy_servers:        u64,
    pub customers_arrived:   u64,
    pub customers_completed: u64,
}

impl From<&TickSample> for TickSampleRow {
    fn from(s: &TickSample) -> Self {
        Self {
            tick:                s.tick.0,
            queue_length:        s.queue_length as u64,
            busy_servers:        s.busy_servers as u64,
            customers_arrived:   s.customers_arrived,
            customers_completed: s.customers_completed,
        }
    }
}

/// One completed service episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartureRow {
    pub customer_id:        u64,
    pub server_id:          u32,
    pub arrival_tick:       u64,
    pub service_start_tick: u64,
    pub departure_tick:     u64,
}

impl From<&Departure> for DepartureRow {
    fn from(d: &Departure) -> Self {
        Self {
            customer_id:        d.customer.0,
            server_id:          d.server.0,
            arrival_tick:       d.arrival_tick.0,
            service_start_tick: d.service_start_tick.0,
            departure_tick:     d.departure_tick.0,
        }
    }
}

/// End-of-run summary: the derived metrics plus the raw counts behind them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsRow {
    pub ticks:               u64,
    pub customers_arrived:   u64,
    pub customers_completed: u64,
    pub metrics:             Metrics,
}
