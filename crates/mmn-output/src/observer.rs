//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use mmn_core::Tick;
use mmn_sim::{Departure, SimObserver, Statistics, TickSample};
use tracing::warn;

use crate::row::{DepartureRow, MetricsRow, TickSampleRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes tick samples, departures, and the final
/// metrics to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run_observed()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    departures: bool,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer` that records everything.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            departures: true,
            last_error: None,
        }
    }

    /// Skip per-customer departure rows (tick samples and metrics are still
    /// written).
    pub fn without_departures(mut self) -> Self {
        self.departures = false;
        self
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_departure(&mut self, departure: &Departure) {
        if !self.departures {
            return;
        }
        let result = self.writer.write_departure(&DepartureRow::from(departure));
        self.store_err(result);
    }

    fn on_tick_end(&mut self, _tick: Tick, sample: &TickSample) {
        let result = self.writer.write_tick_sample(&TickSampleRow::from(sample));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &Statistics) {
        let row = MetricsRow {
            ticks:               final_tick.0,
            customers_arrived:   stats.customers_arrived,
            customers_completed: stats.customers_completed,
            metrics:             stats.metrics(),
        };
        let result = self.writer.write_metrics(&row);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
