//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `tick_samples.csv` — the queue-length and busy-server time series
//! - `departures.csv`   — one row per completed customer
//! - `metrics.csv`      — a single row of end-of-run metrics

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DepartureRow, MetricsRow, OutputResult, TickSampleRow};

pub const TICK_SAMPLES_FILE: &str = "tick_samples.csv";
pub const DEPARTURES_FILE: &str = "departures.csv";
pub const METRICS_FILE: &str = "metrics.csv";

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    samples:    Writer<File>,
    departures: Writer<File>,
    metrics:    Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files, and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut samples = Writer::from_path(dir.join(TICK_SAMPLES_FILE))?;
        samples.write_record([
            "tick",
            "queue_length",
            "busy_servers",
            "customers_arrived",
            "customers_completed",
        ])?;

        let mut departures = Writer::from_path(dir.join(DEPARTURES_FILE))?;
        departures.write_record([
            "customer_id",
            "server_id",
            "arrival_tick",
            "service_start_tick",
            "departure_tick",
        ])?;

        let mut metrics = Writer::from_path(dir.join(METRICS_FILE))?;
        metrics.write_record([
            "ticks",
            "customers_arrived",
            "customers_completed",
            "avg_time_in_queue",
            "avg_time_in_system",
            "avg_queue_length",
            "avg_servers_busy",
        ])?;

        Ok(Self {
            samples,
            departures,
            metrics,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_sample(&mut self, row: &TickSampleRow) -> OutputResult<()> {
        self.samples.write_record(&[
            row.tick.to_string(),
            row.queue_length.to_string(),
            row.busy_servers.to_string(),
            row.customers_arrived.to_string(),
            row.customers_completed.to_string(),
        ])?;
        Ok(())
    }

    fn write_departure(&mut self, row: &DepartureRow) -> OutputResult<()> {
        self.departures.write_record(&[
            row.customer_id.to_string(),
            row.server_id.to_string(),
            row.arrival_tick.to_string(),
            row.service_start_tick.to_string(),
            row.departure_tick.to_string(),
        ])?;
        Ok(())
    }

    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()> {
        let m = &row.metrics;
        self.metrics.write_record(&[
            row.ticks.to_string(),
            row.customers_arrived.to_string(),
            row.customers_completed.to_string(),
            m.avg_time_in_queue.to_string(),
            m.avg_time_in_system.to_string(),
            m.avg_queue_length.to_string(),
            m.avg_servers_busy.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.samples.flush()?;
        self.departures.flush()?;
        self.metrics.flush()?;
        Ok(())
    }
}
