//! `mmn-output` — simulation output writers for the mmn queue simulator.
//!
//! The CSV backend writes the two time series a plotting tool needs (queue
//! length and busy servers per tick), a per-customer departure log, and the
//! end-of-run metrics:
//!
//! | File               | One row per        |
//! |--------------------|--------------------|
//! | `tick_samples.csv` | tick               |
//! | `departures.csv`   | completed customer |
//! | `metrics.csv`      | run                |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `mmn_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mmn_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_observed(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DepartureRow, MetricsRow, TickSampleRow};
pub use writer::OutputWriter;
