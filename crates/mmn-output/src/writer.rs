//! The `OutputWriter` trait implemented by backend writers.

use crate::{DepartureRow, MetricsRow, OutputResult, TickSampleRow};

/// Sink for the data a run produces.
///
/// Errors surface through [`SimOutputObserver::take_error`] when the writer
/// is driven by the observer.
///
/// [`SimOutputObserver::take_error`]: crate::SimOutputObserver::take_error
pub trait OutputWriter {
    /// Write one per-tick sample.
    fn write_tick_sample(&mut self, row: &TickSampleRow) -> OutputResult<()>;

    /// Write one departure record.
    fn write_departure(&mut self, row: &DepartureRow) -> OutputResult<()>;

    /// Write the end-of-run metrics.
    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
