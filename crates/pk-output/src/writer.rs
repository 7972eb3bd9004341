//! The `OutputWriter` trait implemented by backend writers.

use crate::{MetricsRow, OutputResult, VehicleSnapshotRow};

/// A sink for per-tick metrics and periodic vehicle snapshots.
///
/// Errors are returned to [`SimOutputObserver`][crate::SimOutputObserver],
/// which keeps the first one for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one metrics row.
    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()>;

    /// Write every vehicle of one snapshot.
    fn write_vehicles(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()>;

    /// Flush all underlying handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
