//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use pk_core::Tick;
use pk_sim::{Metrics, SimObserver, Snapshot, TickReport};

use crate::row::{MetricsRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes a metrics row every tick and the vehicle
/// table at every snapshot.
///
/// `SimObserver` methods have no return value, so writer errors are stored.
/// After `sim.run()` returns, check with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        let result = self.writer.write_metrics(&MetricsRow::from(&report.metrics));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        let rows: Vec<VehicleSnapshotRow> = snapshot
            .vehicles
            .iter()
            .map(|v| VehicleSnapshotRow::new(snapshot.tick.0, v))
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_vehicles(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _metrics: &Metrics) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
