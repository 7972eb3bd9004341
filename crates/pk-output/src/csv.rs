//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_metrics.csv`
//! - `vehicle_snapshots.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{MetricsRow, OutputResult, VehicleSnapshotRow};

pub const METRICS_FILE: &str = "tick_metrics.csv";
pub const VEHICLES_FILE: &str = "vehicle_snapshots.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    metrics:  Writer<File>,
    vehicles: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut metrics = Writer::from_path(dir.join(METRICS_FILE))?;
        metrics.write_record([
            "tick",
            "occupancy_rate",
            "total_revenue",
            "avg_walking_distance",
            "waiting_time_variance",
            "live_vehicles",
            "parked_count",
            "forced_removals",
        ])?;

        let mut vehicles = Writer::from_path(dir.join(VEHICLES_FILE))?;
        vehicles.write_record(["tick", "vehicle_id", "x", "y", "state", "budget", "priority"])?;

        Ok(Self { metrics, vehicles, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()> {
        self.metrics.write_record(&[
            row.tick.to_string(),
            format!("{:.4}", row.occupancy_rate),
            row.total_revenue.to_string(),
            format!("{:.4}", row.avg_walking_distance),
            format!("{:.4}", row.waiting_time_variance),
            row.live_vehicles.to_string(),
            row.parked_count.to_string(),
            row.forced_removals.to_string(),
        ])?;
        Ok(())
    }

    fn write_vehicles(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.vehicles.write_record(&[
                row.tick.to_string(),
                row.vehicle_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.state.as_str().to_owned(),
                row.budget.to_string(),
                row.priority.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.metrics.flush()?;
        self.vehicles.flush()?;
        Ok(())
    }
}
