//! Tests for pk-output.

#[cfg(test)]
mod csv_tests {
    use pk_agent::VehicleState;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, METRICS_FILE, VEHICLES_FILE};
    use crate::row::{MetricsRow, VehicleSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn metrics_row(tick: u64) -> MetricsRow {
        MetricsRow {
            tick,
            occupancy_rate:        12.5,
            total_revenue:         tick * 5,
            avg_walking_distance:  7.25,
            waiting_time_variance: 0.0,
            live_vehicles:         3,
            parked_count:          2,
            forced_removals:       0,
        }
    }

    fn vehicle_row(id: u32, tick: u64) -> VehicleSnapshotRow {
        VehicleSnapshotRow {
            tick,
            vehicle_id: id,
            x:          id as i32,
            y:          4,
            state:      VehicleState::Moving,
            budget:     30,
            priority:   2,
        }
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir.path().join(METRICS_FILE)), [
            "tick",
            "occupancy_rate",
            "total_revenue",
            "avg_walking_distance",
            "waiting_time_variance",
            "live_vehicles",
            "parked_count",
            "forced_removals",
        ]);
        assert_eq!(headers(&dir.path().join(VEHICLES_FILE)), [
            "tick", "vehicle_id", "x", "y", "state", "budget", "priority",
        ]);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("run").join("out");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(METRICS_FILE).exists());
    }

    #[test]
    fn metrics_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_metrics(&metrics_row(0)).unwrap();
        w.write_metrics(&metrics_row(4)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(METRICS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "4");
        assert_eq!(&rows[1][1], "12.5000");
        assert_eq!(&rows[1][2], "20");
        assert_eq!(&rows[1][3], "7.2500");
    }

    #[test]
    fn vehicle_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_vehicles(&[vehicle_row(0, 5), vehicle_row(3, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(VEHICLES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][1], "3");
        assert_eq!(&rows[1][2], "3");
        assert_eq!(&rows[1][4], "MOVING");
        assert_eq!(&rows[1][6], "2");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use pk_core::{AllocationMode, SimConfig};
    use pk_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, METRICS_FILE, VEHICLES_FILE};
    use crate::row::{MetricsRow, VehicleSnapshotRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, SimOutputObserver};

    fn config(total_ticks: u64, interval: u64) -> SimConfig {
        SimConfig {
            spawn_rate: 0.5,
            mode: AllocationMode::Fcfs,
            seed: 7,
            total_ticks,
            output_interval_ticks: interval,
            ..SimConfig::default()
        }
    }

    fn read_rows(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn one_metrics_row_per_tick() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = SimBuilder::new(config(25, 5)).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let rows = read_rows(&dir, METRICS_FILE);
        assert_eq!(rows.len(), 25);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row[0].parse::<usize>().unwrap(), i);
        }
        assert_eq!(
            rows[24][2].parse::<u64>().unwrap(),
            sim.metrics().total_revenue,
        );
    }

    #[test]
    fn vehicle_rows_only_at_snapshot_ticks() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = SimBuilder::new(config(25, 5)).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();

        let rows = read_rows(&dir, VEHICLES_FILE);
        assert!(!rows.is_empty());
        for row in &rows {
            assert_eq!(row[0].parse::<u64>().unwrap() % 5, 0);
        }
    }

    struct FailingWriter {
        calls: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_metrics(&mut self, _row: &MetricsRow) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("disk full #{}", self.calls))))
        }

        fn write_vehicles(&mut self, _rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = SimBuilder::new(config(3, 0)).build().unwrap();
        let mut obs = SimOutputObserver::new(FailingWriter { calls: 0 });
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("disk full #1"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 3);
    }
}
