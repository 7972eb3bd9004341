//! garage — command-line driver for the `parksim` parking simulator.
//!
//! Builds a facility from CLI flags (optionally layered over a JSON config
//! file), runs it with the CSV observer and writes the final state as JSON.
//!
//! ```text
//! garage --mode auction --ticks 1000 --seed 7 --output-dir output/auction
//! RUST_LOG=debug garage --config garage.json
//! ```

mod flags;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use structopt::StructOpt;

use pk_core::Tick;
use pk_output::{CsvWriter, OutputWriter, SimOutputObserver};
use pk_sim::{Metrics, SimBuilder, SimObserver, Snapshot, SpotSnapshot, TickReport, VehicleSnapshot};

use flags::Flags;

const FINAL_STATE_FILE: &str = "final_state.json";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:        SimOutputObserver<W>,
    metrics_rows: usize,
    vehicle_rows: usize,
    awards:       usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, metrics_rows: 0, vehicle_rows: 0, awards: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        self.metrics_rows += 1;
        self.awards += report.awards.len();
        self.inner.on_tick_end(report);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        self.vehicle_rows += snapshot.vehicles.len();
        self.inner.on_snapshot(snapshot);
    }

    fn on_sim_end(&mut self, final_tick: Tick, metrics: &Metrics) {
        self.inner.on_sim_end(final_tick, metrics);
    }
}

// ── Final state ───────────────────────────────────────────────────────────────

/// Facility state after the run: every spot, every car still on the grid and
/// the last metrics.
#[derive(Serialize)]
struct FinalState<'a> {
    tick:    Tick,
    spots:   &'a [SpotSnapshot],
    cars:    &'a [VehicleSnapshot],
    metrics: &'a Metrics,
}

fn write_final_state(dir: &Path, snapshot: &Snapshot, metrics: &Metrics) -> Result<()> {
    let path = dir.join(FINAL_STATE_FILE);
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let state = FinalState {
        tick:    snapshot.tick,
        spots:   &snapshot.spots,
        cars:    &snapshot.vehicles,
        metrics,
    };
    serde_json::to_writer_pretty(BufWriter::new(file), &state)?;
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = Flags::from_args();
    let config = flags.sim_config()?;

    println!("=== garage — parksim parking facility ===");
    println!(
        "Grid: {}x{}  |  Mode: {}  |  Spawn rate: {}  |  Seed: {}",
        config.width, config.height, config.mode, config.spawn_rate, config.seed
    );
    println!();

    let mut sim = SimBuilder::new(config).build()?;
    info!("{} spots, entrances {:?}, exits {:?}", sim.spots.len(), sim.topology.entrances(), sim.topology.exits());

    let writer = CsvWriter::new(&flags.output_dir)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    let metrics = sim.metrics().clone();
    write_final_state(&flags.output_dir, &sim.snapshot(), &metrics)?;

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  tick_metrics.csv      : {} rows", obs.metrics_rows);
    println!("  vehicle_snapshots.csv : {} rows", obs.vehicle_rows);
    println!("  {FINAL_STATE_FILE}");
    println!();

    println!("{:<24} {:>12}", "Metric", "Value");
    println!("{}", "-".repeat(37));
    println!("{:<24} {:>11.1}%", "Occupancy", metrics.occupancy_rate);
    println!("{:<24} {:>12}", "Revenue", metrics.total_revenue);
    println!("{:<24} {:>12.2}", "Avg walking distance", metrics.avg_walking_distance);
    println!("{:<24} {:>12.2}", "Waiting time variance", metrics.waiting_time_variance);
    println!("{:<24} {:>12}", "Vehicles spawned", metrics.vehicle_count);
    println!("{:<24} {:>12}", "Allocations", obs.awards);
    println!("{:<24} {:>12}", "Parked", metrics.parked_count);
    println!("{:<24} {:>12}", "Departed", sim.counters.departed_count);
    println!("{:<24} {:>12}", "Forced removals", metrics.forced_removals);
    println!("{:<24} {:>12}", "Still on grid", metrics.live_vehicles);

    Ok(())
}
