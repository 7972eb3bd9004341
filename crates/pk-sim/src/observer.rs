//! Simulation observer trait for progress reporting and data collection.

use pk_core::Tick;

use crate::{Metrics, Snapshot, TickReport};

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — revenue printer
///
/// ```rust,ignore
/// struct RevenuePrinter;
///
/// impl SimObserver for RevenuePrinter {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         println!("{}: revenue {}", report.tick, report.metrics.total_revenue);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before spawning.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick with its metrics, snapshot and allocations.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called every `config.output_interval_ticks` ticks.
    fn on_snapshot(&mut self, _snapshot: &Snapshot) {}

    /// Called once after the final tick of [`run`][crate::Simulation::run].
    fn on_sim_end(&mut self, _final_tick: Tick, _metrics: &Metrics) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
