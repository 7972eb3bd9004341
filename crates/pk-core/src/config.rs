//! Run configuration and allocation policy selection.

use std::fmt;
use std::str::FromStr;

use crate::{PkError, PkResult};

/// Smallest grid side that admits one lane column and one spot column.
pub const MIN_GRID_DIM: u32 = 3;

/// Largest grid side accepted; keeps coordinates comfortably inside `i32`.
pub const MAX_GRID_DIM: u32 = 4_096;

// ── AllocationMode ────────────────────────────────────────────────────────────

/// The spot allocation policy, fixed for the lifetime of a run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum AllocationMode {
    /// Nearest-3 spots, pick one at random, pay base price.
    #[default]
    Fcfs,
    /// Vickrey sealed-bid second-price auction.
    Auction,
    /// Highest priority score wins, earlier arrival breaks ties.
    Priority,
}

impl AllocationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AllocationMode::Fcfs     => "FCFS",
            AllocationMode::Auction  => "AUCTION",
            AllocationMode::Priority => "PRIORITY",
        }
    }
}

impl fmt::Display for AllocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AllocationMode {
    type Err = PkError;

    /// Case-insensitive; anything unrecognised is a configuration error.
    fn from_str(s: &str) -> PkResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS"     => Ok(AllocationMode::Fcfs),
            "AUCTION"  => Ok(AllocationMode::Auction),
            "PRIORITY" => Ok(AllocationMode::Priority),
            _          => Err(PkError::UnknownMode(s.to_owned())),
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built from CLI flags or loaded from a JSON file by the driver
/// and passed to `SimBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Grid width in cells.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// Probability in [0, 1] that a spawn is attempted each tick.
    pub spawn_rate: f64,

    /// Allocation policy.
    pub mode: AllocationMode,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Ticks simulated by `Simulation::run`.
    pub total_ticks: u64,

    /// Emit a snapshot to observers every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width:                 20,
            height:                20,
            spawn_rate:            0.2,
            mode:                  AllocationMode::Fcfs,
            seed:                  42,
            total_ticks:           500,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> PkResult<()> {
        for (name, v) in [("width", self.width), ("height", self.height)] {
            if !(MIN_GRID_DIM..=MAX_GRID_DIM).contains(&v) {
                return Err(PkError::Config(format!(
                    "{name} must be in {MIN_GRID_DIM}..={MAX_GRID_DIM}, got {v}"
                )));
            }
        }
        if !self.spawn_rate.is_finite() || !(0.0..=1.0).contains(&self.spawn_rate) {
            return Err(PkError::Config(format!(
                "spawn_rate must be in [0, 1], got {}",
                self.spawn_rate
            )));
        }
        Ok(())
    }
}
