//! `pk-sim` — tick loop orchestrator for the `parksim` parking simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Spawn     — maybe one new SEARCHING vehicle at a random entrance.
//!   ② Activate  — shuffle [spots…, vehicles…], then append the manager:
//!                   Spot          → passive
//!                   Vehicle       → stuck check, then SEARCHING / MOVING /
//!                                   PARKED / LEAVING logic
//!                   Manager       → resolve AUCTION / PRIORITY pools
//!   ③ Compact   — drop vehicles marked REMOVED.
//!   ④ Report    — Metrics + Snapshot → observers.
//! ```
//!
//! All randomness comes from one `SimRng` seeded from `config.seed`, so a
//! seed reproduces a run tick for tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pk_core::SimConfig;
//! use pk_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("revenue: {}", sim.metrics().total_revenue);
//! ```

pub mod agent;
pub mod builder;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use agent::Agent;
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use metrics::{Counters, Metrics};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Simulation, TickReport};
pub use snapshot::{Snapshot, SpotSnapshot, VehicleSnapshot};
