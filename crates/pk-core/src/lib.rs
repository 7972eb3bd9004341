//! `pk-core` — foundational types for the `parksim` parking simulator.
//!
//! This crate is a dependency of every other `pk-*` crate.  It has no `pk-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VehicleId`, `SpotId`                                 |
//! | [`grid`]        | `GridPos`, `Direction`, Manhattan distance            |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `SimRng` (the single seeded source for a run)         |
//! | [`spot`]        | `SpotType` and base prices                            |
//! | [`config`]      | `SimConfig`, `AllocationMode`                         |
//! | [`error`]       | `PkError`, `PkResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod spot;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AllocationMode, SimConfig};
pub use error::{PkError, PkResult};
pub use grid::{Direction, GridPos};
pub use ids::{SpotId, VehicleId};
pub use rng::SimRng;
pub use spot::SpotType;
pub use time::{SimClock, Tick};
