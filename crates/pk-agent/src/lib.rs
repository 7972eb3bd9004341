//! `pk-agent` — parking spot arena and vehicle storage for `parksim`.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`spot`]       | `ParkingSpot` — one parkable cell and its reservation      |
//! | [`registry`]   | `SpotRegistry` — spot arena indexed by `SpotId` and cell   |
//! | [`vehicle`]    | `Vehicle`, `VehicleState`, `VehicleAttrs`, `Recovery`      |
//! | [`store`]      | `VehicleStore` — live vehicles, two-phase removal          |
//! | [`error`]      | `AgentError`, `AgentResult<T>`                             |
//!
//! # Ownership
//!
//! Vehicles and spots never hold references to each other.  A vehicle's
//! target is a `SpotId` into the registry; a spot's holder is a `VehicleId`
//! into the store.  Both sides are plain indices, so the simulation can
//! mutate either arena without borrow conflicts.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types. |

pub mod error;
pub mod registry;
pub mod spot;
pub mod store;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use error::{AgentError, AgentResult};
pub use pk_core::SpotType;
pub use registry::SpotRegistry;
pub use spot::ParkingSpot;
pub use store::VehicleStore;
pub use vehicle::{Recovery, Vehicle, VehicleAttrs, VehicleState};
