//! `pk-mobility` — who stands where, and one step per tick.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`store`]   | `OccupancyStore` — `GridPos → VehicleId` index                  |
//! | [`outcome`] | `StepOutcome` — what a movement attempt did                     |
//! | [`engine`]  | `MobilityEngine<R>` — asks the router, checks blocking, moves   |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                            |
//!
//! # Movement model
//!
//! Every cell holds at most one vehicle.  A vehicle asks its
//! [`Router`][pk_spatial::Router] for candidate next cells and takes the
//! first one that is not blocked:
//!
//! - a cell held by another vehicle is blocked;
//! - a parkable cell is blocked unless it is the mover's own reserved spot.
//!
//! If every candidate is blocked the vehicle stays where it is and the
//! caller counts the tick as waiting.

pub mod engine;
pub mod error;
pub mod outcome;
pub mod store;


pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
pub use outcome::StepOutcome;
pub use store::OccupancyStore;
