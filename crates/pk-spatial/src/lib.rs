//! `pk-spatial` — road grid topology and one-way routing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`topology`] | `RoadTopology` — lanes, intersections, entrances, exits, zoning |
//! | [`router`]   | `Router` trait, `LaneRouter` (one-way, one step per tick)   |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Grid layout
//!
//! ```text
//!   x:  0  1  2  3  4  5  6 …  w-1
//! y=0   ═══════════════════════════   intersection row (lateral moves allowed)
//!       ↓  P  P  ↑  P  P  ↓ …  ↑
//!       ↓  P  P  ↑  P  P  ↓ …  ↑      vertical lanes every 3rd column,
//!       ↓  P  P  ↑  P  P  ↓ …  ↑      P = parkable cell
//! y=h-1 ═══════════════════════════   intersection row
//! ```
//!
//! Entrances are `(0, 0)` and `(w-1, h-1)`; exits are `(w-1, 0)` and
//! `(0, h-1)`.

pub mod error;
pub mod router;
pub mod topology;


pub use error::{SpatialError, SpatialResult};
pub use router::{LaneRouter, Router};
pub use topology::RoadTopology;
