//! `pk-market` — who gets which spot, and at what price.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`bid`]         | `Bid` (one pool entry), `Award` (one resolved allocation)   |
//! | [`candidates`]  | nearest free spots by Manhattan distance                    |
//! | [`policy`]      | pure FCFS / Vickrey / priority resolution rules             |
//! | [`manager`]     | `AllocationManager` — per-tick pools and the resolution pass |
//! | [`error`]       | `MarketError`, `MarketResult<T>`                            |
//!
//! # Policies
//!
//! | Mode       | Candidates | Resolution                                              |
//! |------------|------------|---------------------------------------------------------|
//! | `FCFS`     | nearest 3  | immediate: one candidate at random, base price          |
//! | `AUCTION`  | nearest 3  | per spot: highest bid wins, pays second-highest bid     |
//! | `PRIORITY` | nearest 1  | per spot: highest priority, then earliest arrival       |
//!
//! The manager never mutates the registry.  It returns [`Award`]s and the
//! simulation applies them, so reservation failures surface in one place.

pub mod bid;
pub mod candidates;
pub mod error;
pub mod manager;
pub mod policy;


pub use bid::{Award, Bid};
pub use candidates::nearest_free;
pub use error::{MarketError, MarketResult};
pub use manager::AllocationManager;
