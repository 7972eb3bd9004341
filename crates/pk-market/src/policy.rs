//! Resolution rules, free of any pool or registry state.
//!
//! Each function sees the bids for one spot, already stripped of vehicles
//! that won elsewhere this pass, in submission order.

use std::cmp::Reverse;

use pk_core::{SimRng, SpotId, VehicleId};

use crate::Bid;

/// FCFS: one of `candidates` uniformly at random.
pub fn choose_fcfs(candidates: &[SpotId], rng: &mut SimRng) -> Option<SpotId> {
    rng.choose(candidates).copied()
}

/// Vickrey sealed-bid second-price auction.
///
/// The highest bid wins (earlier submission on equal amounts) and pays the
/// second-highest bid, or `base_price` if it was the only bidder.
pub fn resolve_auction(bids: &[Bid], base_price: u32) -> Option<(VehicleId, u32)> {
    let mut ranked: Vec<&Bid> = bids.iter().collect();
    // `sort_by` is stable, so equal amounts keep submission order.
    ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
    let winner = ranked.first()?;
    let price = ranked.get(1).map_or(base_price, |second| second.amount);
    Some((winner.vehicle, price))
}

/// Priority queue: highest priority, then earliest arrival, then earliest
/// submission.
pub fn resolve_priority(bids: &[Bid]) -> Option<VehicleId> {
    // `min_by_key` returns the first of equal minima.
    bids.iter()
        .min_by_key(|b| (Reverse(b.priority), b.arrival))
        .map(|b| b.vehicle)
}
