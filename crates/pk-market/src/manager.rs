//! The `AllocationManager` — per-tick bid pools and the resolution pass.

use std::collections::{BTreeMap, BTreeSet};

use pk_agent::{SpotRegistry, Vehicle};
use pk_core::{AllocationMode, SimRng, SpotId, VehicleId};

use crate::policy::{choose_fcfs, resolve_auction, resolve_priority};
use crate::{nearest_free, Award, Bid, MarketError, MarketResult};

/// Candidates considered by FCFS and AUCTION.
pub const NEAREST_K: usize = 3;

/// Candidates considered by PRIORITY.
pub const PRIORITY_K: usize = 1;

/// Collects requests during a tick and resolves them in one pass.
///
/// Pools are keyed by spot and iterated in ascending `SpotId` order; within a
/// pool, bids stay in submission order.
#[derive(Debug, Default)]
pub struct AllocationManager {
    mode:  AllocationMode,
    pools: BTreeMap<SpotId, Vec<Bid>>,
}

impl AllocationManager {
    pub fn new(mode: AllocationMode) -> Self {
        Self { mode, pools: BTreeMap::new() }
    }

    #[inline]
    pub fn mode(&self) -> AllocationMode {
        self.mode
    }

    /// Add `bid` to the pool of `spot`.
    pub fn submit(&mut self, spot: SpotId, bid: Bid) {
        self.pools.entry(spot).or_default().push(bid);
    }

    /// Bids currently waiting for resolution, across all pools.
    pub fn pending(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    /// The pool for `spot`, empty if nobody asked for it.
    pub fn pool(&self, spot: SpotId) -> &[Bid] {
        self.pools.get(&spot).map_or(&[], Vec::as_slice)
    }

    pub fn clear(&mut self) {
        self.pools.clear();
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// FCFS allocation for a searching vehicle, decided on the spot.
    ///
    /// Returns `None` when no spot is free.  The caller applies the award.
    pub fn allocate_fcfs(
        &self,
        registry: &SpotRegistry,
        vehicle:  &Vehicle,
        rng:      &mut SimRng,
    ) -> MarketResult<Option<Award>> {
        if self.mode != AllocationMode::Fcfs {
            return Err(MarketError::WrongMode { operation: "immediate allocation", mode: self.mode });
        }
        let candidates = nearest_free(registry, vehicle.pos, NEAREST_K);
        let Some(spot) = choose_fcfs(&candidates, rng) else {
            return Ok(None);
        };
        let price = registry.lookup(spot).ok_or(MarketError::UnknownSpot(spot))?.base_price;
        Ok(Some(Award { spot, vehicle: vehicle.id, price }))
    }

    /// Queue a searching vehicle's bids (AUCTION) or request (PRIORITY).
    ///
    /// An auction bidder offers its whole budget on each nearest candidate
    /// it can afford above base price.  Returns the number of entries
    /// submitted.
    pub fn request(&mut self, registry: &SpotRegistry, vehicle: &Vehicle) -> MarketResult<usize> {
        let k = match self.mode {
            AllocationMode::Auction  => NEAREST_K,
            AllocationMode::Priority => PRIORITY_K,
            AllocationMode::Fcfs => {
                return Err(MarketError::WrongMode { operation: "pooled requests", mode: self.mode });
            }
        };
        let mut submitted = 0;
        for spot in nearest_free(registry, vehicle.pos, k) {
            let base_price = registry.lookup(spot).ok_or(MarketError::UnknownSpot(spot))?.base_price;
            if self.mode == AllocationMode::Auction && vehicle.budget <= base_price {
                continue;
            }
            self.submit(spot, Bid {
                vehicle:  vehicle.id,
                amount:   vehicle.budget,
                priority: vehicle.priority,
                arrival:  vehicle.arrival_tick,
            });
            submitted += 1;
        }
        Ok(submitted)
    }

    // ── Resolution ────────────────────────────────────────────────────────

    /// Resolve every pool and clear them.
    ///
    /// Spots are handled in ascending id order.  A spot that is no longer
    /// free loses its bids; a vehicle that already won this pass is
    /// dropped from later pools.  The pools are empty afterwards even if an
    /// error is returned.
    pub fn resolve(&mut self, registry: &SpotRegistry) -> MarketResult<Vec<Award>> {
        let pools = std::mem::take(&mut self.pools);
        let mut awards = Vec::new();
        let mut winners: BTreeSet<VehicleId> = BTreeSet::new();

        for (spot_id, bids) in pools {
            let spot = registry.lookup(spot_id).ok_or(MarketError::UnknownSpot(spot_id))?;
            if !spot.is_free() {
                continue;
            }
            let live: Vec<Bid> = bids.into_iter().filter(|b| !winners.contains(&b.vehicle)).collect();

            let won = match self.mode {
                AllocationMode::Auction => resolve_auction(&live, spot.base_price),
                AllocationMode::Priority => resolve_priority(&live).map(|v| (v, spot.base_price)),
                AllocationMode::Fcfs => None,
            };
            if let Some((vehicle, price)) = won {
                winners.insert(vehicle);
                awards.push(Award { spot: spot_id, vehicle, price });
            }
        }
        Ok(awards)
    }
}
