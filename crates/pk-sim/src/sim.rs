//! The `Simulation` struct and its tick loop.

use log::{debug, info, warn};

use pk_agent::{Recovery, SpotRegistry, VehicleAttrs, VehicleState, VehicleStore};
use pk_core::{AllocationMode, GridPos, SimClock, SimConfig, SimRng, Tick, VehicleId};
use pk_market::{AllocationManager, Award};
use pk_mobility::MobilityEngine;
use pk_spatial::{LaneRouter, RoadTopology, Router};

use crate::agent::{activation_order, Agent};
use crate::{Counters, Metrics, SimError, SimObserver, SimResult, Snapshot};

// ── TickReport ────────────────────────────────────────────────────────────────

/// Everything observable about one processed tick.
#[derive(Clone, Debug)]
pub struct TickReport {
    pub tick:     Tick,
    pub snapshot: Snapshot,
    pub metrics:  Metrics,
    /// Allocations made during the tick, in the order they were applied.
    pub awards:   Vec<Award>,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// The parking facility and everything in it.
///
/// Each call to [`advance_one_tick`](Self::advance_one_tick):
///
/// 1. **Spawn**: with probability `spawn_rate`, a new SEARCHING vehicle
///    appears at a random entrance (skipped if the entrance is occupied).
/// 2. **Activate**: spots and vehicles act in a fresh random permutation,
///    then the allocation manager resolves pending bids.
/// 3. **Compact**: vehicles marked REMOVED leave the live set.
/// 4. **Report**: metrics and a snapshot are computed.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<R: Router = LaneRouter> {
    pub config:   SimConfig,
    pub clock:    SimClock,
    pub topology: RoadTopology,

    /// Spot arena.  Indexed by `SpotId`.
    pub spots: SpotRegistry,

    /// Live vehicles, including those marked REMOVED until the tick ends.
    pub vehicles: VehicleStore,

    /// Router plus the cell occupancy index.
    pub mobility: MobilityEngine<R>,

    pub manager:  AllocationManager,
    pub counters: Counters,

    rng:          SimRng,
    tick_awards:  Vec<Award>,
    last_metrics: Metrics,
}

impl<R: Router> Simulation<R> {
    pub(crate) fn new(config: SimConfig, topology: RoadTopology, router: R) -> Self {
        let spots = SpotRegistry::from_topology(&topology);
        Self {
            rng:          SimRng::new(config.seed),
            manager:      AllocationManager::new(config.mode),
            clock:        SimClock::new(),
            spots,
            vehicles:     VehicleStore::new(),
            mobility:     MobilityEngine::new(router),
            counters:     Counters::default(),
            tick_awards:  Vec::new(),
            last_metrics: Metrics::default(),
            config,
            topology,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until `config.total_ticks` ticks have been processed.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            "starting {}x{} {} run: {} ticks, spawn rate {}, seed {}",
            self.config.width,
            self.config.height,
            self.config.mode,
            self.config.total_ticks,
            self.config.spawn_rate,
            self.config.seed,
        );
        while self.clock.elapsed() < self.config.total_ticks {
            self.observed_tick(observer)?;
        }
        let m = &self.last_metrics;
        info!(
            "finished at {}: occupancy {:.1}%, revenue {}, {} spawned, {} parked, {} forced removals",
            self.clock, m.occupancy_rate, m.total_revenue, m.vehicle_count, m.parked_count, m.forced_removals,
        );
        observer.on_sim_end(self.clock.current_tick, &self.last_metrics);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_tick(observer)?;
        }
        Ok(())
    }

    /// Process one tick and report on it.
    pub fn advance_one_tick(&mut self) -> SimResult<TickReport> {
        let now = self.clock.current_tick;

        self.spawn(now)?;

        let order = activation_order(self.spots.ids(), self.vehicles.ids().into_iter(), &mut self.rng);
        for agent in order {
            match agent {
                // Spots hold no behaviour of their own; vehicles and the
                // manager change their state.
                Agent::Spot(_)     => {}
                Agent::Vehicle(id) => self.step_vehicle(id)?,
                Agent::Manager     => self.resolve_allocations()?,
            }
        }

        self.vehicles.compact();
        self.clock.advance();

        let metrics = Metrics::compute(now, &self.spots, &self.vehicles, &self.counters);
        self.last_metrics = metrics.clone();
        Ok(TickReport {
            tick:     now,
            snapshot: Snapshot::capture(now, &self.spots, &self.vehicles),
            metrics,
            awards:   std::mem::take(&mut self.tick_awards),
        })
    }

    /// Metrics as of the last processed tick.
    pub fn metrics(&self) -> &Metrics {
        &self.last_metrics
    }

    /// Snapshot of the current state, stamped with the last processed tick.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(Tick(self.last_metrics.tick), &self.spots, &self.vehicles)
    }

    /// Put a new SEARCHING vehicle on `pos`.
    ///
    /// Returns `None` without drawing anything if the cell is occupied.
    pub fn insert_vehicle(&mut self, pos: GridPos, attrs: VehicleAttrs) -> SimResult<Option<VehicleId>> {
        self.topology.ensure_contains(pos)?;
        if !self.mobility.is_free(pos) {
            return Ok(None);
        }
        let id = self.vehicles.spawn(pos, attrs, self.clock.current_tick);
        self.mobility.place(id, pos, &self.topology)?;
        Ok(Some(id))
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_tick_start(self.clock.current_tick);
        let report = self.advance_one_tick()?;
        observer.on_tick_end(&report);
        let interval = self.config.output_interval_ticks;
        if interval > 0 && report.tick.0 % interval == 0 {
            observer.on_snapshot(&report.snapshot);
        }
        Ok(())
    }

    fn spawn(&mut self, now: Tick) -> SimResult<()> {
        if !self.rng.gen_bool(self.config.spawn_rate) {
            return Ok(());
        }
        let entrances = self.topology.entrances();
        let Some(&entrance) = self.rng.choose(&entrances) else {
            return Ok(());
        };
        if !self.mobility.is_free(entrance) {
            debug!("{now}: entrance {entrance} occupied, spawn skipped");
            return Ok(());
        }
        let attrs = VehicleAttrs::draw(&mut self.rng);
        self.insert_vehicle(entrance, attrs)?;
        Ok(())
    }

    fn step_vehicle(&mut self, id: VehicleId) -> SimResult<()> {
        let Some(v) = self.vehicles.get_mut(id) else {
            return Ok(());
        };
        if !v.is_live() {
            return Ok(());
        }
        v.age += 1;
        v.observe_position();
        let state = v.state;

        if let Some(recovery) = v.recovery() {
            return self.recover(id, recovery);
        }
        match state {
            VehicleState::Searching => self.search(id),
            VehicleState::Moving    => self.drive(id),
            VehicleState::Parked    => self.dwell(id),
            VehicleState::Leaving   => self.head_out(id),
            VehicleState::Removed   => Ok(()),
        }
    }

    /// Ask for a spot: immediately under FCFS, pooled otherwise.
    fn search(&mut self, id: VehicleId) -> SimResult<()> {
        let v = self.vehicles.require_mut(id)?;
        v.waiting_time += 1;
        let v = &*v;

        if self.manager.mode() == AllocationMode::Fcfs {
            if let Some(award) = self.manager.allocate_fcfs(&self.spots, v, &mut self.rng)? {
                self.apply_award(award)?;
            }
        } else {
            self.manager.request(&self.spots, v)?;
        }
        Ok(())
    }

    /// One step towards the reserved spot; park on arrival.
    fn drive(&mut self, id: VehicleId) -> SimResult<()> {
        let v = self.vehicles.require_mut(id)?;
        let spot_id = v
            .target
            .ok_or_else(|| SimError::Invariant(format!("{id} is MOVING without a target")))?;
        let spot = self
            .spots
            .lookup(spot_id)
            .ok_or_else(|| SimError::Invariant(format!("{id} targets unknown {spot_id}")))?;
        let (spot_pos, walk) = (spot.pos, spot.distance_to_exit);

        let outcome = self.mobility.step_toward(id, v.pos, spot_pos, Some(spot_pos), &self.topology, &mut self.rng);
        v.pos = outcome.position(v.pos);
        if outcome.is_blocked() {
            v.waiting_time += 1;
        }
        if v.pos == spot_pos {
            v.transition(VehicleState::Parked);
            self.counters.parked_count += 1;
            self.counters.total_walking_distance += u64::from(walk);
        }
        Ok(())
    }

    /// Count the dwell down; release the spot and start leaving when done.
    fn dwell(&mut self, id: VehicleId) -> SimResult<()> {
        let v = self.vehicles.require_mut(id)?;
        if !v.tick_parking() {
            return Ok(());
        }
        if let Some(spot) = v.clear_target() {
            self.spots.release(spot)?;
        }
        let exit = self.topology.nearest_exit(v.pos);
        v.leave(exit);
        Ok(())
    }

    /// One step towards the chosen exit; leave the grid on any exit cell.
    fn head_out(&mut self, id: VehicleId) -> SimResult<()> {
        let v = self.vehicles.require_mut(id)?;
        let exit = match v.exit {
            Some(exit) => exit,
            None => {
                let exit = self.topology.nearest_exit(v.pos);
                v.exit = Some(exit);
                exit
            }
        };

        let outcome = self.mobility.step_toward(id, v.pos, exit, None, &self.topology, &mut self.rng);
        v.pos = outcome.position(v.pos);
        if outcome.is_blocked() {
            v.waiting_time += 1;
        }
        if self.topology.is_exit(v.pos) {
            self.mobility.vacate(id, v.pos);
            v.transition(VehicleState::Removed);
            self.counters.departed_count += 1;
        }
        Ok(())
    }

    /// Apply a deadlock escalation.  Ends the vehicle's turn.
    fn recover(&mut self, id: VehicleId, recovery: Recovery) -> SimResult<()> {
        let v = self.vehicles.require_mut(id)?;
        match recovery {
            Recovery::AbandonSpot => {
                debug!("{id} stuck at {} while moving, abandoning its spot", v.pos);
                if let Some(spot) = v.clear_target() {
                    self.spots.release(spot)?;
                }
                v.transition(VehicleState::Searching);
            }
            Recovery::GiveUp => {
                debug!("{id} stuck at {} while searching, leaving", v.pos);
                let exit = self.topology.nearest_exit(v.pos);
                v.leave(exit);
            }
            Recovery::ForceRemove => {
                warn!("{id} stuck at {} while leaving, removed from the grid", v.pos);
                self.mobility.vacate(id, v.pos);
                v.transition(VehicleState::Removed);
                self.counters.forced_removals += 1;
            }
        }
        Ok(())
    }

    /// The manager's turn: resolve every pool in one pass.
    fn resolve_allocations(&mut self) -> SimResult<()> {
        for award in self.manager.resolve(&self.spots)? {
            self.apply_award(award)?;
        }
        Ok(())
    }

    /// Reserve the spot, point the winner at it and book the revenue.
    pub(crate) fn apply_award(&mut self, award: Award) -> SimResult<()> {
        let Award { spot, vehicle, price } = award;
        let v = self
            .vehicles
            .get_mut(vehicle)
            .ok_or_else(|| SimError::Invariant(format!("award of {spot} to unknown {vehicle}")))?;
        self.spots
            .reserve(spot, vehicle)
            .map_err(|e| SimError::Invariant(format!("award to {vehicle} failed: {e}")))?;
        v.assign(spot, price);
        self.counters.total_revenue += u64::from(price);
        self.tick_awards.push(award);
        Ok(())
    }
}
