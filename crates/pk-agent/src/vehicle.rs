//! Vehicle state and the bookkeeping half of its state machine.
//!
//! The per-tick decisions (request a spot, step, count down) are driven by
//! `pk-sim`; this module owns the transitions and the stuck-detection
//! counters so every caller applies them the same way.
//!
//! ```text
//!   SEARCHING ──win──▶ MOVING ──arrive──▶ PARKED ──dwell over──▶ LEAVING ──exit──▶ REMOVED
//!       ▲                 │                                        ▲    │
//!       └───stuck > 20────┘                                        │    └─stuck > 20─▶ REMOVED (forced)
//!       └────────────────────────────stuck > 40────────────────────┘
//! ```

use std::fmt;

use pk_core::{GridPos, SimRng, SpotId, Tick, VehicleId};

/// Stuck ticks tolerated while MOVING before the reservation is abandoned.
pub const MOVING_STUCK_LIMIT: u32 = 20;

/// Stuck ticks tolerated while SEARCHING before giving up and leaving.
pub const SEARCHING_STUCK_LIMIT: u32 = 40;

/// Stuck ticks tolerated while LEAVING before forced removal.
pub const LEAVING_STUCK_LIMIT: u32 = 20;

pub const MIN_BUDGET: u32 = 10;
pub const MAX_BUDGET: u32 = 50;
pub const MIN_PARKING_DURATION: u32 = 50;
pub const MAX_PARKING_DURATION: u32 = 200;

// ── VehicleState ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum VehicleState {
    Searching,
    Moving,
    Parked,
    Leaving,
    Removed,
}

impl VehicleState {
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleState::Searching => "SEARCHING",
            VehicleState::Moving    => "MOVING",
            VehicleState::Parked    => "PARKED",
            VehicleState::Leaving   => "LEAVING",
            VehicleState::Removed   => "REMOVED",
        }
    }
}

impl fmt::Display for VehicleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── VehicleAttrs ──────────────────────────────────────────────────────────────

/// Attributes fixed at creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VehicleAttrs {
    pub budget:           u32,
    pub priority:         u8,
    pub parking_duration: u32,
}

impl VehicleAttrs {
    /// Draw budget, priority and dwell time, in that order.
    ///
    /// Priority is 3 with probability 0.1, 2 with probability 0.2, else 1.
    pub fn draw(rng: &mut SimRng) -> Self {
        let budget = rng.gen_range(MIN_BUDGET..=MAX_BUDGET);
        let r: f64 = rng.random();
        let priority = if r < 0.1 {
            3
        } else if r < 0.3 {
            2
        } else {
            1
        };
        let parking_duration = rng.gen_range(MIN_PARKING_DURATION..=MAX_PARKING_DURATION);
        Self { budget, priority, parking_duration }
    }
}

// ── Recovery ──────────────────────────────────────────────────────────────────

/// Escalation step chosen when a vehicle has not moved for too long.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Recovery {
    /// MOVING: drop the reservation and search again.
    AbandonSpot,
    /// SEARCHING: stop looking and head for an exit.
    GiveUp,
    /// LEAVING: take the vehicle off the grid.
    ForceRemove,
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id:       VehicleId,
    pub pos:      GridPos,
    pub budget:   u32,
    pub priority: u8,
    pub state:    VehicleState,

    /// Reserved spot while MOVING or PARKED.
    pub target: Option<SpotId>,
    /// Exit chosen when LEAVING began.
    pub exit:   Option<GridPos>,

    /// Tick the vehicle entered the grid.
    pub arrival_tick: Tick,
    /// Ticks since creation.
    pub age:          u64,
    /// Ticks spent searching plus ticks spent blocked.
    pub waiting_time: u64,

    /// Remaining dwell ticks; counts down only while PARKED.
    pub parking_duration: u32,

    pub stuck_counter: u32,
    pub last_position: GridPos,

    pub entrance: GridPos,
    /// Price paid for the current reservation, 0 without one.
    pub paid:     u32,
}

impl Vehicle {
    /// A new SEARCHING vehicle standing on `entrance`.
    pub fn new(id: VehicleId, entrance: GridPos, attrs: VehicleAttrs, now: Tick) -> Self {
        Self {
            id,
            pos: entrance,
            budget: attrs.budget,
            priority: attrs.priority,
            state: VehicleState::Searching,
            target: None,
            exit: None,
            arrival_tick: now,
            age: 0,
            waiting_time: 0,
            parking_duration: attrs.parking_duration,
            stuck_counter: 0,
            last_position: entrance,
            entrance,
            paid: 0,
        }
    }

    /// `false` once the vehicle has been marked for removal.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.state != VehicleState::Removed
    }

    /// Change state and restart stuck detection from the current cell.
    pub fn transition(&mut self, to: VehicleState) {
        self.state = to;
        self.stuck_counter = 0;
        self.last_position = self.pos;
    }

    /// Start-of-turn stuck tracking.  PARKED vehicles do not accrue.
    pub fn observe_position(&mut self) {
        if self.state == VehicleState::Parked {
            return;
        }
        if self.pos == self.last_position {
            self.stuck_counter += 1;
        } else {
            self.stuck_counter = 0;
            self.last_position = self.pos;
        }
    }

    /// The escalation due this tick, if the stuck counter is over its limit.
    pub fn recovery(&self) -> Option<Recovery> {
        match self.state {
            VehicleState::Moving    if self.stuck_counter > MOVING_STUCK_LIMIT    => Some(Recovery::AbandonSpot),
            VehicleState::Searching if self.stuck_counter > SEARCHING_STUCK_LIMIT => Some(Recovery::GiveUp),
            VehicleState::Leaving   if self.stuck_counter > LEAVING_STUCK_LIMIT   => Some(Recovery::ForceRemove),
            _ => None,
        }
    }

    /// Record a won allocation and start driving to it.
    pub fn assign(&mut self, spot: SpotId, price: u32) {
        self.target = Some(spot);
        self.paid = price;
        self.transition(VehicleState::Moving);
    }

    /// Forget the reservation.  Returns the spot that was held, if any.
    pub fn clear_target(&mut self) -> Option<SpotId> {
        self.paid = 0;
        self.target.take()
    }

    /// Head for `exit`.
    pub fn leave(&mut self, exit: GridPos) {
        self.exit = Some(exit);
        self.transition(VehicleState::Leaving);
    }

    /// Count one PARKED tick down.  Returns `true` when the dwell is over.
    pub fn tick_parking(&mut self) -> bool {
        self.parking_duration = self.parking_duration.saturating_sub(1);
        self.parking_duration == 0
    }
}
