//! Routing trait and the default one-way lane router.
//!
//! # Pluggability
//!
//! `pk-mobility` asks for moves via the [`Router`] trait, so alternative
//! traffic rules (two-way lanes, congestion-aware routing) can be swapped in
//! without touching the engine.  The default [`LaneRouter`] implements the
//! facility's one-way rules.
//!
//! # One step at a time
//!
//! Vehicles move one cell per tick and the grid changes under them every
//! tick, so the router does not produce a full route.  It returns the
//! candidate cells for the *next* step, best first; the mobility engine
//! takes the first one that is not blocked.

use pk_core::{Direction, GridPos, SimRng};

use crate::RoadTopology;

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable next-step planner.
pub trait Router: Send + Sync {
    /// Candidate next cells for a vehicle at `from` heading to `target`,
    /// ordered best first.
    ///
    /// Returns an empty `Vec` when `from == target`.  Blocking by other
    /// vehicles is not considered here.
    fn candidates(
        &self,
        topology: &RoadTopology,
        from:     GridPos,
        target:   GridPos,
        rng:      &mut SimRng,
    ) -> Vec<GridPos>;
}

// ── LaneRouter ────────────────────────────────────────────────────────────────

/// One-way lane routing.
///
/// | Vehicle is…                       | Candidates                                   |
/// |-----------------------------------|----------------------------------------------|
/// | next to the target                | the target                                   |
/// | on a parkable cell                | adjacent road cells, nearest-to-target first |
/// | inside a vertical lane            | the next cell in the lane's direction        |
/// | on an intersection row            | lateral step or lane entry (see below)       |
///
/// On an intersection row the router aims for the target's access column
/// `L`.  `L` can only be entered from its entry row; from the other row the
/// vehicle first crosses over via a connector column flowing the right way,
/// choosing the connector that minimises total lateral travel.
pub struct LaneRouter;

impl Router for LaneRouter {
    fn candidates(
        &self,
        topology: &RoadTopology,
        from:     GridPos,
        target:   GridPos,
        rng:      &mut SimRng,
    ) -> Vec<GridPos> {
        if from == target {
            return vec![];
        }
        if from.manhattan(target) == 1 {
            return vec![target];
        }

        let scored: Vec<(u32, GridPos)> = if !topology.is_lane(from) {
            topology
                .lane_neighbours(from)
                .map(|n| (n.manhattan(target), n))
                .collect()
        } else if !topology.is_intersection_row(from.y) {
            // Mid-lane: no turning, no reversing.
            return match topology.lane_direction(from.x) {
                Some(dir) => vec![from.step(dir)],
                None      => vec![],
            };
        } else {
            intersection_moves(topology, from, target)
        };

        rank(scored, rng)
    }
}

/// Candidate moves for a vehicle standing on an intersection row.
fn intersection_moves(topology: &RoadTopology, from: GridPos, target: GridPos) -> Vec<(u32, GridPos)> {
    let row = from.y;

    if target.y == row {
        return lateral_towards(from, target.x)
            .map(|p| vec![(p.manhattan(target), p)])
            .unwrap_or_default();
    }

    let access = topology.access_column(target);
    let Some(entry) = topology.entry_row(access) else {
        return vec![];
    };

    if row == entry {
        return match lateral_towards(from, access) {
            Some(p) => vec![(0, p)],
            None    => enter_lane(topology, from).map(|p| vec![(0, p)]).unwrap_or_default(),
        };
    }

    // Wrong row: cross over on a connector flowing away from this row.
    let wanted = if row == 0 { Direction::Down } else { Direction::Up };
    let cost = |c: i32| c.abs_diff(from.x) + c.abs_diff(access);
    let connectors: Vec<i32> = topology
        .lane_columns()
        .filter(|&c| topology.lane_direction(c) == Some(wanted))
        .collect();
    let Some(best) = connectors.iter().map(|&c| cost(c)).min() else {
        return vec![];
    };

    let mut moves: Vec<(u32, GridPos)> = Vec::with_capacity(2);
    for c in connectors.into_iter().filter(|&c| cost(c) == best) {
        let next = match lateral_towards(from, c) {
            Some(p) => Some(p),
            None    => enter_lane(topology, from),
        };
        if let Some(p) = next {
            if !moves.iter().any(|&(_, q)| q == p) {
                moves.push((best, p));
            }
        }
    }
    moves
}

/// One lateral step from `from` towards column `x`, or `None` if already there.
#[inline]
fn lateral_towards(from: GridPos, x: i32) -> Option<GridPos> {
    Direction::horizontal_towards(from.x, x).map(|d| from.step(d))
}

/// Step from an intersection row into the lane column at `from.x`.
#[inline]
fn enter_lane(topology: &RoadTopology, from: GridPos) -> Option<GridPos> {
    topology
        .lane_direction(from.x)
        .map(|d| from.step(d))
        .filter(|&p| topology.contains(p))
}

/// Order candidates by score, breaking ties with a random perturbation.
fn rank(scored: Vec<(u32, GridPos)>, rng: &mut SimRng) -> Vec<GridPos> {
    if scored.len() <= 1 {
        return scored.into_iter().map(|(_, p)| p).collect();
    }
    let mut keyed: Vec<(f64, GridPos)> = scored
        .into_iter()
        .map(|(score, p)| (score as f64 + rng.perturbation(), p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, p)| p).collect()
}
