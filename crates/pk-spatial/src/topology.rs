//! Pure mapping from grid cells to their role in the facility.
//!
//! `RoadTopology` holds nothing but the grid dimensions; every query is a
//! closed-form function of the coordinates, so it is `Copy` and can be
//! handed to any component without borrowing concerns.

use pk_core::config::MIN_GRID_DIM;
use pk_core::{Direction, GridPos, SpotType};

use crate::{SpatialError, SpatialResult};

/// Spacing of vertical lane columns.
pub const LANE_SPACING: i32 = 3;

/// Spots closer than this (Manhattan) to an exit are VIP.
pub const VIP_RADIUS: u32 = 5;

/// Spots closer than this (Manhattan) to an exit are Handicap (if not VIP).
pub const HANDICAP_RADIUS: u32 = 10;

/// Grid dimensions plus the lane/zone rules derived from them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadTopology {
    width:  i32,
    height: i32,
}

impl RoadTopology {
    /// Build the topology for a `width × height` grid.
    pub fn new(width: u32, height: u32) -> SpatialResult<Self> {
        if width < MIN_GRID_DIM || height < MIN_GRID_DIM {
            return Err(SpatialError::GridTooSmall { width, height, min: MIN_GRID_DIM });
        }
        let too_big = |v: u32| i32::try_from(v).is_err();
        if too_big(width) || too_big(height) {
            return Err(SpatialError::GridTooLarge { width, height });
        }
        Ok(Self { width: width as i32, height: height as i32 })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `true` if `pos` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Return `pos` unchanged if it is on the grid.
    pub fn ensure_contains(&self, pos: GridPos) -> SpatialResult<GridPos> {
        if self.contains(pos) { Ok(pos) } else { Err(SpatialError::OutOfBounds(pos)) }
    }

    // ── Lanes ─────────────────────────────────────────────────────────────

    /// `true` if column `x` carries a vertical lane.
    #[inline]
    pub fn is_lane_column(&self, x: i32) -> bool {
        (0..self.width).contains(&x) && (x % LANE_SPACING == 0 || x == self.width - 1)
    }

    /// `true` for the top and bottom rows, where vehicles may change column.
    #[inline]
    pub fn is_intersection_row(&self, y: i32) -> bool {
        y == 0 || y == self.height - 1
    }

    /// `true` if `pos` is a road cell (vertical lane or intersection row).
    #[inline]
    pub fn is_lane(&self, pos: GridPos) -> bool {
        self.contains(pos) && (self.is_lane_column(pos.x) || self.is_intersection_row(pos.y))
    }

    /// `true` if `pos` is on the grid and not a road cell.
    #[inline]
    pub fn is_parkable(&self, pos: GridPos) -> bool {
        self.contains(pos) && !self.is_lane(pos)
    }

    /// Mandated direction of travel on lane column `x`, or `None` if `x` is
    /// not a lane column.
    ///
    /// The rightmost column flows up towards exit `(w-1, 0)`, the leftmost
    /// flows down towards exit `(0, h-1)`; interior lanes alternate by
    /// `⌊x/3⌋ mod 2` (even → down, odd → up).
    pub fn lane_direction(&self, x: i32) -> Option<Direction> {
        if !self.is_lane_column(x) {
            return None;
        }
        let dir = if x == self.width - 1 {
            Direction::Up
        } else if x == 0 || (x / LANE_SPACING) % 2 == 0 {
            Direction::Down
        } else {
            Direction::Up
        };
        Some(dir)
    }

    /// Intersection row a lane column is entered from (the row its traffic
    /// flows away from).
    pub fn entry_row(&self, x: i32) -> Option<i32> {
        self.lane_direction(x).map(|dir| match dir {
            Direction::Down => 0,
            _               => self.height - 1,
        })
    }

    /// All lane columns in ascending order.
    pub fn lane_columns(&self) -> impl Iterator<Item = i32> + '_ {
        (0..self.width).filter(move |&x| self.is_lane_column(x))
    }

    /// The lane column nearest to `pos.x` (the column itself if it is a
    /// lane).  Ties prefer the lower column.
    ///
    /// For a parkable cell this is the adjacent lane it is entered from.
    pub fn access_column(&self, pos: GridPos) -> i32 {
        self.lane_columns()
            .min_by_key(|&c| (c.abs_diff(pos.x), c))
            .unwrap_or(0)
    }

    /// Orthogonal neighbours of `pos` that are road cells.
    pub fn lane_neighbours(&self, pos: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        pos.neighbours().into_iter().filter(move |&n| self.is_lane(n))
    }

    // ── Entrances and exits ───────────────────────────────────────────────

    /// Spawn cells: top-left and bottom-right corners.
    pub fn entrances(&self) -> [GridPos; 2] {
        [GridPos::new(0, 0), GridPos::new(self.width - 1, self.height - 1)]
    }

    /// Exit cells: top-right (first exit) and bottom-left (second exit).
    pub fn exits(&self) -> [GridPos; 2] {
        [GridPos::new(self.width - 1, 0), GridPos::new(0, self.height - 1)]
    }

    #[inline]
    pub fn is_exit(&self, pos: GridPos) -> bool {
        self.exits().contains(&pos)
    }

    /// The exit closest to `pos` by Manhattan distance; ties go to the first
    /// exit.
    pub fn nearest_exit(&self, pos: GridPos) -> GridPos {
        let [first, second] = self.exits();
        if pos.manhattan(second) < pos.manhattan(first) { second } else { first }
    }

    /// Manhattan distance from `pos` to the nearer exit.
    pub fn distance_to_exit(&self, pos: GridPos) -> u32 {
        pos.manhattan(self.nearest_exit(pos))
    }

    // ── Zoning ────────────────────────────────────────────────────────────

    /// Spot category for a cell, by distance to the nearer exit.
    pub fn zone(&self, pos: GridPos) -> SpotType {
        match self.distance_to_exit(pos) {
            d if d < VIP_RADIUS      => SpotType::Vip,
            d if d < HANDICAP_RADIUS => SpotType::Handicap,
            _                        => SpotType::Standard,
        }
    }

    /// Every parkable cell in column-major order (x ascending, then y).
    pub fn parkable_cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.width)
            .flat_map(move |x| (0..self.height).map(move |y| GridPos::new(x, y)))
            .filter(move |&p| self.is_parkable(p))
    }
}
