//! Integer grid coordinates and compass directions.
//!
//! `y` grows downwards: "up" means decreasing `y`, matching the way the
//! facility is drawn (row 0 at the top).

use std::fmt;

/// A cell on the facility grid.
///
/// Coordinates are signed so that neighbour arithmetic never underflows;
/// whether a cell is inside the grid is a topology question
/// (`RoadTopology::contains`), not a property of the type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance.
    #[inline]
    pub fn manhattan(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The cell one step away in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> GridPos {
        let (dx, dy) = dir.delta();
        GridPos::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbours, in `Direction::ALL` order.
    pub fn neighbours(self) -> [GridPos; 4] {
        Direction::ALL.map(|d| self.step(d))
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four grid directions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Decreasing `y`.
    Up,
    /// Increasing `y`.
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(dx, dy)` for one step.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up    => (0, -1),
            Direction::Down  => (0, 1),
            Direction::Left  => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Horizontal direction that moves `from_x` towards `to_x`, or `None`
    /// if they are equal.
    #[inline]
    pub fn horizontal_towards(from_x: i32, to_x: i32) -> Option<Direction> {
        match to_x.cmp(&from_x) {
            std::cmp::Ordering::Greater => Some(Direction::Right),
            std::cmp::Ordering::Less    => Some(Direction::Left),
            std::cmp::Ordering::Equal   => None,
        }
    }
}
