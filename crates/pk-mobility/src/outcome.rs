//! Result of a single movement attempt.

use pk_core::GridPos;

/// What happened when a vehicle tried to advance one cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// The vehicle moved and the occupancy index was updated.
    Moved { from: GridPos, to: GridPos },
    /// Every candidate cell was blocked; the vehicle stayed put.
    Blocked,
    /// Already at the target, nothing to do.
    Stationary,
}

impl StepOutcome {
    /// The vehicle's cell after the attempt.
    #[inline]
    pub fn position(self, before: GridPos) -> GridPos {
        match self {
            StepOutcome::Moved { to, .. } => to,
            _                             => before,
        }
    }

    #[inline]
    pub fn is_blocked(self) -> bool {
        self == StepOutcome::Blocked
    }
}
