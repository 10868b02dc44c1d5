//! Trajectory planning: forward moves with bounce-back, and clamped retreats.
//!
//! A trajectory is a forward leg followed by a backward leg, each walked one
//! cell per tick. A move that would pass the end cell walks to the end and
//! reflects the excess back down the path:
//!
//! ```
//! use path_duel::movement::Trajectory;
//!
//! // 10-cell board (last = 9), piece on 6 rolls a 5.
//! let t = Trajectory::advance(6, 5, 9);
//! assert_eq!(t.forward(), 3);
//! assert_eq!(t.backward(), 2);
//! assert_eq!(t.destination(), 7);
//! ```

use serde::{Deserialize, Serialize};

/// A planned piece movement.
///
/// Only `advance` and `retreat` build one, so the backward leg never walks
/// past the start cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TrajectoryParts")]
pub struct Trajectory {
    from: usize,
    forward: usize,
    backward: usize,
    overshoot: usize,
}

#[derive(Deserialize)]
struct TrajectoryParts {
    from: usize,
    forward: usize,
    backward: usize,
    overshoot: usize,
}

impl TryFrom<TrajectoryParts> for Trajectory {
    type Error = String;

    fn try_from(parts: TrajectoryParts) -> Result<Self, Self::Error> {
        let TrajectoryParts { from, forward, backward, overshoot } = parts;
        if backward > from.saturating_add(forward) {
            return Err(format!(
                "backward leg of {backward} passes the start from {from} + {forward}"
            ));
        }
        Ok(Self { from, forward, backward, overshoot })
    }
}

impl Trajectory {
    /// Plan a forward move of `distance` cells on a board whose end is `last`.
    ///
    /// If `from + distance` passes `last`, the piece stops at
    /// `max(0, last - overshoot)` after touching `last`.
    #[must_use]
    pub fn advance(from: usize, distance: usize, last: usize) -> Self {
        let from = from.min(last);
        let target = from + distance;

        if target <= last {
            return Self {
                from,
                forward: distance,
                backward: 0,
                overshoot: 0,
            };
        }

        let overshoot = target - last;
        Self {
            from,
            forward: last - from,
            backward: overshoot.min(last),
            overshoot,
        }
    }

    /// Plan a backward move of `distance` cells, stopping at the start cell.
    #[must_use]
    pub fn retreat(from: usize, distance: usize) -> Self {
        Self {
            from,
            forward: 0,
            backward: distance.min(from),
            overshoot: 0,
        }
    }

    /// Starting cell.
    #[must_use]
    pub fn from(&self) -> usize {
        self.from
    }

    /// Cells walked toward the end.
    #[must_use]
    pub fn forward(&self) -> usize {
        self.forward
    }

    /// Cells walked back toward the start after the forward leg.
    #[must_use]
    pub fn backward(&self) -> usize {
        self.backward
    }

    /// Distance past the end cell before reflection (0 if none).
    #[must_use]
    pub fn overshoot(&self) -> usize {
        self.overshoot
    }

    /// Final cell.
    #[must_use]
    pub fn destination(&self) -> usize {
        (self.from + self.forward).saturating_sub(self.backward)
    }

    /// Number of animation ticks.
    #[must_use]
    pub fn ticks(&self) -> usize {
        self.forward + self.backward
    }

    /// Whether the piece reflects off the end cell.
    #[must_use]
    pub fn bounces(&self) -> bool {
        self.overshoot > 0
    }

    /// Whether the piece does not move at all.
    #[must_use]
    pub fn is_stationary(&self) -> bool {
        self.ticks() == 0
    }
}

/// Landing cell of a forward move, without planning the walk.
#[must_use]
pub fn landing_cell(from: usize, distance: usize, last: usize) -> usize {
    Trajectory::advance(from, distance, last).destination()
}
