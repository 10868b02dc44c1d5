//! The active animation job.
//!
//! A job walks one player along a `Trajectory`, one cell per `step()`. The
//! scheduler calls `step()` once per tick; the job knows nothing about time.

use serde::{Deserialize, Serialize};

use super::trajectory::Trajectory;
use crate::core::PlayerColor;

/// What to do once the walk finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Completion {
    /// Dice move: classify the landing cell.
    Landing,
    /// Task reward/penalty: check for a win, then pass the turn.
    Relocation,
}

/// A movement in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationJob {
    pub player: PlayerColor,
    pub completion: Completion,
    position: usize,
    forward_remaining: usize,
    backward_remaining: usize,
    trajectory: Trajectory,
}

impl AnimationJob {
    /// Start walking `player` along `trajectory`.
    #[must_use]
    pub fn new(player: PlayerColor, trajectory: Trajectory, completion: Completion) -> Self {
        Self {
            player,
            completion,
            position: trajectory.from(),
            forward_remaining: trajectory.forward(),
            backward_remaining: trajectory.backward(),
            trajectory,
        }
    }

    /// Advance one cell. Returns the new position, or `None` when finished.
    pub fn step(&mut self) -> Option<usize> {
        if self.forward_remaining > 0 {
            self.forward_remaining -= 1;
            self.position += 1;
        } else if self.backward_remaining > 0 && self.position > 0 {
            self.backward_remaining -= 1;
            self.position -= 1;
        } else {
            self.backward_remaining = 0;
            return None;
        }
        Some(self.position)
    }

    /// Cell the piece currently shows on.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether every step has been taken.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining_ticks() == 0
    }

    #[must_use]
    pub fn remaining_ticks(&self) -> usize {
        self.forward_remaining + self.backward_remaining
    }

    /// The planned walk.
    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }
}
