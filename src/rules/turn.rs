//! Turn manager.

use serde::{Deserialize, Serialize};

use crate::core::PlayerColor;

/// Whose turn it is, and how many turns have started.
///
/// Advanced exactly once per completed turn cycle: after a plain landing,
/// or after a task resolution that does not end the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTracker {
    current: PlayerColor,
    number: u32,
}

impl Default for TurnTracker {
    fn default() -> Self {
        Self {
            current: PlayerColor::FIRST,
            number: 1,
        }
    }
}

impl TurnTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The player allowed to roll.
    #[must_use]
    pub fn current(&self) -> PlayerColor {
        self.current
    }

    /// 1-based turn counter.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Hand the turn to the other player. Returns the new current player.
    pub fn advance(&mut self) -> PlayerColor {
        self.current = self.current.opponent();
        self.number += 1;
        self.current
    }
}
