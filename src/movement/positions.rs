//! Player positions.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerColor, PlayerMap};

/// Each player's current cell index, clamped to `[0, last]` on every write.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionStore {
    positions: PlayerMap<usize>,
    last: usize,
}

impl PositionStore {
    /// Both players on the start cell of a board whose end is `last`.
    #[must_use]
    pub fn new(last: usize) -> Self {
        Self {
            positions: PlayerMap::with_value(0),
            last,
        }
    }

    /// Current cell of `player`.
    #[must_use]
    pub fn get(&self, player: PlayerColor) -> usize {
        self.positions[player]
    }

    /// Index of the end cell.
    #[must_use]
    pub fn last(&self) -> usize {
        self.last
    }

    /// Whether `player` sits on the end cell.
    #[must_use]
    pub fn at_goal(&self, player: PlayerColor) -> bool {
        self.positions[player] == self.last
    }

    /// Both positions in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerColor, usize)> + '_ {
        self.positions.iter().map(|(p, &pos)| (p, pos))
    }

    pub(crate) fn set(&mut self, player: PlayerColor, position: usize) {
        self.positions[player] = position.min(self.last);
    }

    pub(crate) fn reset(&mut self) {
        self.positions = PlayerMap::with_value(0);
    }
}
