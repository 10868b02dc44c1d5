//! Player identification and per-player data storage.
//!
//! ## PlayerColor
//!
//! The game always has exactly two players, red and blue, with fixed roles
//! for the whole game. Red moves first.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by a two-element array, indexable by
//! `PlayerColor`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Red,
    Blue,
}

impl PlayerColor {
    /// Both players in turn order.
    pub const ALL: [PlayerColor; 2] = [PlayerColor::Red, PlayerColor::Blue];

    /// The player who opens every game.
    pub const FIRST: PlayerColor = PlayerColor::Red;

    /// The other player.
    ///
    /// ```
    /// use path_duel::core::PlayerColor;
    ///
    /// assert_eq!(PlayerColor::Red.opponent(), PlayerColor::Blue);
    /// assert_eq!(PlayerColor::Blue.opponent(), PlayerColor::Red);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerColor::Red => PlayerColor::Blue,
            PlayerColor::Blue => PlayerColor::Red,
        }
    }

    /// Array slot for this player.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerColor::Red => 0,
            PlayerColor::Blue => 1,
        }
    }

    /// Lowercase name, also used as the translation key suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerColor::Red => "red",
            PlayerColor::Blue => "blue",
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-player data with O(1) access.
///
/// ## Example
///
/// ```
/// use path_duel::core::{PlayerColor, PlayerMap};
///
/// let mut score: PlayerMap<u32> = PlayerMap::with_value(0);
/// score[PlayerColor::Blue] += 3;
///
/// assert_eq!(score[PlayerColor::Red], 0);
/// assert_eq!(score[PlayerColor::Blue], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerColor) -> T) -> Self {
        Self {
            data: [factory(PlayerColor::Red), factory(PlayerColor::Blue)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerColor) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerColor) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerColor, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerColor, &T)> {
        PlayerColor::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerColor> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerColor) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerColor> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerColor) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for player in PlayerColor::ALL {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_index_and_display() {
        assert_eq!(PlayerColor::Red.index(), 0);
        assert_eq!(PlayerColor::Blue.index(), 1);
        assert_eq!(format!("{}", PlayerColor::Blue), "blue");
        assert_eq!(PlayerColor::FIRST, PlayerColor::Red);
    }

    #[test]
    fn test_player_map_new() {
        let map = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerColor::Red], 0);
        assert_eq!(map[PlayerColor::Blue], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<usize> = PlayerMap::default();

        map[PlayerColor::Red] = 4;
        *map.get_mut(PlayerColor::Blue) = 7;

        assert_eq!(map[PlayerColor::Red], 4);
        assert_eq!(map[PlayerColor::Blue], 7);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::new(|p| p.as_str().len());
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs, vec![(PlayerColor::Red, &3), (PlayerColor::Blue, &4)]);
    }

    #[test]
    fn test_serialization() {
        let map = PlayerMap::new(|p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);

        assert_eq!(serde_json::to_string(&PlayerColor::Red).unwrap(), "\"red\"");
    }
}
