//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two seats of a match. The declared order
//! (`PLAYER_1` then `PLAYER_2`) is also the wire order.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access, indexed by
//! `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Identifier of one of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Number of players in a match.
    pub const COUNT: usize = 2;

    /// The first seat.
    pub const PLAYER_1: PlayerId = PlayerId(0);

    /// The second seat.
    pub const PLAYER_2: PlayerId = PlayerId(1);

    /// Every player, in declared order.
    pub const ALL: [PlayerId; Self::COUNT] = [Self::PLAYER_1, Self::PLAYER_2];

    /// Get the 0-based index (the wire ordinal).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Look up a player by ordinal.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The player who plays after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        PlayerId((self.0 + 1) % Self::COUNT as u8)
    }

    /// Iterate over all player IDs.
    ///
    /// ```
    /// use tchu::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::PLAYER_1, PlayerId::PLAYER_2]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// Holds exactly one entry per `PlayerId`. Updates are persistent:
/// `with` returns a new map and leaves the receiver untouched, which is how
/// state snapshots replace one player's entry.
///
/// ## Example
///
/// ```
/// use tchu::core::{PlayerId, PlayerMap};
///
/// let cars: PlayerMap<u32> = PlayerMap::new(|_| 40);
/// let after = cars.with(PlayerId::PLAYER_2, 37);
///
/// assert_eq!(cars[PlayerId::PLAYER_2], 40);
/// assert_eq!(after[PlayerId::PLAYER_2], 37);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all().map(factory).collect(),
        }
    }

    /// Create a PlayerMap from one value per player, in declared order.
    pub fn from_array(values: [T; PlayerId::COUNT]) -> Self {
        Self {
            data: values.into(),
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Return a copy of this map with `player`'s entry replaced.
    #[must_use]
    pub fn with(&self, player: PlayerId, value: T) -> Self
    where
        T: Clone,
    {
        let mut data = self.data.clone();
        data[player.index()] = value;
        Self { data }
    }

    /// Transform every entry.
    pub fn map<U>(&self, mut f: impl FnMut(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: self.iter().map(|(p, v)| f(p, v)).collect(),
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::PLAYER_1.index(), 0);
        assert_eq!(PlayerId::PLAYER_2.index(), 1);
        assert_eq!(format!("{}", PlayerId::PLAYER_1), "Player 1");
        assert_eq!(PlayerId::from_index(1), Some(PlayerId::PLAYER_2));
        assert_eq!(PlayerId::from_index(2), None);
    }

    #[test]
    fn test_player_id_next_alternates() {
        assert_eq!(PlayerId::PLAYER_1.next(), PlayerId::PLAYER_2);
        assert_eq!(PlayerId::PLAYER_2.next(), PlayerId::PLAYER_1);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::PLAYER_1], 0);
        assert_eq!(map[PlayerId::PLAYER_2], 10);
    }

    #[test]
    fn test_player_map_with_is_persistent() {
        let map = PlayerMap::from_array(["a".to_string(), "b".to_string()]);
        let updated = map.with(PlayerId::PLAYER_1, "c".to_string());

        assert_eq!(map[PlayerId::PLAYER_1], "a");
        assert_eq!(updated[PlayerId::PLAYER_1], "c");
        assert_eq!(updated[PlayerId::PLAYER_2], "b");
    }

    #[test]
    fn test_player_map_iter_and_map() {
        let map = PlayerMap::from_array([3, 4]);
        let doubled = map.map(|_, v| v * 2);

        let pairs: Vec<_> = doubled.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::PLAYER_1, &6), (PlayerId::PLAYER_2, &8)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
