//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A duel always has exactly two sides: the human `Player` and the `Ai`.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`, laid out `[Player, Ai]`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player, whose cards are placed from the table.
    Player,
    /// The scripted opponent.
    Ai,
}

impl Side {
    /// Both sides in storage order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Ai];

    /// Storage index of this side (`Player = 0`, `Ai = 1`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Ai => 1,
        }
    }

    /// The opposing side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Ai => write!(f, "AI"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tooth_scale::core::{Side, SideMap};
///
/// let mut damage: SideMap<i64> = SideMap::with_value(0);
/// damage[Side::Ai] += 5;
///
/// assert_eq!(damage[Side::Player], 0);
/// assert_eq!(damage[Side::Ai], 5);
/// assert_eq!(damage.as_array(), &[0, 5]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map from explicit `[Player, Ai]` values.
    pub const fn new(player: T, ai: T) -> Self {
        Self { data: [player, ai] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Raw `[Player, Ai]` view.
    #[must_use]
    pub fn as_array(&self) -> &[T; 2] {
        &self.data
    }

    /// Iterate over `(Side, &T)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_index_and_opponent() {
        assert_eq!(Side::Player.index(), 0);
        assert_eq!(Side::Ai.index(), 1);
        assert_eq!(Side::Player.opponent(), Side::Ai);
        assert_eq!(Side::Ai.opponent(), Side::Player);
        assert_eq!(format!("{}", Side::Ai), "AI");
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<i64> = SideMap::default();
        map[Side::Player] = 3;
        *map.get_mut(Side::Ai) += 7;

        assert_eq!(map.as_array(), &[3, 7]);
    }

    #[test]
    fn test_side_map_iter_order() {
        let map = SideMap::new("p", "a");
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &"p"), (Side::Ai, &"a")]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::new(1i64, 2i64);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
