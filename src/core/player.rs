//! Player identification, per-player storage, and player roster.
//!
//! ## PlayerId
//!
//! Type-safe seat index. The first player to move is `PlayerId(0)`.
//!
//! ## PlayerMap
//!
//! Per-player data backed by `Vec` for O(1) access, indexed by `PlayerId`.
//! Empty before a game starts.
//!
//! ## Player
//!
//! Display identity (name, colour, initials) fixed for the whole game.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Token colours, assigned by seat and wrapping past the tenth player.
pub const PALETTE: [&str; 10] = [
    "#d1495b", "#00798c", "#edae49", "#6c5ce7", "#00916e", "#f3722c", "#277da1", "#7f5539",
    "#9b5de5", "#2a9d8f",
];

/// Player seat identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping at `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use snakes_ladders::core::{PlayerId, PlayerMap};
///
/// let mut squares: PlayerMap<u8> = PlayerMap::with_value(3, 1);
/// squares[PlayerId::new(2)] = 14;
/// assert_eq!(squares[PlayerId::new(0)], 1);
/// assert_eq!(squares[PlayerId::new(2)], 14);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count <= u8::MAX as usize, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// True before any players have been seated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a player's data, or `None` for an unknown seat.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> FromIterator<T> for PlayerMap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// CSS-style hex colour for the token.
    pub color: String,
    /// Short token label, e.g. `"AL"` for "Ada Lovelace".
    pub initial: String,
}

impl Player {
    /// Create a player with explicit colour and label.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        initial: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            initial: initial.into(),
        }
    }

    /// Seat a player from a user-typed name.
    ///
    /// Blank names fall back to `Player N`. The colour comes from [`PALETTE`]
    /// by seat and the label is the first letter of up to two words.
    pub fn from_input(seat: usize, raw_name: &str) -> Self {
        let trimmed = raw_name.trim();
        let name = if trimmed.is_empty() {
            format!("Player {}", seat + 1)
        } else {
            trimmed.to_string()
        };
        let initial = initials(&name);
        Self {
            color: PALETTE[seat % PALETTE.len()].to_string(),
            initial,
            name,
        }
    }

    /// Label drawn on the token, falling back to the seat number.
    #[must_use]
    pub fn token_label(&self, id: PlayerId) -> String {
        if self.initial.is_empty() {
            (id.index() + 1).to_string()
        } else {
            self.initial.clone()
        }
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Build a roster of `count` players from typed names.
///
/// Missing names are treated as blank. Extra names are ignored.
pub fn roster<S: AsRef<str>>(names: &[S], count: usize) -> Vec<Player> {
    (0..count)
        .map(|seat| Player::from_input(seat, names.get(seat).map_or("", AsRef::as_ref)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        assert_eq!(p0.index(), 0);
        assert_eq!(format!("{}", p0), "Player 1");
    }

    #[test]
    fn test_player_id_next_wraps() {
        assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
        assert_eq!(PlayerId::new(0).next(1), PlayerId::new(0));
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(4, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.get(PlayerId::new(4)), None);
    }

    #[test]
    fn test_player_map_default_is_empty() {
        let map: PlayerMap<i32> = PlayerMap::default();
        assert!(map.is_empty());
        assert_eq!(map.player_count(), 0);

        let map = PlayerMap::with_value(2, 7);
        assert!(!map.is_empty());
        assert!(map.values().all(|&v| v == 7));
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_from_input_initials() {
        let p = Player::from_input(0, "  ada byron lovelace ");
        assert_eq!(p.name, "ada byron lovelace");
        assert_eq!(p.initial, "AB");
        assert_eq!(p.color, PALETTE[0]);
    }

    #[test]
    fn test_from_input_blank_name() {
        let p = Player::from_input(3, "   ");
        assert_eq!(p.name, "Player 4");
        assert_eq!(p.initial, "P4");
        assert_eq!(p.color, PALETTE[3]);
    }

    #[test]
    fn test_roster_pads_and_truncates() {
        let players = roster(&["Alice", "Bob", "Carol"], 2);
        assert_eq!(players.len(), 2);
        assert_eq!(players[1].name, "Bob");

        let players = roster(&["Alice"], 3);
        assert_eq!(players[2].name, "Player 3");
    }

    #[test]
    fn test_token_label_fallback() {
        let p = Player::new("?", "#000000", "");
        assert_eq!(p.token_label(PlayerId::new(4)), "5");
    }
}
