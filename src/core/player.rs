//! Players and seats.
//!
//! ## Player
//!
//! A named participant with a stable [`PlayerId`]. Players are fixed when
//! the game is created and never added or removed afterwards.
//!
//! ## Seat
//!
//! Type-safe 0-based position of a player in the game's player list.
//! Every round stores one cell per seat, in seat order.

use serde::{Deserialize, Serialize};

use super::id::PlayerId;

/// Position of a player in the game's player list.
///
/// The first player is `Seat(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seat(pub usize);

impl Seat {
    /// Create a new seat.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Iterate over all seats of a game with `player_count` players.
    ///
    /// ```
    /// use least_count::core::Seat;
    ///
    /// let seats: Vec<_> = Seat::all(3).collect();
    /// assert_eq!(seats, vec![Seat::new(0), Seat::new(1), Seat::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = Seat> {
        (0..player_count).map(Seat)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// A participant in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Stable unique identifier.
    pub id: PlayerId,

    /// Display name, trimmed.
    pub name: String,
}

impl Player {
    /// Create a player, trimming surrounding whitespace from the name.
    #[must_use]
    pub fn new(id: PlayerId, name: &str) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
        }
    }
}

/// A player together with the seat they occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeatedPlayer<'a> {
    pub seat: Seat,
    pub player: &'a Player,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_basics() {
        let s = Seat::new(2);
        assert_eq!(s.index(), 2);
        assert_eq!(format!("{}", s), "Seat 2");
    }

    #[test]
    fn test_seat_all_empty() {
        assert_eq!(Seat::all(0).count(), 0);
    }

    #[test]
    fn test_player_name_is_trimmed() {
        let p = Player::new(PlayerId::new("p1"), "  Ann \t");
        assert_eq!(p.name, "Ann");
    }

    #[test]
    fn test_player_serialization() {
        let p = Player::new(PlayerId::new("p1"), "Bob");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"id":"p1","name":"Bob"}"#);

        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
