//! Game completion.
//!
//! Completion is derived from scratch from the current totals after every
//! score mutation. It never depends on the previous finished/winner values,
//! which keeps undo-then-redo consistent without extra history.
//!
//! | active players `a` | player count `n` | outcome  |
//! |--------------------|------------------|----------|
//! | 1                  | > 1              | `Won`    |
//! | 0                  | any              | `AllOut` |
//! | otherwise          |                  | `Open`   |

use serde::{Deserialize, Serialize};

use crate::core::{Game, PlayerId};

/// Completion state of a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Two or more players still active (or a lone player in a 1-player game).
    Open,
    /// Exactly one player remains.
    Won(PlayerId),
    /// Every player is eliminated. No winner.
    AllOut,
}

impl Outcome {
    /// Derive the outcome from a snapshot's current totals.
    ///
    /// Ignores the snapshot's stored `is_finished`/`winner_id`.
    #[must_use]
    pub fn derive(game: &Game) -> Self {
        let active = game.active_players();
        match active.as_slice() {
            [] => Outcome::AllOut,
            [only] if game.player_count() > 1 => Outcome::Won(only.player.id.clone()),
            _ => Outcome::Open,
        }
    }

    /// Build from stored snapshot fields.
    #[must_use]
    pub fn from_fields(is_finished: bool, winner_id: Option<&PlayerId>) -> Self {
        match (is_finished, winner_id) {
            (false, _) => Outcome::Open,
            (true, Some(id)) => Outcome::Won(id.clone()),
            (true, None) => Outcome::AllOut,
        }
    }

    /// Check whether the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::Open)
    }

    /// The winner's id, if there is one.
    #[must_use]
    pub fn winner_id(&self) -> Option<&PlayerId> {
        match self {
            Outcome::Won(id) => Some(id),
            Outcome::Open | Outcome::AllOut => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Open => f.write_str("open"),
            Outcome::Won(id) => write!(f, "won by {}", id),
            Outcome::AllOut => f.write_str("all out"),
        }
    }
}
