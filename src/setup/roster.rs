//! Player roster for a new game.
//!
//! The engine builds whatever player list it is handed. The roster is the
//! setup-side gate: names are trimmed, blank names are refused, names are
//! capped at [`MAX_NAME_LEN`] characters and unique ignoring case, and a
//! game needs at least [`MIN_PLAYERS`].
//!
//! ```
//! use least_count::setup::{Roster, RosterError};
//!
//! let mut roster = Roster::new();
//! roster.add(" Ann ").unwrap();
//! assert_eq!(roster.add("ANN"), Err(RosterError::DuplicateName("ANN".into())));
//! assert_eq!(roster.names_for_start(), Err(RosterError::TooFewPlayers { count: 1 }));
//!
//! roster.add("Bob").unwrap();
//! assert_eq!(roster.names_for_start().unwrap(), ["Ann", "Bob"]);
//! ```

use rustc_hash::FxHashSet;
use thiserror::Error;

/// Smallest roster that can start a game.
pub const MIN_PLAYERS: usize = 2;

/// Longest accepted name, in characters after trimming.
pub const MAX_NAME_LEN: usize = 20;

/// Refused roster edits.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("player name is empty")]
    EmptyName,
    #[error("player name {name:?} is longer than {max} characters", max = MAX_NAME_LEN)]
    NameTooLong { name: String },
    #[error("player name {0:?} is already taken")]
    DuplicateName(String),
    #[error("need at least {min} players, have {count}", min = MIN_PLAYERS)]
    TooFewPlayers { count: usize },
}

/// Ordered list of unique, trimmed player names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
    folded: FxHashSet<String>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from names, stopping at the first invalid one.
    pub fn from_names<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            roster.add(name.as_ref())?;
        }
        Ok(roster)
    }

    /// Check whether `name` would be accepted, without adding it.
    pub fn check(&self, name: &str) -> Result<(), RosterError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(RosterError::NameTooLong {
                name: trimmed.to_string(),
            });
        }
        if self.folded.contains(&trimmed.to_lowercase()) {
            return Err(RosterError::DuplicateName(trimmed.to_string()));
        }
        Ok(())
    }

    /// Append a player name.
    pub fn add(&mut self, name: &str) -> Result<(), RosterError> {
        self.check(name)?;
        let trimmed = name.trim();
        self.folded.insert(trimmed.to_lowercase());
        self.names.push(trimmed.to_string());
        Ok(())
    }

    /// Remove a player by position. Returns the removed name.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.names.len() {
            return None;
        }
        let name = self.names.remove(index);
        self.folded.remove(&name.to_lowercase());
        Some(name)
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn can_start(&self) -> bool {
        self.names.len() >= MIN_PLAYERS
    }

    /// The names to pass to [`Scorekeeper::create`](crate::rules::Scorekeeper::create).
    pub fn names_for_start(&self) -> Result<&[String], RosterError> {
        if !self.can_start() {
            return Err(RosterError::TooFewPlayers {
                count: self.names.len(),
            });
        }
        Ok(&self.names)
    }
}
