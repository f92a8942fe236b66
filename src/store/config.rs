//! Store configuration.

use serde::{Deserialize, Serialize};

use super::error::StoreError;

/// Default number of games kept in history.
pub const DEFAULT_MAX_GAMES: usize = 20;

/// Default key holding the game history.
pub const DEFAULT_GAMES_KEY: &str = "least_count_games";

/// Default key holding the current game.
pub const DEFAULT_CURRENT_KEY: &str = "least_count_current_game";

/// Retention and key layout of a [`GameStore`](super::GameStore).
///
/// ```
/// use least_count::store::StoreConfig;
///
/// let config = StoreConfig::new().with_max_games(5);
/// assert_eq!(config.max_games, 5);
/// assert_eq!(config.games_key, "least_count_games");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Most games kept in history. The oldest are evicted first.
    pub max_games: usize,

    /// Backend key for the history list.
    pub games_key: String,

    /// Backend key for the current game.
    pub current_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_games: DEFAULT_MAX_GAMES,
            games_key: DEFAULT_GAMES_KEY.to_string(),
            current_key: DEFAULT_CURRENT_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the history limit.
    #[must_use]
    pub fn with_max_games(mut self, max_games: usize) -> Self {
        self.max_games = max_games;
        self
    }

    /// Use custom backend keys.
    #[must_use]
    pub fn with_keys(mut self, games_key: impl Into<String>, current_key: impl Into<String>) -> Self {
        self.games_key = games_key.into();
        self.current_key = current_key.into();
        self
    }

    /// Reject configurations the store cannot honor.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.max_games == 0 {
            return Err(StoreError::InvalidConfig {
                message: "max_games must be at least 1".to_string(),
            });
        }
        if self.games_key.is_empty() || self.current_key.is_empty() {
            return Err(StoreError::InvalidConfig {
                message: "store keys must not be empty".to_string(),
            });
        }
        for key in [&self.games_key, &self.current_key] {
            if !is_plain_key(key) {
                return Err(StoreError::InvalidConfig {
                    message: format!(
                        "store key {key:?} may only contain ASCII letters, digits, '_' and '-'"
                    ),
                });
            }
        }
        if self.games_key == self.current_key {
            return Err(StoreError::InvalidConfig {
                message: format!("games and current game share key {:?}", self.games_key),
            });
        }
        Ok(())
    }
}

/// File backends map keys straight to file names, so keys must not carry
/// separators or dots.
fn is_plain_key(key: &str) -> bool {
    key.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.max_games, 20);
        assert_eq!(config.current_key, "least_count_current_game");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(StoreConfig::new().with_max_games(0).validate().is_err());
        assert!(StoreConfig::new().with_keys("", "x").validate().is_err());
        assert!(StoreConfig::new().with_keys("same", "same").validate().is_err());
        assert!(StoreConfig::new().with_keys("a", "b").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_path_like_keys() {
        for key in ["../escape", "nested/games", r"dir\games", "..", "games.json", "a b"] {
            let result = StoreConfig::new().with_keys(key, "current").validate();
            assert!(
                matches!(result, Err(StoreError::InvalidConfig { .. })),
                "key {key:?} should be rejected"
            );
            let result = StoreConfig::new().with_keys("games", key).validate();
            assert!(result.is_err(), "key {key:?} should be rejected");
        }
        assert!(StoreConfig::new()
            .with_keys("my-games_2", "my-current_2")
            .validate()
            .is_ok());
    }
}
