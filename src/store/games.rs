//! Snapshot persistence on top of a [`Backend`].
//!
//! ## Layout
//!
//! Two keys:
//! - the history: a JSON array of snapshots, most recently started first
//! - the current game: a single JSON snapshot
//!
//! ## Retention
//!
//! Saving a game not yet in history puts it at the front. Saving a known
//! game replaces its entry in place. The history is then cut to
//! `max_games`, dropping the entries at the back.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::backend::{Backend, MemoryBackend};
use super::config::StoreConfig;
use super::error::StoreError;
use crate::core::{Game, GameId};

/// Game history and current-game slot.
#[derive(Clone, Debug)]
pub struct GameStore<B: Backend> {
    backend: B,
    config: StoreConfig,
}

impl GameStore<MemoryBackend> {
    /// In-memory store with the default configuration.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: MemoryBackend::new(),
            config: StoreConfig::default(),
        }
    }
}

impl<B: Backend> GameStore<B> {
    /// Create a store, validating the configuration.
    pub fn new(backend: B, config: StoreConfig) -> Result<Self, StoreError> {
        config.validate()?;
        Ok(Self { backend, config })
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Every stored game, most recently started first.
    pub fn load_all(&self) -> Result<Vec<Game>, StoreError> {
        self.read(&self.config.games_key)
            .map(Option::unwrap_or_default)
    }

    /// The game last saved, if any.
    pub fn load_current(&self) -> Result<Option<Game>, StoreError> {
        self.read(&self.config.current_key)
    }

    /// Find a game by id in history, falling back to the current slot.
    pub fn load(&self, id: &GameId) -> Result<Game, StoreError> {
        if let Some(game) = self.load_all()?.into_iter().find(|g| g.id() == id) {
            return Ok(game);
        }
        match self.load_current()? {
            Some(game) if game.id() == id => Ok(game),
            _ => Err(StoreError::NotFound(id.clone())),
        }
    }

    /// Make `game` current and upsert it into history.
    ///
    /// The history is decoded before anything is written, so a stored
    /// history that fails to decode leaves both keys untouched.
    pub fn save(&mut self, game: &Game) -> Result<(), StoreError> {
        let mut history = self.load_all()?;
        match history.iter().position(|g| g.id() == game.id()) {
            Some(index) => history[index] = game.clone(),
            None => history.insert(0, game.clone()),
        }

        if history.len() > self.config.max_games {
            for evicted in history.drain(self.config.max_games..) {
                info!(game_id = %evicted.id(), "evicted game from history");
            }
        }

        self.write(&self.config.current_key.clone(), game)?;
        self.write(&self.config.games_key.clone(), &history)?;
        debug!(game_id = %game.id(), history = history.len(), "saved game");
        Ok(())
    }

    /// Remove a game from history. Clears the current slot if it held it.
    pub fn delete(&mut self, id: &GameId) -> Result<(), StoreError> {
        let mut history = self.load_all()?;
        let before = history.len();
        history.retain(|g| g.id() != id);
        self.write(&self.config.games_key.clone(), &history)?;

        let current_matches = self
            .load_current()?
            .is_some_and(|current| current.id() == id);
        if current_matches {
            self.clear_current()?;
        }

        debug!(game_id = %id, removed = before - history.len(), "deleted game");
        Ok(())
    }

    /// Forget the current game. History is kept.
    pub fn clear_current(&mut self) -> Result<(), StoreError> {
        self.backend.remove(&self.config.current_key)
    }

    /// Forget everything.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.backend.remove(&self.config.games_key)?;
        self.backend.remove(&self.config.current_key)?;
        info!("cleared all games");
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(|source| {
            warn!(key, error = %source, "failed to decode stored snapshot");
            StoreError::Serialization {
                key: key.to_string(),
                source,
            }
        })
    }

    fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialization {
            key: key.to_string(),
            source,
        })?;
        self.backend.set(key, raw)
    }
}
