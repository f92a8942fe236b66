//! Snapshot persistence.
//!
//! The rules never perform I/O. Collaborators that keep games between
//! sessions use a [`GameStore`] over a [`Backend`]:
//!
//! - `MemoryBackend`: in-process map, for tests and ephemeral sessions
//! - `FileBackend`: one JSON file per key in a directory
//!
//! Snapshots round-trip losslessly through JSON.

pub mod error;
pub mod config;
pub mod backend;
pub mod games;

pub use error::StoreError;
pub use config::{StoreConfig, DEFAULT_CURRENT_KEY, DEFAULT_GAMES_KEY, DEFAULT_MAX_GAMES};
pub use backend::{Backend, FileBackend, MemoryBackend};
pub use games::GameStore;
