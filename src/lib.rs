//! # least-count
//!
//! Rule engine for Least Count, a multiplayer elimination scoring game.
//! Players collect per-round scores; a running total of 201 or more knocks
//! a player out, and the game ends when at most one player remains.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not objects**: a [`Game`] is an immutable value. Every
//!    transition returns a new snapshot and leaves the old one intact.
//!
//! 2. **Derive, don't patch**: completion is recomputed from totals after
//!    every score mutation, so undo-then-redo always agrees with itself.
//!
//! 3. **Single-slot undo**: only the most recent score entry can be undone.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) snapshot cloning via `im-rs`.
//!
//! - **Pure core, clocked shell**: `Game` transitions take the current
//!   instant as an argument; [`Scorekeeper`] supplies it from a [`Clock`]
//!   together with fresh identifiers.
//!
//! - **Storage outside the rules**: [`GameStore`] persists JSON snapshots
//!   over a pluggable key/value [`Backend`](store::Backend).
//!
//! ## Modules
//!
//! - `core`: ids, players, cells and rounds, clocks, the `Game` snapshot
//! - `rules`: thresholds, completion, the `Scorekeeper` engine, entry flow
//! - `setup`: roster validation before a game starts
//! - `store`: snapshot persistence and retention

pub mod core;
pub mod rules;
pub mod setup;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    Cell, Clock, Game, GameId, IdSource, InvalidSnapshot, LastAction, ManualClock, Player,
    PlayerId, Round, Seat, SeatedPlayer, SystemClock, Timestamp,
};

pub use crate::rules::{
    next_open_cell, should_add_round, NextCell, Outcome, RulesError, Scorekeeper, Standing,
    ELIMINATION_THRESHOLD, WARNING_THRESHOLD,
};

pub use crate::setup::{Roster, RosterError};

pub use crate::store::{GameStore, StoreConfig, StoreError};
