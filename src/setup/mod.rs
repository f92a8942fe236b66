//! Game setup: roster checks run before a game is created.

pub mod roster;

pub use roster::{Roster, RosterError, MAX_NAME_LEN, MIN_PLAYERS};
