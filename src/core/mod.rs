//! Core snapshot types: identifiers, players, cells, clocks, the undo
//! record and the `Game` aggregate.
//!
//! Everything here is plain data plus pure transitions. Nothing performs
//! I/O or holds shared mutable state.

pub mod id;
pub mod player;
pub mod cell;
pub mod clock;
pub mod action;
pub mod state;

pub use id::{GameId, PlayerId, IdSource, ID_SUFFIX_LEN};
pub use player::{Player, Seat, SeatedPlayer};
pub use cell::{Cell, InvalidCell, Round, NOT_ENTERED_SENTINEL};
pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use action::LastAction;
pub use state::{Game, InvalidSnapshot};
