//! Score cells and rounds.
//!
//! A [`Round`] holds exactly one [`Cell`] per seat. A cell is either a
//! recorded non-negative score or [`Cell::NotEntered`].
//!
//! ## Wire format
//!
//! Cells serialize as plain integers with `-1` standing for "not entered",
//! so a round is a JSON array such as `[12, -1, 0]`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;
use thiserror::Error;

use super::player::Seat;

/// Integer written for [`Cell::NotEntered`].
pub const NOT_ENTERED_SENTINEL: i64 = -1;

/// A single player's score within one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum Cell {
    /// No score recorded yet.
    #[default]
    NotEntered,
    /// A recorded score.
    Scored(u32),
}

impl Cell {
    /// Check whether a score has been recorded.
    #[must_use]
    pub const fn is_entered(self) -> bool {
        matches!(self, Cell::Scored(_))
    }

    /// The amount this cell adds to its player's total.
    ///
    /// An unset cell and a recorded zero both add nothing.
    #[must_use]
    pub const fn contribution(self) -> u32 {
        match self {
            Cell::Scored(score) => score,
            Cell::NotEntered => 0,
        }
    }

    /// The recorded score, if any.
    #[must_use]
    pub const fn score(self) -> Option<u32> {
        match self {
            Cell::Scored(score) => Some(score),
            Cell::NotEntered => None,
        }
    }
}

impl From<Cell> for i64 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::NotEntered => NOT_ENTERED_SENTINEL,
            Cell::Scored(score) => i64::from(score),
        }
    }
}

/// A stored cell value that is neither a score nor the sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid score cell value {0}")]
pub struct InvalidCell(pub i64);

impl TryFrom<i64> for Cell {
    type Error = InvalidCell;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value == NOT_ENTERED_SENTINEL {
            return Ok(Cell::NotEntered);
        }
        u32::try_from(value)
            .map(Cell::Scored)
            .map_err(|_| InvalidCell(value))
    }
}

/// One pass of score entry: a cell per seat, in seat order.
///
/// Most tables have at most 8 players, so cells are stored inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Round {
    cells: SmallVec<[Cell; 8]>,
}

impl Round {
    /// A round with every cell [`Cell::NotEntered`].
    #[must_use]
    pub fn empty(player_count: usize) -> Self {
        Self {
            cells: SmallVec::from_elem(Cell::NotEntered, player_count),
        }
    }

    /// Build a round from explicit cells.
    #[must_use]
    pub fn from_cells(cells: &[Cell]) -> Self {
        Self {
            cells: SmallVec::from_slice(cells),
        }
    }

    /// Number of cells (equals the player count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cell at `seat`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, seat: Seat) -> Option<Cell> {
        self.cells.get(seat.index()).copied()
    }

    /// Overwrite a cell and return its previous value.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is out of range.
    pub fn replace(&mut self, seat: Seat, cell: Cell) -> Cell {
        std::mem::replace(&mut self.cells[seat.index()], cell)
    }

    /// Iterate over `(Seat, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (Seat(i), cell))
    }
}

impl Index<Seat> for Round {
    type Output = Cell;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.cells[seat.index()]
    }
}
