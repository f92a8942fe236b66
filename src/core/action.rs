//! The single-slot undo record.
//!
//! A game remembers only its most recent score entry. Recording a new score
//! overwrites the record; undoing consumes it. There is no undo stack.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::player::Seat;

/// The most recent undoable mutation.
///
/// Serialized with a `type` tag:
/// `{"type":"setScore","roundIndex":0,"playerIndex":1,"previousValue":-1}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LastAction {
    /// A score was written into a cell.
    #[serde(rename_all = "camelCase")]
    SetScore {
        /// Round that was written.
        round_index: usize,
        /// Seat that was written.
        #[serde(rename = "playerIndex")]
        seat: Seat,
        /// Value of the cell before the write.
        previous_value: Cell,
    },
}

impl LastAction {
    /// Create a score-entry record.
    #[must_use]
    pub const fn set_score(round_index: usize, seat: Seat, previous_value: Cell) -> Self {
        LastAction::SetScore {
            round_index,
            seat,
            previous_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_action_json() {
        let action = LastAction::set_score(2, Seat(1), Cell::NotEntered);
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(
            json,
            r#"{"type":"setScore","roundIndex":2,"playerIndex":1,"previousValue":-1}"#
        );

        let back: LastAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }

    #[test]
    fn test_last_action_keeps_previous_score() {
        let json = r#"{"type":"setScore","roundIndex":0,"playerIndex":0,"previousValue":35}"#;
        let action: LastAction = serde_json::from_str(json).unwrap();
        assert_eq!(action, LastAction::set_score(0, Seat(0), Cell::Scored(35)));
    }
}
