//! Score-entry flow helpers.
//!
//! After a score is entered, a scorecard moves on to the next player who
//! still owes a score for the round, or opens a new round once the last
//! one is done. These helpers answer those questions from a snapshot.

use crate::core::{Game, Seat};

/// Where score entry should go after a cell is filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextCell {
    /// A later, still-active seat in the same round has no score yet.
    Cell { round_index: usize, seat: Seat },
    /// The round is complete and is the newest one; a new round is due.
    RoundFinished,
    /// Nothing to advance to.
    Stay,
}

/// Find the next cell to fill after `after_seat` in `round_index`.
///
/// Only seats after `after_seat` are considered. Eliminated players are
/// skipped.
#[must_use]
pub fn next_open_cell(game: &Game, round_index: usize, after_seat: Seat) -> NextCell {
    let Some(round) = game.round(round_index) else {
        return NextCell::Stay;
    };

    let open = round
        .iter()
        .skip(after_seat.index() + 1)
        .find(|&(seat, cell)| !cell.is_entered() && !game.is_eliminated(seat));

    if let Some((seat, _)) = open {
        return NextCell::Cell { round_index, seat };
    }
    if game.is_round_complete(round_index) && round_index == game.last_round_index() {
        return NextCell::RoundFinished;
    }
    NextCell::Stay
}

/// Check whether a new round should be appended after scoring `round_index`.
///
/// True when the game is still open, the round is complete and it is the
/// newest round.
#[must_use]
pub fn should_add_round(game: &Game, round_index: usize) -> bool {
    !game.is_finished()
        && round_index == game.last_round_index()
        && game.is_round_complete(round_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameId, Player, PlayerId, Timestamp};

    fn game(n: usize) -> Game {
        let players = (0..n).map(|i| Player::new(PlayerId::new(format!("p{}", i)), "x"));
        Game::new(GameId::new("g"), players, Timestamp(0))
    }

    #[test]
    fn test_advances_within_round() {
        let g = game(3).with_score(0, Seat(0), 5, Timestamp(1));
        assert_eq!(
            next_open_cell(&g, 0, Seat(0)),
            NextCell::Cell {
                round_index: 0,
                seat: Seat(1)
            }
        );
    }

    #[test]
    fn test_skips_eliminated_and_filled_seats() {
        let g = game(4)
            .with_score(0, Seat(1), 250, Timestamp(1))
            .with_round_added(Timestamp(2))
            .with_score(1, Seat(2), 7, Timestamp(3));

        assert_eq!(
            next_open_cell(&g, 1, Seat(0)),
            NextCell::Cell {
                round_index: 1,
                seat: Seat(3)
            }
        );
    }

    #[test]
    fn test_round_finished_on_last_round() {
        let g = game(2)
            .with_score(0, Seat(0), 5, Timestamp(1))
            .with_score(0, Seat(1), 6, Timestamp(2));

        assert_eq!(next_open_cell(&g, 0, Seat(1)), NextCell::RoundFinished);
        assert!(should_add_round(&g, 0));
    }

    #[test]
    fn test_stays_when_earlier_seat_is_open() {
        let g = game(2).with_score(0, Seat(1), 6, Timestamp(1));
        assert_eq!(next_open_cell(&g, 0, Seat(1)), NextCell::Stay);
        assert!(!should_add_round(&g, 0));
    }

    #[test]
    fn test_stays_on_older_complete_round() {
        let g = game(2)
            .with_score(0, Seat(0), 5, Timestamp(1))
            .with_score(0, Seat(1), 6, Timestamp(2))
            .with_round_added(Timestamp(3));

        assert_eq!(next_open_cell(&g, 0, Seat(1)), NextCell::Stay);
        assert!(!should_add_round(&g, 0));
    }

    #[test]
    fn test_no_new_round_for_finished_game() {
        let g = game(2)
            .with_score(0, Seat(0), 5, Timestamp(1))
            .with_score(0, Seat(1), 206, Timestamp(2));

        assert!(g.is_finished());
        assert!(g.is_round_complete(0));
        assert!(!should_add_round(&g, 0));
    }

    #[test]
    fn test_missing_round() {
        assert_eq!(next_open_cell(&game(2), 5, Seat(0)), NextCell::Stay);
    }
}
