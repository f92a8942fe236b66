//! The game snapshot.
//!
//! ## Game
//!
//! The aggregate root: players, the round table, timestamps, cached
//! completion status and the single-slot undo record.
//!
//! Snapshots are values. Every transition returns a new `Game` and leaves
//! the receiver untouched, so a caller holding an old snapshot never
//! observes a later mutation. Players and rounds live in `im` vectors,
//! making the copy O(1) with structural sharing.
//!
//! ## Invariants
//!
//! - every round has exactly `player_count()` cells
//! - `is_finished`/`winner_id` always equal [`Outcome::derive`] of the
//!   current totals after a score mutation; nothing sets them directly
//! - `updated_at` never decreases
//! - the round count only grows
//!
//! Deserialization checks the shape invariants before a snapshot is handed
//! out (see [`InvalidSnapshot`]), so a loaded game is as safe to drive as
//! one built through the transitions.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::LastAction;
use super::cell::{Cell, Round};
use super::clock::Timestamp;
use super::id::{GameId, PlayerId};
use super::player::{Player, Seat, SeatedPlayer};
use crate::rules::{Outcome, Standing};

/// One immutable value of a game.
///
/// Serializes to camelCase JSON:
///
/// ```json
/// {"id":"..","players":[{"id":"..","name":"Ann"}],"rounds":[[-1]],
///  "createdAt":1,"updatedAt":1,"isFinished":false,"winnerId":null,"lastAction":null}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "GameRepr")]
pub struct Game {
    id: GameId,
    players: Vector<Player>,
    rounds: Vector<Round>,
    created_at: Timestamp,
    updated_at: Timestamp,
    is_finished: bool,
    winner_id: Option<PlayerId>,
    last_action: Option<LastAction>,
}

/// Structural problems found while loading a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidSnapshot {
    #[error("round {round_index} has {len} cells but the game has {player_count} players")]
    RoundWidth {
        round_index: usize,
        len: usize,
        player_count: usize,
    },
    #[error("game has no rounds")]
    NoRounds,
    #[error("winner {0} is not a player in this game")]
    UnknownWinner(PlayerId),
    #[error("winner {0} recorded on an unfinished game")]
    WinnerWhileOpen(PlayerId),
    #[error("last action points at round {round_index}, {seat}, outside the round table")]
    LastActionOutOfRange { round_index: usize, seat: Seat },
    #[error("updatedAt {updated_at} is before createdAt {created_at}")]
    UpdatedBeforeCreated {
        created_at: Timestamp,
        updated_at: Timestamp,
    },
}

/// Wire form of [`Game`], checked by `TryFrom` before use.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameRepr {
    id: GameId,
    players: Vector<Player>,
    rounds: Vector<Round>,
    created_at: Timestamp,
    updated_at: Timestamp,
    is_finished: bool,
    winner_id: Option<PlayerId>,
    last_action: Option<LastAction>,
}

impl TryFrom<GameRepr> for Game {
    type Error = InvalidSnapshot;

    fn try_from(repr: GameRepr) -> Result<Self, Self::Error> {
        let player_count = repr.players.len();

        if repr.rounds.is_empty() {
            return Err(InvalidSnapshot::NoRounds);
        }
        if let Some((round_index, round)) = repr
            .rounds
            .iter()
            .enumerate()
            .find(|(_, round)| round.len() != player_count)
        {
            return Err(InvalidSnapshot::RoundWidth {
                round_index,
                len: round.len(),
                player_count,
            });
        }
        if let Some(winner_id) = &repr.winner_id {
            if !repr.players.iter().any(|p| &p.id == winner_id) {
                return Err(InvalidSnapshot::UnknownWinner(winner_id.clone()));
            }
            if !repr.is_finished {
                return Err(InvalidSnapshot::WinnerWhileOpen(winner_id.clone()));
            }
        }
        if let Some(LastAction::SetScore {
            round_index, seat, ..
        }) = repr.last_action
        {
            if round_index >= repr.rounds.len() || seat.index() >= player_count {
                return Err(InvalidSnapshot::LastActionOutOfRange { round_index, seat });
            }
        }
        if repr.updated_at < repr.created_at {
            return Err(InvalidSnapshot::UpdatedBeforeCreated {
                created_at: repr.created_at,
                updated_at: repr.updated_at,
            });
        }

        Ok(Self {
            id: repr.id,
            players: repr.players,
            rounds: repr.rounds,
            created_at: repr.created_at,
            updated_at: repr.updated_at,
            is_finished: repr.is_finished,
            winner_id: repr.winner_id,
            last_action: repr.last_action,
        })
    }
}

impl Game {
    /// Create a game with a single empty round.
    ///
    /// Any number of players is accepted, including zero or duplicates;
    /// roster checks belong to [`Roster`](crate::setup::Roster).
    #[must_use]
    pub fn new(id: GameId, players: impl IntoIterator<Item = Player>, now: Timestamp) -> Self {
        let players: Vector<Player> = players.into_iter().collect();
        let first_round = Round::empty(players.len());

        Self {
            id,
            players,
            rounds: Vector::unit(first_round),
            created_at: now,
            updated_at: now,
            is_finished: false,
            winner_id: None,
            last_action: None,
        }
    }

    // === Snapshot fields ===

    #[must_use]
    pub fn id(&self) -> &GameId {
        &self.id
    }

    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    /// Get the player at `seat`.
    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat.index())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Iterate over all seats.
    pub fn seats(&self) -> impl Iterator<Item = Seat> {
        Seat::all(self.player_count())
    }

    #[must_use]
    pub fn rounds(&self) -> &Vector<Round> {
        &self.rounds
    }

    #[must_use]
    pub fn round(&self, round_index: usize) -> Option<&Round> {
        self.rounds.get(round_index)
    }

    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Index of the newest round.
    #[must_use]
    pub fn last_round_index(&self) -> usize {
        self.rounds.len().saturating_sub(1)
    }

    /// Get a single cell.
    #[must_use]
    pub fn cell(&self, round_index: usize, seat: Seat) -> Option<Cell> {
        self.round(round_index).and_then(|round| round.get(seat))
    }

    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    #[must_use]
    pub fn winner_id(&self) -> Option<&PlayerId> {
        self.winner_id.as_ref()
    }

    /// The pending undo record, if any.
    #[must_use]
    pub fn last_action(&self) -> Option<&LastAction> {
        self.last_action.as_ref()
    }

    /// Completion status as stored in the snapshot.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::from_fields(self.is_finished, self.winner_id.as_ref())
    }

    // === Transitions ===

    /// Append an empty round.
    ///
    /// Finished games accept new rounds too; whether to offer one is up to
    /// the caller.
    #[must_use]
    pub fn with_round_added(&self, now: Timestamp) -> Self {
        let mut next = self.clone();
        next.rounds.push_back(Round::empty(self.player_count()));
        next.touch(now);
        next
    }

    /// Record `score` for `seat` in round `round_index`.
    ///
    /// The cell's previous value becomes the pending undo record, replacing
    /// any earlier one. Completion is re-derived afterwards.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range. Use
    /// [`Scorekeeper::set_score`](crate::rules::Scorekeeper::set_score) for
    /// a checked variant.
    #[must_use]
    pub fn with_score(&self, round_index: usize, seat: Seat, score: u32, now: Timestamp) -> Self {
        let mut next = self.clone();
        let previous_value = next.rounds[round_index].replace(seat, Cell::Scored(score));
        next.last_action = Some(LastAction::set_score(round_index, seat, previous_value));
        next.touch(now);
        next.settle();
        next
    }

    /// Revert the pending score entry.
    ///
    /// Without a pending record this returns an unchanged copy. Otherwise
    /// the cell is restored, the record is consumed, the game is reopened
    /// and completion is re-derived from the restored totals.
    #[must_use]
    pub fn with_last_score_undone(&self, now: Timestamp) -> Self {
        let Some(LastAction::SetScore {
            round_index,
            seat,
            previous_value,
        }) = self.last_action
        else {
            return self.clone();
        };

        let mut next = self.clone();
        next.rounds[round_index].replace(seat, previous_value);
        next.last_action = None;
        next.touch(now);
        next.is_finished = false;
        next.winner_id = None;
        next.settle();
        next
    }

    /// Return a copy with completion re-derived from the current totals.
    ///
    /// Idempotent: settling a settled game changes nothing.
    #[must_use]
    pub fn settled(&self) -> Self {
        let mut next = self.clone();
        next.settle();
        next
    }

    fn settle(&mut self) {
        let outcome = Outcome::derive(self);
        self.is_finished = outcome.is_finished();
        self.winner_id = outcome.winner_id().cloned();
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = self.updated_at.max(now);
    }

    // === Derived queries ===

    /// Sum of a player's recorded scores across all rounds.
    ///
    /// Unset cells and zeros both add nothing.
    #[must_use]
    pub fn player_total(&self, seat: Seat) -> u32 {
        self.rounds
            .iter()
            .filter_map(|round| round.get(seat))
            .fold(0u32, |sum, cell| sum.saturating_add(cell.contribution()))
    }

    /// All totals in seat order.
    #[must_use]
    pub fn totals(&self) -> Vec<u32> {
        self.seats().map(|seat| self.player_total(seat)).collect()
    }

    #[must_use]
    pub fn standing(&self, seat: Seat) -> Standing {
        Standing::for_total(self.player_total(seat))
    }

    /// Total at or above the elimination threshold.
    #[must_use]
    pub fn is_eliminated(&self, seat: Seat) -> bool {
        self.standing(seat).is_eliminated()
    }

    /// Total in the warning band below elimination.
    #[must_use]
    pub fn is_warning(&self, seat: Seat) -> bool {
        self.standing(seat).is_warning()
    }

    /// Players not yet eliminated, in seat order.
    #[must_use]
    pub fn active_players(&self) -> Vec<SeatedPlayer<'_>> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, player)| SeatedPlayer {
                seat: Seat(i),
                player,
            })
            .filter(|seated| !self.is_eliminated(seated.seat))
            .collect()
    }

    /// Check whether every still-active player has a score in the round.
    ///
    /// Unset cells of eliminated players do not hold a round open. An
    /// out-of-range round is never complete.
    #[must_use]
    pub fn is_round_complete(&self, round_index: usize) -> bool {
        let Some(round) = self.round(round_index) else {
            return false;
        };
        round
            .iter()
            .all(|(seat, cell)| cell.is_entered() || self.is_eliminated(seat))
    }

    /// Resolve the stored winner id to a player.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        let winner_id = self.winner_id.as_ref()?;
        self.players.iter().find(|p| &p.id == winner_id)
    }

    /// Active players ordered by total, lowest first.
    ///
    /// Ties keep seat order. Eliminated players are left out.
    #[must_use]
    pub fn rankings(&self) -> Vec<SeatedPlayer<'_>> {
        let mut ranked = self.active_players();
        ranked.sort_by_key(|seated| self.player_total(seated.seat));
        ranked
    }

    /// The active player with the lowest total.
    #[must_use]
    pub fn leader(&self) -> Option<SeatedPlayer<'_>> {
        self.rankings().into_iter().next()
    }

    /// Every player ordered by total, lowest first, eliminated or not.
    ///
    /// This is the order used for game summaries in a history list.
    #[must_use]
    pub fn players_by_total(&self) -> Vec<SeatedPlayer<'_>> {
        let mut all: Vec<_> = self
            .players
            .iter()
            .enumerate()
            .map(|(i, player)| SeatedPlayer {
                seat: Seat(i),
                player,
            })
            .collect();
        all.sort_by_key(|seated| self.player_total(seated.seat));
        all
    }

    /// Sum of the recorded scores in one round. `None` for a missing round.
    #[must_use]
    pub fn round_total(&self, round_index: usize) -> Option<u32> {
        let round = self.round(round_index)?;
        Some(
            round
                .iter()
                .fold(0u32, |sum, (_, cell)| sum.saturating_add(cell.contribution())),
        )
    }

    /// Time between creation and the latest change.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(
            self.updated_at
                .millis()
                .saturating_sub(self.created_at.millis()),
        )
    }
}
