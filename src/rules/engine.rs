//! The scorekeeping engine.
//!
//! `Scorekeeper` is the entry point collaborators call. It stamps the
//! current time and fresh identifiers onto the pure transitions of
//! [`Game`] and checks indices before touching the round table.
//!
//! ## Implementation Notes
//!
//! - Every operation takes a snapshot by reference and returns a new one.
//! - The engine holds no game state. Callers decide which snapshot is
//!   current and serialize access to it.
//! - Completion is re-derived on every score mutation, never patched.

use thiserror::Error;
use tracing::{debug, info};

use crate::core::{Clock, Game, IdSource, Player, Seat, SystemClock};
use crate::rules::Outcome;

/// Rejected engine calls.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("round {round_index} does not exist (game has {round_count} rounds)")]
    RoundOutOfRange {
        round_index: usize,
        round_count: usize,
    },
    #[error("{seat} does not exist (game has {player_count} players)")]
    SeatOutOfRange { seat: Seat, player_count: usize },
}

/// Applies the game rules with a clock and an id source.
///
/// ```
/// use least_count::core::{ManualClock, Seat, Timestamp};
/// use least_count::rules::Scorekeeper;
///
/// let mut keeper = Scorekeeper::seeded(ManualClock::new(Timestamp(1_000)), 7);
/// let game = keeper.create(["Ann", "Bob"]);
/// let game = keeper.set_score(&game, 0, Seat::new(0), 25).unwrap();
///
/// assert_eq!(game.player_total(Seat::new(0)), 25);
/// ```
#[derive(Debug)]
pub struct Scorekeeper<C: Clock = SystemClock> {
    clock: C,
    ids: IdSource,
}

impl Scorekeeper<SystemClock> {
    /// Engine on the system clock with entropy-seeded ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Scorekeeper<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Scorekeeper<C> {
    /// Engine on a custom clock with entropy-seeded ids.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            ids: IdSource::from_entropy(),
        }
    }

    /// Fully deterministic engine.
    #[must_use]
    pub fn seeded(clock: C, seed: u64) -> Self {
        Self {
            clock,
            ids: IdSource::new(seed),
        }
    }

    /// The engine's clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Start a game from player names, in the given order.
    ///
    /// Names are trimmed. No other validation happens here: fewer than two
    /// players or duplicate names still produce a game. Run names through
    /// [`Roster`](crate::setup::Roster) first to enforce setup rules.
    pub fn create<I, S>(&mut self, player_names: I) -> Game
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let now = self.clock.now();
        let players: Vec<Player> = player_names
            .into_iter()
            .map(|name| Player::new(self.ids.player_id(now), name.as_ref()))
            .collect();
        let game = Game::new(self.ids.game_id(now), players, now);

        debug!(game_id = %game.id(), players = game.player_count(), "created game");
        game
    }

    /// Append an empty round.
    #[must_use]
    pub fn add_round(&self, game: &Game) -> Game {
        let next = game.with_round_added(self.clock.now());
        debug!(game_id = %next.id(), rounds = next.round_count(), "added round");
        next
    }

    /// Record a score, replacing any value already in the cell.
    pub fn set_score(
        &self,
        game: &Game,
        round_index: usize,
        seat: Seat,
        score: u32,
    ) -> Result<Game, RulesError> {
        check_indices(game, round_index, seat)?;

        let next = game.with_score(round_index, seat, score, self.clock.now());
        debug!(
            game_id = %next.id(),
            round_index,
            seat = seat.index(),
            score,
            total = next.player_total(seat),
            "set score"
        );
        log_transition(game, &next);
        Ok(next)
    }

    /// Revert the most recent score entry. A no-op when nothing is pending.
    #[must_use]
    pub fn undo_last_score(&self, game: &Game) -> Game {
        if game.last_action().is_none() {
            debug!(game_id = %game.id(), "nothing to undo");
            return game.clone();
        }

        let next = game.with_last_score_undone(self.clock.now());
        debug!(game_id = %next.id(), outcome = %next.outcome(), "undid last score");
        log_transition(game, &next);
        next
    }
}

fn check_indices(game: &Game, round_index: usize, seat: Seat) -> Result<(), RulesError> {
    if round_index >= game.round_count() {
        return Err(RulesError::RoundOutOfRange {
            round_index,
            round_count: game.round_count(),
        });
    }
    if seat.index() >= game.player_count() {
        return Err(RulesError::SeatOutOfRange {
            seat,
            player_count: game.player_count(),
        });
    }
    Ok(())
}

fn log_transition(before: &Game, after: &Game) {
    let (was, now) = (before.outcome(), after.outcome());
    if was == now {
        return;
    }
    match &now {
        Outcome::Won(_) => {
            let name = after.winner().map(|p| p.name.as_str()).unwrap_or_default();
            info!(game_id = %after.id(), winner = name, "game won");
        }
        Outcome::AllOut => info!(game_id = %after.id(), "every player eliminated"),
        Outcome::Open => info!(game_id = %after.id(), previous = %was, "game reopened"),
    }
}
