//! Property-based tests for the scoring rules.

use proptest::prelude::*;

use least_count::core::{Game, GameId, Player, PlayerId, Seat, Timestamp};
use least_count::rules::{Outcome, Standing, ELIMINATION_THRESHOLD, WARNING_THRESHOLD};

/// One score entry: (round, seat, score). Indices are reduced modulo the
/// game's dimensions when applied.
fn entries() -> impl Strategy<Value = Vec<(usize, usize, u32)>> {
    prop::collection::vec((0usize..6, 0usize..6, 0u32..120), 0..40)
}

fn build(player_count: usize, round_count: usize, entries: &[(usize, usize, u32)]) -> Game {
    let players = (0..player_count).map(|i| Player::new(PlayerId::new(format!("p{i}")), "x"));
    let mut game = Game::new(GameId::new("g"), players, Timestamp(0));
    for r in 1..round_count {
        game = game.with_round_added(Timestamp(r as u64));
    }
    for (i, &(r, p, score)) in entries.iter().enumerate() {
        game = game.with_score(r % round_count, Seat(p % player_count), score, Timestamp(100 + i as u64));
    }
    game
}

proptest! {
    /// Property: re-deriving completion twice in a row changes nothing.
    #[test]
    fn prop_settle_is_idempotent(
        players in 1usize..6,
        rounds in 1usize..5,
        entries in entries(),
    ) {
        let game = build(players, rounds, &entries);
        let once = game.settled();
        prop_assert_eq!(&once, &game);
        prop_assert_eq!(once.settled(), once);
    }

    /// Property: stored completion always matches the totals after a write.
    #[test]
    fn prop_outcome_matches_totals(
        players in 1usize..6,
        rounds in 1usize..5,
        entries in entries(),
    ) {
        let game = build(players, rounds, &entries);
        prop_assert_eq!(game.outcome(), Outcome::derive(&game));
        if let Some(id) = game.winner_id() {
            prop_assert!(game.players().iter().any(|p| &p.id == id));
        }
        let active = game.active_players().len();
        if !entries.is_empty() {
            prop_assert_eq!(game.is_finished(), active == 0 || (active == 1 && players > 1));
        }
    }

    /// Property: undo restores the cell written by the preceding set, clears
    /// the record, and a second undo is a no-op.
    #[test]
    fn prop_undo_inverts_set(
        players in 1usize..6,
        rounds in 1usize..5,
        entries in entries(),
        (r, p, score) in (0usize..6, 0usize..6, 0u32..400),
    ) {
        let base = build(players, rounds, &entries);
        let (r, seat) = (r % rounds, Seat(p % players));
        let before = base.cell(r, seat);

        let set = base.with_score(r, seat, score, Timestamp(10_000));
        let undone = set.with_last_score_undone(Timestamp(10_001));

        prop_assert_eq!(undone.cell(r, seat), before);
        prop_assert_eq!(undone.last_action(), None);
        prop_assert_eq!(undone.rounds(), base.rounds());
        prop_assert_eq!(undone.outcome(), Outcome::derive(&base));
        prop_assert_eq!(undone.with_last_score_undone(Timestamp(10_002)), undone.clone());
    }

    /// Property: totals never drop as new non-negative scores fill blank cells.
    #[test]
    fn prop_total_is_monotone(scores in prop::collection::vec(0u32..100, 1..12)) {
        let players = [Player::new(PlayerId::new("a"), "A"), Player::new(PlayerId::new("b"), "B")];
        let mut game = Game::new(GameId::new("g"), players, Timestamp(0));
        let mut last = 0;
        for (i, score) in scores.into_iter().enumerate() {
            if i > 0 {
                game = game.with_round_added(Timestamp(i as u64));
            }
            game = game.with_score(i, Seat(0), score, Timestamp(i as u64));
            let total = game.player_total(Seat(0));
            prop_assert!(total >= last);
            prop_assert_eq!(total, last + score);
            last = total;
        }
    }

    /// Property: warning and elimination are exclusive and threshold-exact.
    #[test]
    fn prop_standing_thresholds(total in 0u32..1_000) {
        let standing = Standing::for_total(total);
        prop_assert_eq!(standing.is_eliminated(), total >= ELIMINATION_THRESHOLD);
        prop_assert_eq!(
            standing.is_warning(),
            (WARNING_THRESHOLD..ELIMINATION_THRESHOLD).contains(&total)
        );
        prop_assert!(!(standing.is_warning() && standing.is_eliminated()));
    }

    /// Property: every round always has one cell per player, and
    /// `updated_at` never runs backwards.
    #[test]
    fn prop_shape_and_clock_invariants(
        players in 0usize..6,
        ops in prop::collection::vec((any::<bool>(), 0usize..6, 0usize..6, 0u32..300, 0u64..50), 0..30),
    ) {
        let roster = (0..players).map(|i| Player::new(PlayerId::new(format!("p{i}")), "x"));
        let mut game = Game::new(GameId::new("g"), roster, Timestamp(25));
        for (add, r, p, score, now) in ops {
            let previous = game.updated_at();
            game = if add || players == 0 {
                game.with_round_added(Timestamp(now))
            } else {
                game.with_score(r % game.round_count(), Seat(p % players), score, Timestamp(now))
            };
            prop_assert!(game.updated_at() >= previous);
            prop_assert!(game.rounds().iter().all(|round| round.len() == players));
        }
    }

    /// Property: a snapshot survives JSON unchanged.
    #[test]
    fn prop_json_round_trip(
        players in 1usize..6,
        rounds in 1usize..5,
        entries in entries(),
    ) {
        let game = build(players, rounds, &entries);
        let json = serde_json::to_string(&game).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, game);
    }
}
