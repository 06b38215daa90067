//! Property-based tests for round resolution and match progression.
//!
//! Increase cases locally with: PROPTEST_CASES=1000 cargo test

use proptest::prelude::*;
use std::env;
use tictactoe_match::{
    Board, Mark, MatchEngine, MatchError, MatchEvent, MatchPhase, MoveError, Player,
    ResolutionKind, Square,
};

/// Helper to get proptest config from environment
fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(128);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Independent oracle: which mark, if any, owns a full line.
fn oracle_winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    let lines = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];
    lines.iter().find_map(|&[a, b, c]| match cells[a] {
        Square::Occupied(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some(mark),
        _ => None,
    })
}

/// Any order of all nine squares.
fn square_order() -> impl Strategy<Value = Vec<usize>> {
    Just((0..9).collect::<Vec<usize>>()).prop_shuffle()
}

/// Plays squares from `order` until the round ends; returns the mover of the
/// last move and the events it produced.
fn play_round(engine: &mut MatchEngine, order: &[usize]) -> (Mark, Vec<MatchEvent>) {
    for &index in order {
        let mover = engine.active_player().map(Player::mark).expect("round in progress");
        let events = engine.play(index).expect("square is free");
        let ended = events.iter().any(|e| {
            matches!(
                e,
                MatchEvent::RoundResolved(_) | MatchEvent::MatchComplete { .. }
            )
        });
        if ended {
            return (mover, events);
        }
    }
    panic!("nine moves always end a round");
}

proptest! {
    #![proptest_config(proptest_config())]

    /// A line completed by a move is credited to its mover; a full board
    /// without a line is a tie that keeps the round number.
    #[test]
    fn prop_round_outcome_matches_oracle(order in square_order()) {
        let mut engine = MatchEngine::new();
        engine.start_match("ann").unwrap();

        let (mover, events) = play_round(&mut engine, &order);
        let resolution = events
            .iter()
            .find_map(|e| match e {
                MatchEvent::RoundResolved(r) => Some(r),
                _ => None,
            })
            .expect("first round cannot end the match");

        match &resolution.kind {
            ResolutionKind::Win { winner, loser, .. } => {
                prop_assert_eq!(oracle_winner(&resolution.final_board), Some(mover));
                prop_assert_eq!(winner.mark(), mover);
                prop_assert_eq!(engine.round(), Some(2));
                prop_assert_eq!(
                    engine.active_player().map(Player::mark),
                    Some(loser.mark())
                );
            }
            ResolutionKind::Tie => {
                prop_assert_eq!(oracle_winner(&resolution.final_board), None);
                prop_assert_eq!(resolution.final_board.empty_count(), 0);
                prop_assert_eq!(engine.round(), Some(1));
                prop_assert_eq!(engine.active_player().map(Player::mark), Some(mover));
            }
        }
    }

    /// Replaying an occupied square is always refused and changes nothing.
    #[test]
    fn prop_occupied_square_rejected_without_change(
        order in square_order(),
        played in 1usize..8,
        pick in any::<prop::sample::Index>(),
    ) {
        let mut engine = MatchEngine::new();
        engine.start_match("ann").unwrap();

        let mut placed = Vec::new();
        for &index in order.iter().take(played) {
            let events = engine.play(index).unwrap();
            placed.push(index);
            if events.iter().any(|e| matches!(e, MatchEvent::RoundResolved(_))) {
                // The board was cleared; nothing is occupied any more.
                return Ok(());
            }
        }

        let target = placed[pick.index(placed.len())];
        let board = engine.board().clone();
        let round = engine.round();
        let scores = engine.scores();
        let active = engine.active_player().map(Player::mark);

        let result = engine.play(target);
        prop_assert!(matches!(
            result,
            Err(MatchError::InvalidMove(MoveError::SquareOccupied(p))) if p.to_index() == target
        ));
        prop_assert_eq!(engine.board(), &board);
        prop_assert_eq!(engine.round(), round);
        prop_assert_eq!(engine.scores(), scores);
        prop_assert_eq!(engine.active_player().map(Player::mark), active);
    }

    /// Over a whole match: round = 1 + rounds won, the loser opens the next
    /// round, and the match ends exactly when a score reaches three.
    #[test]
    fn prop_match_progression(orders in prop::collection::vec(square_order(), 64)) {
        let mut engine = MatchEngine::new();
        engine.start_match("ann").unwrap();

        for order in &orders {
            let (mover, events) = play_round(&mut engine, order);
            let scores = engine.scores().expect("match started");

            if let Some(MatchEvent::MatchComplete { winner, .. }) = events.last() {
                prop_assert_eq!(winner.mark(), mover);
                prop_assert_eq!(scores.of(mover), 3);
                prop_assert!(scores.of(mover.opponent()) < 3);
                prop_assert_eq!(engine.phase(), MatchPhase::MatchComplete);
                prop_assert!(engine.play(order[0]).is_err());
                return Ok(());
            }

            prop_assert_eq!(engine.phase(), MatchPhase::RoundInProgress);
            prop_assert_eq!(engine.round(), Some(scores.total() + 1));
            prop_assert!(scores.x < 3 && scores.o < 3);
            prop_assert_eq!(engine.board(), &Board::new());
        }

        // Sixty-four rounds of random play without three wins is possible
        // only through ties; the state must still be consistent.
        prop_assert_eq!(engine.phase(), MatchPhase::RoundInProgress);
    }
}
