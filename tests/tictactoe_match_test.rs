//! Tests for the match engine through the public API.

use tictactoe_match::{
    Board, Mark, MatchEngine, MatchError, MatchEvent, MatchPhase, MatchSettings, MoveError,
    Player, Position, ResolutionKind, RoundResolution, Scores, Square,
};

fn started(name: &str) -> MatchEngine {
    let mut engine = MatchEngine::new();
    engine.start_match(name).expect("valid name");
    engine
}

fn play_all(engine: &mut MatchEngine, moves: &[usize]) -> Vec<MatchEvent> {
    let mut events = Vec::new();
    for &index in moves {
        events.extend(engine.play(index).expect("legal move"));
    }
    events
}

fn resolution(events: &[MatchEvent]) -> Option<&RoundResolution> {
    events.iter().find_map(|e| match e {
        MatchEvent::RoundResolved(r) => Some(r),
        _ => None,
    })
}

fn active_mark(engine: &MatchEngine) -> Option<Mark> {
    engine.active_player().map(Player::mark)
}

const X: Square = Square::Occupied(Mark::X);
const O: Square = Square::Occupied(Mark::O);
const E: Square = Square::Empty;

#[test]
fn test_start_match_capitalizes_and_resets() {
    let engine = started("ann");

    let players = engine.players().expect("players exist");
    assert_eq!(players[0].name(), "Ann");
    assert_eq!(players[0].mark(), Mark::X);
    assert_eq!(players[1].name(), "Maynard");
    assert_eq!(players[1].mark(), Mark::O);
    assert_eq!(engine.round(), Some(1));
    assert_eq!(engine.scores(), Some(Scores { x: 0, o: 0 }));
    assert_eq!(active_mark(&engine), Some(Mark::X));
}

#[test]
fn test_start_match_rejects_blank_name() {
    let mut engine = MatchEngine::new();
    assert_eq!(engine.start_match("   "), Err(MatchError::InvalidName));
    assert_eq!(engine.phase(), MatchPhase::AwaitingPlayers);
}

#[test]
fn test_top_row_win_scenario() {
    let mut engine = started("ann");
    play_all(&mut engine, &[0, 3, 1, 4]);
    assert_eq!(engine.board(), &Board::from([X, X, E, O, O, E, E, E, E]));
    assert_eq!(active_mark(&engine), Some(Mark::X));

    let events = engine.play(2).unwrap();
    let resolution = resolution(&events).expect("round resolved");
    match &resolution.kind {
        ResolutionKind::Win { winner, line, .. } => {
            assert_eq!(winner.name(), "Ann");
            assert_eq!(
                *line,
                [Position::TopLeft, Position::TopCenter, Position::TopRight]
            );
        }
        ResolutionKind::Tie => panic!("expected a win"),
    }
    assert_eq!(engine.player(Mark::X).map(Player::score), Some(1));
    assert_eq!(resolution.final_board, Board::from([X, X, X, O, O, E, E, E, E]));
}

#[test]
fn test_full_board_tie_scenario_keeps_round_number() {
    let mut engine = started("ann");
    // Round 1 to Ann, so Maynard (O) opens round 2.
    play_all(&mut engine, &[0, 3, 1, 4, 2]);
    assert_eq!(active_mark(&engine), Some(Mark::O));

    play_all(&mut engine, &[1, 0, 3, 2, 5, 4, 6, 7]);
    assert_eq!(engine.board(), &Board::from([X, O, X, O, X, O, O, X, E]));
    assert_eq!(active_mark(&engine), Some(Mark::O));

    let events = engine.play(8).unwrap();
    let resolution = resolution(&events).expect("round resolved");
    assert_eq!(resolution.kind, ResolutionKind::Tie);
    assert_eq!(resolution.round, 2);
    assert_eq!(resolution.next_round, 2);
    assert_eq!(engine.round(), Some(2));
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(active_mark(&engine), Some(Mark::O));
}

#[test]
fn test_full_board_with_line_is_a_win_not_a_tie() {
    let mut engine = started("ann");
    play_all(&mut engine, &[0, 1, 2, 3, 4, 5, 7, 6]);
    assert_eq!(engine.board(), &Board::from([X, O, X, O, X, O, O, X, E]));

    // X fills the last square and completes the 0-4-8 diagonal.
    let events = engine.play(8).unwrap();
    let resolution = resolution(&events).expect("round resolved");
    assert!(matches!(&resolution.kind, ResolutionKind::Win { winner, .. } if winner.mark() == Mark::X));
    assert_eq!(engine.round(), Some(2));
}

#[test]
fn test_occupied_square_rejected_atomically() {
    let mut engine = started("ann");
    play_all(&mut engine, &[4, 0]);
    let board = engine.board().clone();
    let (round, scores, active) = (engine.round(), engine.scores(), active_mark(&engine));

    assert_eq!(
        engine.play(4),
        Err(MatchError::InvalidMove(MoveError::SquareOccupied(Position::Center)))
    );
    assert_eq!(
        engine.play(42),
        Err(MatchError::InvalidMove(MoveError::OutOfRange(42)))
    );

    assert_eq!(engine.board(), &board);
    assert_eq!(engine.round(), round);
    assert_eq!(engine.scores(), scores);
    assert_eq!(active_mark(&engine), active);
}

#[test]
fn test_repeated_ties_never_advance_round() {
    let mut engine = started("ann");
    let tie = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    for _ in 0..3 {
        let events = play_all(&mut engine, &tie);
        assert_eq!(resolution(&events).map(|r| &r.kind), Some(&ResolutionKind::Tie));
        assert_eq!(engine.round(), Some(1));
        assert_eq!(active_mark(&engine), Some(Mark::X));
    }
    assert_eq!(engine.scores(), Some(Scores::default()));
}

#[test]
fn test_first_to_three_ends_match() {
    let mut engine = started("ann");
    // Ann wins round 1 moving first.
    play_all(&mut engine, &[0, 3, 1, 4, 2]);
    // Maynard opens rounds 2 and 3; Ann takes the top row each time.
    let o_opens = [3, 0, 4, 1, 8, 2];
    play_all(&mut engine, &o_opens);
    assert_eq!(engine.round(), Some(3));
    assert_eq!(engine.scores(), Some(Scores { x: 2, o: 0 }));

    let events = play_all(&mut engine, &o_opens);
    assert!(matches!(
        events.last(),
        Some(MatchEvent::MatchComplete { winner, scores: Scores { x: 3, o: 0 }, round: 3, .. })
            if winner.name() == "Ann"
    ));
    assert_eq!(engine.phase(), MatchPhase::MatchComplete);

    let board = engine.board().clone();
    assert_eq!(
        engine.play(5),
        Err(MatchError::NotAccepting(MatchPhase::MatchComplete))
    );
    assert_eq!(engine.board(), &board);
}

#[test]
fn test_rematch_after_menu_resets_everything() {
    let mut engine =
        MatchEngine::with_settings(MatchSettings::default().with_winning_score(1));
    engine.start_match("ann").unwrap();
    play_all(&mut engine, &[0, 3, 1, 4, 2]);
    assert_eq!(engine.return_to_menu().unwrap(), vec![MatchEvent::MenuRequested]);

    engine.start_match("bea").unwrap();
    assert_eq!(engine.player(Mark::X).map(Player::name), Some("Bea"));
    assert_eq!(engine.scores(), Some(Scores::default()));
    assert_eq!(engine.round(), Some(1));
    assert_eq!(engine.board(), &Board::new());
}

#[test]
fn test_rematch_directly_from_complete() {
    let mut engine =
        MatchEngine::with_settings(MatchSettings::default().with_winning_score(1));
    engine.start_match("ann").unwrap();
    play_all(&mut engine, &[0, 3, 1, 4, 2]);

    engine.start_match("ann").unwrap();
    assert_eq!(engine.phase(), MatchPhase::RoundInProgress);
    assert_eq!(engine.scores(), Some(Scores::default()));
}

#[test]
fn test_custom_opponent_and_plain_names() {
    let settings = MatchSettings::default()
        .with_opponent_name("Tool")
        .with_capitalize_names(false);
    let mut engine = MatchEngine::with_settings(settings);
    engine.start_match("ann").unwrap();
    assert_eq!(engine.player(Mark::X).map(Player::name), Some("ann"));
    assert_eq!(engine.player(Mark::O).map(Player::name), Some("Tool"));
}

#[test]
fn test_events_serialize_to_json() {
    let mut engine = started("ann");
    let events = engine.play_at(Position::Center).unwrap();
    let json = serde_json::to_string(&events[0]).unwrap();
    assert_eq!(json, r#"{"MarkPlaced":{"position":"Center","mark":"X"}}"#);
}
