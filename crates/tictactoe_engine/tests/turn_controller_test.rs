//! Tests for the turn-sequencing state machine.

use tictactoe_engine::{
    EventLog, FixedStarter, GameConfig, LineKind, Marker, Phase, Player, RandomStarter,
    ScriptedStarter, Seat, TurnController, TurnOutcome, ViewEvent,
};

type Game = TurnController<EventLog, FixedStarter>;

fn started(seat: Seat) -> Game {
    let mut game = TurnController::new(GameConfig::default(), EventLog::new(), FixedStarter(seat));
    game.start_game("John", "Anna");
    game
}

/// Alternating moves (X first) ending in
///
/// ```text
/// X O X
/// X O O
/// O X X
/// ```
const DRAW_SEQUENCE: [(usize, usize); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 1),
    (1, 0),
    (1, 2),
    (2, 1),
    (2, 0),
    (2, 2),
];

/// X takes the main diagonal on the fifth move.
const DIAGONAL_WIN: [(usize, usize); 5] = [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)];

#[test]
fn test_full_board_without_winner_stops_game() {
    let mut game = started(Seat::First);

    for (i, (x, y)) in DRAW_SEQUENCE.iter().copied().enumerate() {
        let outcome = game.make_turn(x, y);
        if i < DRAW_SEQUENCE.len() - 1 {
            assert_eq!(outcome, TurnOutcome::Continue, "move {i}");
            assert!(!game.is_stopped());
        } else {
            assert_eq!(outcome, TurnOutcome::Drawn);
        }
    }

    assert!(game.is_stopped());
    assert_eq!(game.phase(), Phase::Drawn);
    assert_eq!(game.view().draws(), 1);
    assert_eq!(game.view().wins(), 0);

    let board = game.board().clone();
    for x in 0..4 {
        for y in 0..4 {
            assert_eq!(game.make_turn(x, y), TurnOutcome::Ignored);
        }
    }
    assert_eq!(game.board(), &board);
}

#[test]
fn test_diagonal_win_notifies_once() {
    let mut game = started(Seat::First);

    let outcomes: Vec<_> = DIAGONAL_WIN
        .iter()
        .map(|&(x, y)| game.make_turn(x, y))
        .collect();
    assert_eq!(
        outcomes.last(),
        Some(&TurnOutcome::Won(Player::new("John", Marker::X)))
    );
    assert!(game.is_stopped());
    assert_eq!(game.phase(), Phase::Won);

    let wins: Vec<_> = game
        .view()
        .events()
        .iter()
        .filter_map(|event| match event {
            ViewEvent::Win { winner, line } => Some((winner.clone(), line.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(wins.len(), 1);
    let (winner, line) = &wins[0];
    assert_eq!(winner.name(), "John");
    assert_eq!(line.kind(), LineKind::MainDiagonal);
    assert_eq!(line.cells().len(), 3);
    assert!(line.cells().iter().all(|c| c.marker() == Some(*winner.marker())));
}

#[test]
fn test_winning_move_announces_next_player_before_win() {
    let mut game = started(Seat::First);
    for (x, y) in DIAGONAL_WIN {
        game.make_turn(x, y);
    }

    let tail: Vec<_> = game.view().events().iter().rev().take(4).rev().cloned().collect();
    assert!(matches!(tail[0], ViewEvent::CellMarked { .. }));
    assert_eq!(
        tail[1],
        ViewEvent::TurnChanged {
            next: Player::new("Anna", Marker::O)
        }
    );
    assert!(matches!(tail[2], ViewEvent::Win { .. }));
    assert_eq!(tail[3], ViewEvent::GameEnd);
    assert_eq!(game.current_player_name(), Some("Anna"));
}

#[test]
fn test_stopped_controller_is_idempotent() {
    let mut game = started(Seat::First);
    for (x, y) in DIAGONAL_WIN {
        game.make_turn(x, y);
    }
    let events = game.view().events().len();
    let board = game.board().clone();

    for _ in 0..10 {
        assert_eq!(game.make_turn(2, 0), TurnOutcome::Ignored);
        assert_eq!(game.make_turn(9, 9), TurnOutcome::Ignored);
    }
    assert_eq!(game.view().events().len(), events);
    assert_eq!(game.board(), &board);
}

#[test]
fn test_second_seat_can_open() {
    let mut game = started(Seat::Second);
    assert_eq!(game.current_player_name(), Some("Anna"));
    game.make_turn(1, 1);
    assert_eq!(game.board().cell(1, 1).unwrap().marker(), Some(Marker::O));
    assert_eq!(game.current_player_name(), Some("John"));
}

#[test]
fn test_o_player_wins() {
    let mut game = started(Seat::Second);
    // O: (2,0) (2,1) (2,2); X: (0,0) (1,1)
    for (x, y) in [(2, 0), (0, 0), (2, 1), (1, 1)] {
        assert_eq!(game.make_turn(x, y), TurnOutcome::Continue);
    }
    assert_eq!(
        game.make_turn(2, 2),
        TurnOutcome::Won(Player::new("Anna", Marker::O))
    );
}

#[test]
fn test_restart_resets_board_and_rerolls_starter() {
    let mut game = TurnController::new(
        GameConfig::default(),
        EventLog::new(),
        ScriptedStarter::new(vec![Seat::First, Seat::Second]),
    );
    game.start_game("John", "Anna");
    assert_eq!(game.current_player_name(), Some("John"));
    for (x, y) in DIAGONAL_WIN {
        game.make_turn(x, y);
    }
    assert!(game.is_stopped());

    game.restart_game().unwrap();
    assert_eq!(game.phase(), Phase::InProgress);
    assert!(!game.is_stopped());
    assert_eq!(game.board().empty_cells().count(), 9);
    assert_eq!(game.current_player_name(), Some("Anna"));
    assert_eq!(game.players().unwrap()[0].name(), "John");
    assert_eq!(game.make_turn(0, 0), TurnOutcome::Continue);

    let starts = game
        .view()
        .events()
        .iter()
        .filter(|e| **e == ViewEvent::GameStart)
        .count();
    assert_eq!(starts, 2);
}

#[test]
fn test_restart_mid_game() {
    let mut game = started(Seat::First);
    game.make_turn(0, 0);
    game.make_turn(1, 1);
    game.restart_game().unwrap();
    assert_eq!(game.board().empty_cells().count(), 9);
    assert_eq!(game.current_player_name(), Some("John"));
}

#[test]
fn test_sessions_are_independent() {
    let mut a = started(Seat::First);
    let mut b = started(Seat::First);
    a.make_turn(0, 0);
    assert!(b.board().is_empty_at(0, 0));
    b.make_turn(2, 2);
    assert!(a.board().is_empty_at(2, 2));
}

#[test]
fn test_larger_board_game() {
    let config = GameConfig::with_board_size(4).unwrap();
    let mut game = TurnController::new(config, EventLog::new(), FixedStarter(Seat::First));
    game.start_game("John", "Anna");
    // X fills column 0, O fills column 3
    for x in 0..3 {
        assert_eq!(game.make_turn(x, 0), TurnOutcome::Continue);
        assert_eq!(game.make_turn(x, 3), TurnOutcome::Continue);
    }
    match game.make_turn(3, 0) {
        TurnOutcome::Won(winner) => assert_eq!(*winner.marker(), Marker::X),
        other => panic!("Expected win, got {other:?}"),
    }
}

#[test]
fn test_seeded_random_starter_drives_controller() {
    let mut game = TurnController::new(
        GameConfig::default(),
        EventLog::new(),
        RandomStarter::seeded(3),
    );
    game.start_game("John", "Anna");
    let starter = game.current_player_name().map(str::to_string);
    assert!(matches!(starter.as_deref(), Some("John") | Some("Anna")));

    let mut replay = TurnController::new(
        GameConfig::default(),
        EventLog::new(),
        RandomStarter::seeded(3),
    );
    replay.start_game("John", "Anna");
    assert_eq!(replay.current_player_name(), starter.as_deref());
}

#[test]
fn test_view_borrowed_mutably() {
    let mut log = EventLog::new();
    {
        let mut game = TurnController::new(GameConfig::default(), &mut log, FixedStarter(Seat::First));
        game.start_game("John", "Anna");
        game.make_turn(0, 0);
    }
    assert_eq!(log.events().len(), 4);
}
