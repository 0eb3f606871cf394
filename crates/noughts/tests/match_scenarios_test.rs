//! End-to-end matches driven the way a frontend drives them.

use noughts::{Board, Cell, Game, GameStatus, MoveError, Position, Symbol};

fn new_match() -> Game {
    Game::with_names("Linus", "Emily")
}

/// Plays each move with `make_move` followed by `switch_current_player`,
/// stopping the turn hand-off once the match is over.
fn play(game: &mut Game, moves: &[usize]) {
    for &position in moves {
        game.make_move(position).expect("legal move");
        if !game.is_over() {
            game.switch_current_player();
        }
    }
}

#[test]
fn test_top_row_victory() {
    let mut game = new_match();
    play(&mut game, &[0, 3, 1, 4]);
    assert!(!game.has_victory());

    play(&mut game, &[2]);
    assert!(game.has_victory());
    assert!(!game.has_draw());
    assert_eq!(game.status(), &GameStatus::Won(Symbol::X));
    assert_eq!(game.winner().map(|p| p.name().as_str()), Some("Linus"));
}

#[test]
fn test_left_column_victory() {
    let mut game = new_match();
    play(&mut game, &[0, 1, 3, 4, 6]);

    assert!(game.has_victory());
    assert_eq!(
        game.winning_line().map(|line| line.0),
        Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
    );
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = new_match();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(game.board().is_full());
    assert!(game.has_draw());
    assert!(!game.has_victory());
    assert_eq!(game.status(), &GameStatus::Drawn);
    assert!(game.winner().is_none());
}

#[test]
fn test_last_mark_completing_diagonal_is_victory_not_draw() {
    // X ends on 0, 2, 4, 7, 8: the final mark completes 0-4-8.
    let mut game = new_match();
    play(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);

    assert!(game.board().is_full());
    assert!(game.has_victory());
    assert!(!game.has_draw());
    assert_eq!(game.status(), &GameStatus::Won(Symbol::X));
}

#[test]
fn test_marking_same_cell_twice() {
    let mut board = Board::new();
    board.mark_cell(0, Symbol::X).unwrap();

    let result = board.mark_cell(0, Symbol::O);
    assert!(matches!(result, Err(MoveError::AlreadyMarked { position: 0, .. })));
    assert_eq!(board.get(0), Some(Cell::Marked(Symbol::X)));
}

#[test]
fn test_rejected_move_keeps_turn() {
    let mut game = new_match();
    play(&mut game, &[4]);

    let err = game.make_move(4).unwrap_err();
    assert!(err.to_string().contains("already marked"));
    assert_eq!(*game.current_player().symbol(), Symbol::O);

    game.make_move(0).unwrap();
    assert_eq!(game.board().get(0), Some(Cell::Marked(Symbol::O)));
}

#[test]
fn test_independent_matches() {
    let mut first = new_match();
    let second = new_match();

    play(&mut first, &[0, 3, 1, 4, 2]);
    assert!(first.is_over());
    assert_eq!(second.board(), &Board::new());
    assert_eq!(second.status(), &GameStatus::InProgress);
}

#[test]
fn test_no_moves_after_draw() {
    let mut game = new_match();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    for position in 0..9 {
        assert_eq!(
            game.make_move(position),
            Err(MoveError::MatchOver(GameStatus::Drawn))
        );
    }
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_snapshot_serializes_for_frontend() {
    let mut game = new_match();
    play(&mut game, &[4, 0]);

    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["players"][0]["name"], "Linus");
    assert_eq!(json["players"][1]["symbol"], "O");
    assert_eq!(json["board"]["cells"][4]["Marked"], "X");
    assert_eq!(json["board"]["cells"][8], "Empty");
    assert_eq!(json["status"], "InProgress");

    let restored: Game = serde_json::from_value(json).unwrap();
    assert_eq!(restored, game);
}

#[test]
fn test_snapshot_with_out_of_range_turn_rejected() {
    let mut json = serde_json::to_value(new_match()).unwrap();
    json["current"] = serde_json::json!(2);

    let err = serde_json::from_value::<Game>(json).unwrap_err();
    assert!(err.to_string().contains("current player index 2"));
}

#[test]
fn test_snapshot_with_shared_symbol_rejected() {
    let mut json = serde_json::to_value(new_match()).unwrap();
    json["players"][1]["symbol"] = serde_json::json!("X");

    let err = serde_json::from_value::<Game>(json).unwrap_err();
    assert!(err.to_string().contains("both players use symbol X"));
}

#[test]
fn test_snapshot_with_repeated_mover_rejected() {
    // Three X marks against none: a top-row "win" no real match can reach.
    let mut game = new_match();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let mut json = serde_json::to_value(&game).unwrap();
    for (entry, cell) in [(1, 3), (3, 4)] {
        json["history"][entry]["symbol"] = serde_json::json!("X");
        json["board"]["cells"][cell] = serde_json::json!({ "Marked": "X" });
    }

    let err = serde_json::from_value::<Game>(json).unwrap_err();
    assert!(err.to_string().contains("moved more than once"));
}

#[test]
fn test_match_over_message_uses_status_text() {
    let err = MoveError::MatchOver(GameStatus::Won(Symbol::X));
    assert_eq!(err.to_string(), "The match is already over (X wins)");
}
