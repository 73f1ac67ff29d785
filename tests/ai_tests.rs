use proptest::prelude::*;
use tictactoe::{best_move, Board, Game, GameStatus, Mark, BOARD_SIZE};

fn board_from(rows: [[char; 3]; 3]) -> Board {
    let mut board = Board::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.iter().enumerate() {
            match ch {
                'X' => board.place(r, c, Mark::X).unwrap(),
                'O' => board.place(r, c, Mark::O).unwrap(),
                _ => {}
            }
        }
    }
    board
}

#[test]
fn completes_a_winning_line() {
    // X to move with two in a row: (0, 2) wins on the spot.
    let board = board_from([['X', 'X', ' '], ['O', ' ', ' '], [' ', 'O', ' ']]);
    assert_eq!(best_move(&board, Mark::X), Some((0, 2)));
}

#[test]
fn blocks_an_immediate_threat() {
    // X to move, no win of its own available: every move except the block
    // at (0, 2) loses to O's next move.
    let board = board_from([['O', 'O', ' '], [' ', 'X', ' '], [' ', ' ', 'X']]);
    assert_eq!(best_move(&board, Mark::X), Some((0, 2)));
}

#[test]
fn prefers_winning_over_blocking() {
    // Both marks have two in a row; taking the win beats blocking.
    let board = board_from([['X', 'X', ' '], ['O', 'O', ' '], [' ', ' ', ' ']]);
    assert_eq!(best_move(&board, Mark::X), Some((0, 2)));
}

#[test]
fn empty_board_tie_break_is_row_major() {
    // Every opening scores a draw under optimal play, so the first
    // candidate in row-major order is selected.
    assert_eq!(best_move(&Board::new(), Mark::X), Some((0, 0)));
}

#[test]
fn full_board_has_no_move() {
    let board = board_from([['X', 'O', 'X'], ['X', 'O', 'O'], ['O', 'X', 'X']]);
    assert_eq!(best_move(&board, Mark::X), None);
}

#[test]
fn selection_is_deterministic() {
    let board = board_from([['X', ' ', ' '], [' ', 'O', ' '], [' ', ' ', ' ']]);
    let first = best_move(&board, Mark::X);
    for _ in 0..10 {
        assert_eq!(best_move(&board, Mark::X), first);
    }
}

/// Walk every opponent strategy against the engine playing X from the
/// empty board. The engine must end every line in a draw or a win.
#[test]
fn engine_as_x_never_loses() {
    fn explore(game: Game) {
        match game.status() {
            GameStatus::Won(mark) => assert_ne!(mark, Mark::O, "engine lost: {:?}", game),
            GameStatus::Draw => {}
            GameStatus::InProgress => {
                if game.to_move() == Mark::X {
                    let (row, col) = best_move(game.board(), Mark::X).unwrap();
                    let mut next = game;
                    next.play(row, col).unwrap();
                    explore(next);
                } else {
                    for row in 0..BOARD_SIZE {
                        for col in 0..BOARD_SIZE {
                            let mut next = game;
                            if next.play(row, col).is_err() {
                                continue;
                            }
                            explore(next);
                        }
                    }
                }
            }
        }
    }
    explore(Game::new());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// On any reachable in-progress position the engine returns a legal
    /// move for the mark to play.
    #[test]
    fn chosen_move_is_always_legal(
        moves in prop::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE), 2..12),
    ) {
        let mut game = Game::new();
        for &(row, col) in &moves {
            if game.status() != GameStatus::InProgress {
                break;
            }
            let _ = game.play(row, col);
        }
        if game.status() == GameStatus::InProgress {
            let (row, col) = best_move(game.board(), game.to_move()).unwrap();
            prop_assert_eq!(game.board().cell(row, col).unwrap(), None);
        }
    }
}
