use tictactoe::{evaluate, Board, GameStatus, Mark};

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

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
fn empty_board_is_in_progress() {
    assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
}

#[test]
fn partial_board_is_in_progress() {
    let board = board_from([['X', 'O', ' '], [' ', 'X', ' '], [' ', ' ', ' ']]);
    assert_eq!(evaluate(&board), GameStatus::InProgress);
}

#[test]
fn every_line_wins_for_both_marks() {
    for mark in [Mark::X, Mark::O] {
        for line in LINES {
            let mut board = Board::new();
            for (r, c) in line {
                board.place(r, c, mark).unwrap();
            }
            assert_eq!(evaluate(&board), GameStatus::Won(mark), "line {:?}", line);
        }
    }
}

#[test]
fn full_board_without_line_is_a_draw() {
    let board = board_from([['X', 'O', 'X'], ['X', 'O', 'O'], ['O', 'X', 'X']]);
    assert_eq!(evaluate(&board), GameStatus::Draw);
}

#[test]
fn completed_line_wins_even_on_a_full_board() {
    let board = board_from([['X', 'X', 'X'], ['O', 'O', 'X'], ['O', 'X', 'O']]);
    assert_eq!(evaluate(&board), GameStatus::Won(Mark::X));
}
