//! Win and draw detection.

use crate::board::Board;
use crate::common::{GameStatus, Mark};

// Three rows, three columns, two diagonals, as (row, col) triples.
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

/// Evaluate a position. A completed line wins even on a full board; only a
/// full board without one is a draw.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(mark) = winner(board) {
        return GameStatus::Won(mark);
    }
    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

/// The mark owning a completed line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    for [a, b, c] in LINES {
        let first = cells[a.0][a.1];
        if first.is_some() && first == cells[b.0][b.1] && first == cells[c.0][c.1] {
            return first;
        }
    }
    None
}
