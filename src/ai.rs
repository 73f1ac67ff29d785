//! Exhaustive minimax move selection.
//!
//! The search branches on board snapshots, so lookahead never mutates the
//! caller's board. With at most nine empty cells the full tree is searched;
//! no pruning is needed.

use crate::board::Board;
use crate::common::{GameStatus, Mark};
use crate::config::BOARD_SIZE;
use crate::logic;

// Score of a win at depth zero. Deeper wins score lower and deeper losses
// higher, so the engine wins as early and loses as late as possible.
const WIN_SCORE: i32 = 10;

/// Pick the optimal move for `mark`, assuming the opponent replies
/// optimally. Equal scores resolve to the first candidate in row-major
/// order, keeping the selection deterministic. Returns `None` only when the
/// board has no empty cell.
pub fn best_move(board: &Board, mark: Mark) -> Option<(usize, usize)> {
    let mut best: Option<((usize, usize), i32)> = None;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let mut child = *board;
            if child.place(row, col, mark).is_err() {
                continue;
            }
            let score = minimax(&child, mark, mark.opponent(), 0);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some(((row, col), score)),
            }
        }
    }
    best.map(|(mv, _)| mv)
}

/// Score a position for `mark` with `to_move` next to play. `depth` counts
/// moves made below the root decision, starting at zero.
fn minimax(board: &Board, mark: Mark, to_move: Mark, depth: i32) -> i32 {
    match logic::evaluate(board) {
        GameStatus::Won(winner) if winner == mark => WIN_SCORE - depth,
        GameStatus::Won(_) => depth - WIN_SCORE,
        GameStatus::Draw => 0,
        GameStatus::InProgress => {
            let maximizing = to_move == mark;
            let mut best = if maximizing { i32::MIN } else { i32::MAX };
            for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    let mut child = *board;
                    if child.place(row, col, to_move).is_err() {
                        continue;
                    }
                    let score = minimax(&child, mark, to_move.opponent(), depth + 1);
                    best = if maximizing {
                        best.max(score)
                    } else {
                        best.min(score)
                    };
                }
            }
            best
        }
    }
}
