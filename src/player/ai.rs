use crate::ai;
use crate::board::Board;
use crate::common::Mark;

use super::Player;

/// Computer player that plays optimally via exhaustive minimax search.
pub struct AiPlayer {
    mark: Mark,
}

impl AiPlayer {
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        "Computer"
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    /// Always returns a legal move while any empty cell remains; the
    /// controller never asks on a finished round.
    fn choose_move(&mut self, board: &Board) -> anyhow::Result<(usize, usize)> {
        ai::best_move(board, self.mark).ok_or_else(|| anyhow::anyhow!("no empty cell left to play"))
    }
}
