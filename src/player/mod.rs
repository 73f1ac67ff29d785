//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: optimal computer player backed by the minimax engine
//! - HumanPlayer: interactive command-line player

use crate::board::Board;
use crate::common::Mark;

/// Interface implemented by the different player types.
///
/// A player only produces its next move. Validating and applying the move
/// against the live board is the controller's job; a rejected move is
/// re-requested from the same player.
pub trait Player {
    /// Display name used in prompts and announcements.
    fn name(&self) -> &str;

    /// Mark this player puts on the board.
    fn mark(&self) -> Mark;

    /// Choose the next (row, col) to play on `board`.
    fn choose_move(&mut self, board: &Board) -> anyhow::Result<(usize, usize)>;
}

// Re-export implementations
pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::HumanPlayer;
