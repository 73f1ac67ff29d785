#![cfg(feature = "std")]

//! Terminal rendering for the board and the statistics panel.

use crate::board::Board;
use crate::config::BOARD_SIZE;
use crate::stats::Statistics;

/// Print the board with row and column indices.
pub fn print_board(board: &Board) {
    std::println!("\n     0   1   2");
    for (r, row) in board.cells().iter().enumerate() {
        std::print!("  {} ", r);
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Some(mark) => std::print!(" {} ", mark),
                None => std::print!("   "),
            }
            if c < BOARD_SIZE - 1 {
                std::print!("|");
            }
        }
        std::println!();
        if r < BOARD_SIZE - 1 {
            std::println!("    -----------");
        }
    }
    std::println!();
}

/// Print the statistics panel.
pub fn print_statistics(stats: &Statistics) {
    std::println!("\n=== GAME STATISTICS ===");
    std::println!("Total games: {}", stats.games);
    std::println!("X wins:      {}", stats.x_wins);
    std::println!("O wins:      {}", stats.o_wins);
    std::println!("Draws:       {}", stats.draws);
    std::println!("=======================\n");
}
