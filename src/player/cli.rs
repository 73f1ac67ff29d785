#![cfg(feature = "std")]

use std::io::{self, Write};
use std::string::String;

use crate::board::Board;
use crate::common::Mark;

use super::Player;

/// Interactive player that reads moves from stdin.
pub struct HumanPlayer {
    name: String,
    mark: Mark,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

fn parse_move(input: &str) -> Result<(usize, usize), String> {
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut parts = input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|part| !part.is_empty());
    let row_str = parts.next().ok_or("Empty input")?;
    let col_str = parts
        .next()
        .ok_or("Need two numbers - row and column (e.g., 0,1)")?;
    if parts.next().is_some() {
        return Err("Too many values - enter exactly row,col (e.g., 0,1)".to_string());
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row_str))?;
    let col: usize = col_str
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number", col_str))?;
    Ok((row, col))
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    /// Prompt until the input parses as two numbers. Bounds and occupancy
    /// are not checked here; the controller rejects and re-requests such
    /// moves.
    fn choose_move(&mut self, _board: &Board) -> anyhow::Result<(usize, usize)> {
        loop {
            print!("{} ({}), enter row,col (e.g., 0,1): ", self.name, self.mark);
            io::stdout().flush()?;
            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                anyhow::bail!("input stream closed");
            }
            match parse_move(line.trim()) {
                Ok(mv) => return Ok(mv),
                Err(msg) => println!("{}", msg),
            }
        }
    }
}
