#![cfg(feature = "std")]

//! Aggregate win/draw counters persisted between runs.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{GameStatus, Mark};

/// Lifetime counters across rounds. Loaded once at startup and saved after
/// every recorded round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub games: u64,
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

impl Statistics {
    /// Load counters from `path`. A missing or unreadable file and malformed
    /// JSON all yield a zeroed record; loading never fails.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Statistics::default(),
        }
    }

    /// Write counters to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        fs::write(path, data)
    }

    /// Record a finished round: exactly one outcome counter and the total
    /// advance together. An in-progress status records nothing.
    pub fn record(&mut self, result: GameStatus) {
        match result {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return,
        }
        self.games += 1;
    }
}
