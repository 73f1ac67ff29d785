#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod board;
mod common;
mod config;
mod game;
mod logic;
#[cfg(feature = "std")]
mod logging;
mod player;
#[cfg(feature = "std")]
mod stats;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logic::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
#[cfg(feature = "std")]
pub use stats::*;
#[cfg(feature = "std")]
pub use ui::*;
