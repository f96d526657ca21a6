//! Self-play driver for Moab
//!
//! This crate provides infrastructure for:
//! - Playing an engine against itself (or another engine) from a position file
//! - Recording the game as JSON for later inspection
//!
//! # Usage
//!
//! ```bash
//! cargo run -p selfplay -- --position positions/skirmish.pos --seed 7 --record game.json
//! ```

mod game_runner;
mod results;

pub use game_runner::*;
pub use results::*;
