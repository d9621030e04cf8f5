//! Core engine types: state, RNG, configuration.
//!
//! This module holds the data the game runs on. The rules that interpret it
//! live in `rules`; the component that ties them together is
//! `games::set::GameEngine`.

pub mod config;
pub mod rng;
pub mod state;

pub use config::{ConfigError, GameConfig, DEFAULT_MAX_REDEALS};
pub use rng::{GameRng, GameRngState};
pub use state::{GameSnapshot, GameState, BOARD_SIZE, TOTAL_SETS};
