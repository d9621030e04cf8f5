//! # set-game
//!
//! The card game Set, played in the terminal.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `GameEngine` holds the deck, the board and the score.
//!    Nothing else mutates game state.
//!
//! 2. **Pure rules**: the set rule, guess validation and hint enumeration are
//!    plain functions of their inputs.
//!
//! 3. **Injected randomness**: every draw goes through a seedable `GameRng`,
//!    so a seed replays a whole game.
//!
//! ## Modules
//!
//! - `core`: state, RNG, configuration
//! - `cards`: attributes and the card value type
//! - `rules`: set rule, guess validation, hints
//! - `games`: the Set engine
//! - `session`: terminal I/O around the engine

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, GameRngState, GameSnapshot, GameState, BOARD_SIZE, TOTAL_SETS,
};

pub use crate::cards::{Card, Color, Count, Fill, Shape, DECK_SIZE};

pub use crate::rules::{enumerate_hints, is_set, validate_guess, Guess, Hint, Hints, ValidationError};

pub use crate::games::set::{GameEngine, GameEngineBuilder, GameStatus, GuessOutcome};

pub use crate::session::{Session, SessionSummary};
