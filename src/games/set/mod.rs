//! Set: find three cards that are, attribute by attribute, all the same or
//! all different.
//!
//! - 81 cards, one per combination of count, fill, color and shape
//! - 12 cards on the board; a found set is replaced card by card
//! - Once the deck runs dry the board shrinks; 27 sets in a full game

mod game;

pub use game::{GameEngine, GameEngineBuilder, GameStatus, GuessOutcome};
