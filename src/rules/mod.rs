//! Game rules as pure functions.
//!
//! - `set_rule`: whether three cards form a set
//! - `guess`: turning typed input into board positions
//! - `hints`: enumerating the sets on a board
//!
//! None of these touch game state; `games::set::GameEngine` applies them.

pub mod guess;
pub mod hints;
pub mod set_rule;

pub use guess::{validate_guess, Guess, ValidationError};
pub use hints::{enumerate_hints, has_set, Hint, Hints};
pub use set_rule::{complete_set, is_set};
