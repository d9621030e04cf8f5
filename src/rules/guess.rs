//! Guess parsing and validation.
//!
//! A guess is a line of text naming three board positions, 1-based and
//! separated by whitespace: `"1 4 12"`. Validation runs three checks in
//! order and stops at the first failure:
//!
//! 1. Only ASCII digits and whitespace ([`ValidationError::Parse`])
//! 2. Exactly three distinct numbers ([`ValidationError::Cardinality`])
//! 3. Every number within `1..=board_size` ([`ValidationError::Range`])
//!
//! All failures are recoverable: the caller reports them and asks again.

use rustc_hash::FxHashSet;

use crate::cards::Card;

/// A validated guess: three distinct board positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Guess {
    /// Zero-based board positions, in the order they were typed.
    pub positions: [usize; 3],
}

impl Guess {
    /// Look up the guessed cards on `board`.
    ///
    /// Returns `None` if a position is past the end of the board.
    #[must_use]
    pub fn cards(&self, board: &[Card]) -> Option<[Card; 3]> {
        let [a, b, c] = self.positions;
        Some([*board.get(a)?, *board.get(b)?, *board.get(c)?])
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.positions;
        write!(f, "{} {} {}", a + 1, b + 1, c + 1)
    }
}

/// Why a guess was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The input contains a character that is not a digit or whitespace.
    Parse { invalid: char },
    /// The input does not name exactly three distinct positions.
    Cardinality { tokens: usize, distinct: usize },
    /// A position is outside the board.
    Range { token: String, board_size: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Parse { invalid } => {
                write!(f, "'{}' is not a number; use digits and spaces only", invalid)
            }
            ValidationError::Cardinality { tokens, .. } if *tokens != 3 => {
                write!(f, "expected 3 cards, got {}", tokens)
            }
            ValidationError::Cardinality { distinct, .. } => {
                write!(f, "expected 3 different cards, got {}", distinct)
            }
            ValidationError::Range { token, board_size } => {
                write!(f, "card {} does not exist; pick from 1 to {}", token, board_size)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parse `input` into a guess against a board of `board_size` cards.
///
/// Numbers compare by value, so `"1 01 2"` names only two distinct
/// positions.
///
/// ```
/// use set_game::rules::{validate_guess, ValidationError};
///
/// let guess = validate_guess("1 4 12", 12).unwrap();
/// assert_eq!(guess.positions, [0, 3, 11]);
///
/// assert!(matches!(
///     validate_guess("1 2 13", 12),
///     Err(ValidationError::Range { .. })
/// ));
/// ```
pub fn validate_guess(input: &str, board_size: usize) -> Result<Guess, ValidationError> {
    if let Some(invalid) = input
        .chars()
        .find(|c| !c.is_ascii_digit() && !c.is_whitespace())
    {
        return Err(ValidationError::Parse { invalid });
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let distinct: FxHashSet<&str> = tokens.iter().map(|t| normalize(t)).collect();
    if tokens.len() != 3 || distinct.len() != 3 {
        return Err(ValidationError::Cardinality {
            tokens: tokens.len(),
            distinct: distinct.len(),
        });
    }

    let mut positions = [0usize; 3];
    for (slot, token) in positions.iter_mut().zip(&tokens) {
        // Digits-only tokens only fail to parse on overflow, which is out of range too.
        let index = token
            .parse::<usize>()
            .ok()
            .filter(|index| (1..=board_size).contains(index))
            .ok_or_else(|| ValidationError::Range {
                token: normalize(token).to_string(),
                board_size,
            })?;
        *slot = index - 1;
    }

    Ok(Guess { positions })
}

/// Strip leading zeros so tokens compare by numeric value.
fn normalize(token: &str) -> &str {
    let trimmed = token.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}
