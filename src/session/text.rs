//! Player-facing text.

use std::io::{self, Write};

use crate::cards::Card;
use crate::rules::Hint;

pub const INSTRUCTIONS: &str = "\
You're playing Set!

Input the indices of 3 cards that form a set, separated by spaces.
Example: If the 1st, 4th, and 12th cards form a set, type \"1 4 12\" (without the quotes)";

pub const PROMPT: &str = "Your guess: ";

pub const INVALID_INPUT: &str = "That input is invalid. Try again!";

pub const NOT_A_SET: &str = "Sorry, that is not a set. Try again!";

pub const HINT_HEADER: &str = "Hint: these cards form a set:";

pub const NO_SETS_REDEAL: &str = "There are no sets on the board. Dealing new cards.";

pub const VICTORY: &str = "You win! Thanks for playing Set!";

/// Feedback after a correct guess.
#[must_use]
pub fn correct(score: u32, total: u32) -> String {
    format!("Correct! You have found {} out of {} sets.", score, total)
}

/// Farewell when a board keeps coming up without a set.
#[must_use]
pub fn gave_up(redeals: u32) -> String {
    format!("No set turned up after {} redeals. Game over!", redeals)
}

/// Write the board, one `"<index>: <card>"` line per position, 1-based.
pub fn write_board<W: Write>(out: &mut W, board: &[Card]) -> io::Result<()> {
    writeln!(out, "\nCards:")?;
    for (i, card) in board.iter().enumerate() {
        writeln!(out, "{}: {}", i + 1, card)?;
    }
    Ok(())
}

/// Write every hint under a header.
pub fn write_hints<W: Write>(out: &mut W, hints: impl Iterator<Item = Hint>) -> io::Result<()> {
    writeln!(out, "\n{}", HINT_HEADER)?;
    for hint in hints {
        writeln!(out, "{}", hint)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::enumerate_hints;

    #[test]
    fn test_correct_message() {
        assert_eq!(correct(3, 27), "Correct! You have found 3 out of 27 sets.");
    }

    #[test]
    fn test_gave_up_message() {
        assert_eq!(gave_up(16), "No set turned up after 16 redeals. Game over!");
    }

    #[test]
    fn test_board_listing() {
        let deck = Card::full_deck();
        let mut out = Vec::new();
        write_board(&mut out, &deck[3..5]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "\nCards:\n1: 1 empty green oval\n2: 1 empty green diamond\n");
    }

    #[test]
    fn test_hint_listing() {
        let deck = Card::full_deck();
        let mut out = Vec::new();
        write_hints(&mut out, enumerate_hints(&deck[..3])).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\nHint: these cards form a set:\n"));
        assert!(text.contains("1 empty red oval, 1 empty red diamond, and 1 empty red wave"));
    }
}
