//! Hint enumeration: every set currently on the board.
//!
//! [`Hints`] walks all `C(n, 3)` position triples `i < j < k` in
//! lexicographic order and yields the ones forming a set. It borrows the
//! board, computes nothing up front, and can be recreated at any time.

use super::set_rule::is_set;
use crate::cards::Card;

/// A set found on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hint {
    /// Zero-based board positions, ascending.
    pub positions: [usize; 3],
    /// The cards at those positions.
    pub cards: [Card; 3],
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = &self.cards;
        write!(f, "{}, {}, and {}", a, b, c)
    }
}

/// Lazy iterator over the sets on a board.
#[derive(Clone, Debug)]
pub struct Hints<'a> {
    board: &'a [Card],
    next: [usize; 3],
}

impl<'a> Hints<'a> {
    /// Start enumerating sets on `board`.
    #[must_use]
    pub fn new(board: &'a [Card]) -> Self {
        Self {
            board,
            next: [0, 1, 2],
        }
    }

    /// Step `next` to the following combination, lexicographically.
    fn advance(&mut self) {
        let n = self.board.len();
        let [i, j, k] = &mut self.next;

        *k += 1;
        if *k < n {
            return;
        }
        *j += 1;
        if *j + 1 < n {
            *k = *j + 1;
            return;
        }
        *i += 1;
        *j = *i + 1;
        *k = *i + 2;
    }
}

impl Iterator for Hints<'_> {
    type Item = Hint;

    fn next(&mut self) -> Option<Hint> {
        while self.next[2] < self.board.len() {
            let positions = self.next;
            self.advance();

            let cards = positions.map(|pos| self.board[pos]);
            if is_set(&cards[0], &cards[1], &cards[2]) {
                return Some(Hint { positions, cards });
            }
        }
        None
    }
}

/// Enumerate the sets on `board`.
#[must_use]
pub fn enumerate_hints(board: &[Card]) -> Hints<'_> {
    Hints::new(board)
}

/// Check whether the board holds at least one set.
#[must_use]
pub fn has_set(board: &[Card]) -> bool {
    enumerate_hints(board).next().is_some()
}
