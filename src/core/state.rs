//! Game state: deck, board, score, and the RNG that deals.
//!
//! ## Lifecycle
//!
//! 1. `GameState::new(rng)`: empty deck and board
//! 2. `initialize()`: deck gets all 81 cards, 12 are dealt to the board
//! 3. Each found set: `replace_matched_cards()` + `record_match()`
//! 4. Once the deck is empty, matched positions are removed and the
//!    board shrinks
//!
//! ## Invariants
//!
//! - deck ∩ board = ∅, and neither holds duplicates
//! - `3 * score + board.len() + deck.len() == 81`
//! - board positions only change when their card is matched or redealt

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::rng::{GameRng, GameRngState};
use crate::cards::{Card, DECK_SIZE};

/// Cards on a freshly dealt board.
pub const BOARD_SIZE: usize = 12;

/// Sets in a complete game (81 cards / 3).
pub const TOTAL_SETS: u32 = (DECK_SIZE / 3) as u32;

/// Complete game state.
///
/// The deck is logically a set: its order carries no meaning, since every
/// draw picks a uniformly random card. The board is ordered and addressed
/// by position.
#[derive(Clone, Debug)]
pub struct GameState {
    deck: Vec<Card>,
    board: Vec<Card>,
    score: u32,
    found: Vec<[Card; 3]>,
    rng: GameRng,
}

impl GameState {
    /// Create an empty state that deals from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            deck: Vec::with_capacity(DECK_SIZE),
            board: Vec::with_capacity(BOARD_SIZE),
            score: 0,
            found: Vec::new(),
            rng,
        }
    }

    /// Build a state from explicit parts.
    ///
    /// Used to set up specific positions (e.g. the end of a game). The caller
    /// is responsible for the deck/board disjointness invariant.
    #[must_use]
    pub fn from_parts(deck: Vec<Card>, board: Vec<Card>, score: u32, rng: GameRng) -> Self {
        debug_assert!(
            board.iter().all(|card| !deck.contains(card)),
            "deck and board must be disjoint"
        );
        Self {
            deck,
            board,
            score,
            found: Vec::new(),
            rng,
        }
    }

    /// Fill the deck with all 81 cards and deal a board of 12.
    ///
    /// Any previous contents are discarded and the score is reset.
    pub fn initialize(&mut self) {
        self.deck = Card::full_deck();
        self.board.clear();
        self.score = 0;
        self.found.clear();
        self.deal(BOARD_SIZE);

        debug!(
            deck = self.deck.len(),
            board = self.board.len(),
            seed = self.rng.seed(),
            "initialized game state"
        );
    }

    /// Move up to `count` random cards from the deck to the end of the board.
    fn deal(&mut self, count: usize) {
        for _ in 0..count {
            match self.rng.take_random(&mut self.deck) {
                Some(card) => self.board.push(card),
                None => break,
            }
        }
    }

    /// Replace each matched card on the board with a random card from the deck.
    ///
    /// Cards are handled one at a time: each matched card's position is
    /// looked up, then refilled in place from the deck. Unmatched positions
    /// never move. Once the deck is empty, matched positions are removed
    /// instead and the board shrinks.
    ///
    /// Returns the number of positions refilled from the deck.
    pub fn replace_matched_cards(&mut self, matched: &[Card]) -> usize {
        let mut replaced = 0;

        for card in matched {
            let Some(pos) = self.board.iter().position(|c| c == card) else {
                warn!(%card, "matched card not on board");
                continue;
            };

            match self.rng.take_random(&mut self.deck) {
                Some(new_card) => {
                    debug!(position = pos + 1, old = %card, new = %new_card, "replaced card");
                    self.board[pos] = new_card;
                    replaced += 1;
                }
                None => {
                    debug!(position = pos + 1, old = %card, "removed card, deck empty");
                    self.board.remove(pos);
                }
            }
        }

        replaced
    }

    /// Count a found set.
    pub fn record_match(&mut self, cards: [Card; 3]) {
        self.score += 1;
        self.found.push(cards);
    }

    /// Return the whole board to the deck and deal a new board of the same size.
    pub fn redeal(&mut self) {
        let size = self.board.len();
        self.deck.append(&mut self.board);
        self.deal(size);
        debug!(board = self.board.len(), deck = self.deck.len(), "redealt board");
    }

    /// Cards on the board, in position order.
    #[must_use]
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Cards remaining in the deck.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Number of sets found so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Found sets, oldest first.
    #[must_use]
    pub fn found(&self) -> &[[Card; 3]] {
        &self.found
    }

    /// Check if the deck has run out.
    #[must_use]
    pub fn deck_is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// The dealing RNG.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Capture a serializable view of this state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            deck_size: self.deck.len(),
            score: self.score,
            found: self.found.clone(),
            rng: self.rng.state(),
        }
    }
}

/// Serializable summary of a game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Vec<Card>,
    pub deck_size: usize,
    pub score: u32,
    pub found: Vec<[Card; 3]>,
    pub rng: GameRngState,
}
