//! The Set game engine.

use tracing::{debug, info};

use crate::cards::Card;
use crate::core::{GameConfig, GameRng, GameSnapshot, GameState, TOTAL_SETS};
use crate::rules::{enumerate_hints, has_set, is_set, validate_guess, Guess, Hints, ValidationError};

/// Where the game stands between rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// The board holds at least one set.
    InProgress,
    /// The board holds no set but the deck still has cards; redeal to go on.
    Stalled,
    /// The deck is empty and no set remains on the board.
    Over,
}

/// Result of submitting a valid guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The cards formed a set; they were replaced and the score went up.
    Set {
        cards: [Card; 3],
        score: u32,
        replaced: usize,
    },
    /// The cards did not form a set; nothing changed.
    NotASet { cards: [Card; 3] },
}

impl GuessOutcome {
    /// Check if the guess was a set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        matches!(self, GuessOutcome::Set { .. })
    }
}

/// Single owner of a game's state and rules.
///
/// ## Round flow
///
/// ```text
/// AwaitingInput --invalid--> AwaitingInput
/// AwaitingInput --valid, set--> BoardUpdated --> AwaitingInput | Over
/// AwaitingInput --valid, not a set--> (hints) --> AwaitingInput
/// ```
///
/// ## Example
///
/// ```
/// use set_game::games::set::GameEngineBuilder;
///
/// let mut engine = GameEngineBuilder::new().seed(42).build();
/// assert_eq!(engine.board().len(), 12);
/// assert_eq!(engine.deck_len(), 69);
///
/// if let Some(hint) = engine.hints().next() {
///     let outcome = engine.submit(hint.positions).unwrap();
///     assert!(outcome.is_set());
///     assert_eq!(engine.score(), 1);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
}

/// Builder for creating a GameEngine.
#[derive(Default)]
pub struct GameEngineBuilder {
    config: GameConfig,
    rng: Option<GameRng>,
}

impl GameEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the seed (overrides the config's seed).
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Enable hints.
    pub fn hints(mut self, hints: bool) -> Self {
        self.config.hints = hints;
        self
    }

    /// Deal from an explicit RNG, ignoring any configured seed.
    pub fn rng(mut self, rng: GameRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Build the engine and deal the opening board.
    pub fn build(self) -> GameEngine {
        let rng = self.rng.unwrap_or_else(|| match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        });

        let mut engine = GameEngine {
            config: self.config,
            state: GameState::new(rng),
        };
        engine.initialize();
        engine
    }

    /// Build an engine around an existing state, without dealing.
    pub fn build_from_state(self, state: GameState) -> GameEngine {
        GameEngine {
            config: self.config,
            state,
        }
    }
}

impl GameEngine {
    /// Start a new game: full deck, fresh 12-card board, score 0.
    pub fn initialize(&mut self) {
        self.state.initialize();
        info!(seed = self.state.rng().seed(), "new game");
    }

    /// Parse a typed guess against the current board.
    pub fn validate_guess(&self, input: &str) -> Result<Guess, ValidationError> {
        validate_guess(input, self.state.board().len())
    }

    /// Play three board positions (zero-based).
    ///
    /// On a set, each card is replaced individually and the score goes up by
    /// one. Otherwise the board is left untouched. Returns `None`, changing
    /// nothing, if a position is off the board.
    pub fn submit(&mut self, positions: [usize; 3]) -> Option<GuessOutcome> {
        self.submit_guess(&Guess { positions })
    }

    /// Play a validated guess. Same as [`GameEngine::submit`]; a guess
    /// validated against an earlier, larger board can come back `None`.
    pub fn submit_guess(&mut self, guess: &Guess) -> Option<GuessOutcome> {
        let positions = guess.positions;
        let cards = guess.cards(self.state.board())?;

        if !is_set(&cards[0], &cards[1], &cards[2]) {
            debug!(?positions, "not a set");
            return Some(GuessOutcome::NotASet { cards });
        }

        let replaced = self.replace_matched_cards(&cards);
        self.record_match(cards);
        debug!(
            score = self.score(),
            replaced,
            deck = self.deck_len(),
            board = self.board().len(),
            "set found"
        );

        Some(GuessOutcome::Set {
            cards,
            score: self.score(),
            replaced,
        })
    }

    /// Refill the positions of `matched` from the deck, or drop them once
    /// the deck is empty. Returns the number refilled.
    pub fn replace_matched_cards(&mut self, matched: &[Card]) -> usize {
        self.state.replace_matched_cards(matched)
    }

    /// Count one found set.
    pub fn record_match(&mut self, cards: [Card; 3]) {
        self.state.record_match(cards);
    }

    /// Lazily enumerate the sets on the board.
    #[must_use]
    pub fn hints(&self) -> Hints<'_> {
        enumerate_hints(self.state.board())
    }

    /// Current game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if has_set(self.state.board()) {
            GameStatus::InProgress
        } else if self.state.deck_is_empty() {
            GameStatus::Over
        } else {
            GameStatus::Stalled
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() == GameStatus::Over
    }

    /// Put the board back into the deck and deal a new one.
    pub fn redeal(&mut self) {
        self.state.redeal();
        info!(deck = self.deck_len(), "board had no set, redealt");
    }

    /// Cards on the board, in position order.
    #[must_use]
    pub fn board(&self) -> &[Card] {
        self.state.board()
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.state.deck().len()
    }

    /// Sets found so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    /// Sets in a complete game.
    #[must_use]
    pub fn total_sets(&self) -> u32 {
        TOTAL_SETS
    }

    /// Seed of the dealing RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.state.rng().seed()
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Serializable view of the game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }
}
