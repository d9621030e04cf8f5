//! Terminal session: drives a `GameEngine` over a line-based input and a
//! text output.
//!
//! The session owns the I/O boundary only. Every rule decision is made by
//! the engine; the session prints what happened and asks for the next line.
//!
//! ## Usage
//!
//! ```
//! use std::io::Cursor;
//! use set_game::games::set::GameEngineBuilder;
//! use set_game::session::Session;
//!
//! let engine = GameEngineBuilder::new().seed(7).build();
//! let input = Cursor::new("hello\n");
//! let mut output = Vec::new();
//!
//! let summary = Session::new(engine, input, &mut output).run().unwrap();
//! assert_eq!(summary.invalid_inputs, 1);
//! assert!(!summary.completed);
//! ```

pub mod text;

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::games::set::{GameEngine, GameStatus, GuessOutcome};
use crate::rules::Guess;

/// What happened over a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    /// Seed of the game, for replay.
    pub seed: u64,
    /// Sets found.
    pub score: u32,
    /// Whether the game reached an ending rather than input running out.
    ///
    /// This is also `true` when the session gave up on a board that stayed
    /// without a set for `max_redeals` redeals; `score` then falls short of
    /// the total and cards remain in the deck.
    pub completed: bool,
    /// Valid guesses submitted.
    pub guesses: u32,
    /// Lines rejected by validation.
    pub invalid_inputs: u32,
}

/// A game in progress, attached to an input and an output.
pub struct Session<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
    guesses: u32,
    invalid_inputs: u32,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Attach `engine` to `input` and `output`.
    pub fn new(engine: GameEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            guesses: 0,
            invalid_inputs: 0,
        }
    }

    /// Play until the game ends or the input is exhausted.
    pub fn run(mut self) -> io::Result<SessionSummary> {
        writeln!(self.output, "\n{}", text::INSTRUCTIONS)?;
        text::write_board(&mut self.output, self.engine.board())?;

        let mut redeals = 0u32;
        let completed = loop {
            match self.engine.status() {
                GameStatus::Over => {
                    writeln!(self.output, "\n{}", text::VICTORY)?;
                    break true;
                }
                GameStatus::Stalled if redeals >= self.engine.config().max_redeals => {
                    warn!(redeals, "giving up on a board with no sets");
                    writeln!(self.output, "\n{}", text::gave_up(redeals))?;
                    break true;
                }
                GameStatus::Stalled => {
                    redeals += 1;
                    writeln!(self.output, "\n{}", text::NO_SETS_REDEAL)?;
                    self.engine.redeal();
                    text::write_board(&mut self.output, self.engine.board())?;
                    continue;
                }
                GameStatus::InProgress => redeals = 0,
            }

            let Some(guess) = self.read_guess()? else {
                info!("input closed before the game ended");
                break false;
            };
            self.play(&guess)?;
        };

        self.output.flush()?;
        let summary = SessionSummary {
            seed: self.engine.seed(),
            score: self.engine.score(),
            completed,
            guesses: self.guesses,
            invalid_inputs: self.invalid_inputs,
        };
        info!(?summary, "session finished");
        Ok(summary)
    }

    /// Prompt until a line validates. Returns `None` at end of input.
    ///
    /// Bytes that are not UTF-8 decode to U+FFFD and fail validation like
    /// any other stray character.
    fn read_guess(&mut self) -> io::Result<Option<Guess>> {
        let mut buf = Vec::new();
        loop {
            write!(self.output, "\n{}", text::PROMPT)?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&buf);

            match self.engine.validate_guess(&line) {
                Ok(guess) => return Ok(Some(guess)),
                Err(e) => {
                    debug!(input = line.trim_end(), error = %e, "rejected guess");
                    self.invalid_inputs += 1;
                    writeln!(self.output, "{}. {}", e, text::INVALID_INPUT)?;
                }
            }
        }
    }

    fn play(&mut self, guess: &Guess) -> io::Result<()> {
        self.guesses += 1;

        match self.engine.submit_guess(guess) {
            Some(GuessOutcome::Set { score, .. }) => {
                writeln!(self.output, "{}", text::correct(score, self.engine.total_sets()))?;
                if !self.engine.board().is_empty() {
                    text::write_board(&mut self.output, self.engine.board())?;
                }
            }
            Some(GuessOutcome::NotASet { .. }) => {
                writeln!(self.output, "{}", text::NOT_A_SET)?;
                if self.engine.config().hints {
                    text::write_hints(&mut self.output, self.engine.hints())?;
                }
            }
            None => {
                warn!(%guess, "guess is off the board");
                self.invalid_inputs += 1;
                writeln!(self.output, "{}", text::INVALID_INPUT)?;
            }
        }
        Ok(())
    }
}
