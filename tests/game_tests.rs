//! Whole-game tests.
//!
//! These play games to the end with a solver that always takes the first
//! hint, and check the deck/board/score accounting along the way.

use rustc_hash::FxHashSet;
use set_game::cards::{Card, Count, DECK_SIZE};
use set_game::core::{GameConfig, GameRng, GameState, BOARD_SIZE, TOTAL_SETS};
use set_game::games::set::{GameEngine, GameEngineBuilder, GameStatus, GuessOutcome};
use set_game::rules::{complete_set, is_set, ValidationError};

const MAX_REDEALS: u32 = 100;

/// Check the invariants that hold between any two rounds.
fn assert_invariants(engine: &GameEngine) {
    let state = engine.state();
    let deck: FxHashSet<Card> = state.deck().iter().copied().collect();
    let board: FxHashSet<Card> = state.board().iter().copied().collect();

    assert_eq!(deck.len(), state.deck().len(), "duplicate card in deck");
    assert_eq!(board.len(), state.board().len(), "duplicate card on board");
    assert!(deck.is_disjoint(&board), "card both in deck and on board");
    assert_eq!(
        3 * engine.score() as usize + engine.board().len() + engine.deck_len(),
        DECK_SIZE
    );
    if engine.deck_len() > 0 {
        assert_eq!(engine.board().len(), BOARD_SIZE);
    }
}

/// Play a full game with the first-hint solver. Returns the final engine.
fn play_full_game(seed: u64) -> GameEngine {
    let mut engine = GameEngineBuilder::new().seed(seed).build();
    let mut redeals = 0;

    loop {
        assert_invariants(&engine);
        match engine.status() {
            GameStatus::Over => break,
            GameStatus::Stalled => {
                redeals += 1;
                assert!(redeals < MAX_REDEALS, "seed {seed}: stuck redealing");
                engine.redeal();
            }
            GameStatus::InProgress => {
                let hint = engine.hints().next().expect("in progress means a set exists");
                let score = engine.score();
                let deck = engine.deck_len();

                let outcome = engine.submit(hint.positions).unwrap();

                assert!(outcome.is_set());
                assert_eq!(engine.score(), score + 1);
                assert_eq!(deck - engine.deck_len(), deck.min(3));
            }
        }
    }
    engine
}

#[test]
fn test_full_games_exhaust_the_deck() {
    for seed in [1, 2, 3, 42, 1000, 31337] {
        let engine = play_full_game(seed);

        assert_eq!(engine.deck_len(), 0, "seed {seed}");
        assert!(engine.hints().next().is_none());
        assert!(engine.score() >= 23, "seed {seed}: deck empties after 23 sets");
        assert!(engine.score() <= TOTAL_SETS);
        if engine.board().is_empty() {
            assert_eq!(engine.score(), TOTAL_SETS);
        }
        assert_eq!(engine.state().found().len(), engine.score() as usize);
        for found in engine.state().found() {
            assert!(is_set(&found[0], &found[1], &found[2]));
        }
    }
}

#[test]
fn test_every_card_played_at_most_once() {
    let engine = play_full_game(77);
    let mut seen: FxHashSet<Card> = FxHashSet::default();
    for card in engine.state().found().iter().flatten().chain(engine.board()) {
        assert!(seen.insert(*card), "{card} appeared twice");
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn test_same_seed_same_game() {
    let a = play_full_game(2024);
    let b = play_full_game(2024);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_score_reaches_total_when_every_set_is_claimed() {
    // 81 = 27 disjoint sets, grouped by everything except count.
    let mut sets = Vec::new();
    for card in Card::full_deck() {
        if card.count == Count::One {
            let second = Card { count: Count::Two, ..card };
            sets.push([card, second, complete_set(&card, &second)]);
        }
    }
    assert_eq!(sets.len(), 27);

    // Everything dealt, nothing left to draw.
    let board: Vec<Card> = sets.iter().flatten().copied().collect();
    let state = GameState::from_parts(Vec::new(), board, 0, GameRng::new(9));
    let mut engine = GameEngineBuilder::new().build_from_state(state);

    for set in &sets {
        let positions = set.map(|card| engine.board().iter().position(|c| *c == card).unwrap());
        let outcome = engine.submit(positions);
        assert!(matches!(outcome, Some(GuessOutcome::Set { replaced: 0, .. })));
    }

    assert_eq!(engine.score(), TOTAL_SETS);
    assert!(engine.board().is_empty());
    assert_eq!(engine.status(), GameStatus::Over);
}

#[test]
fn test_wrong_guess_leaves_state_untouched() {
    let mut engine = GameEngineBuilder::new().seed(5).build();
    let board = engine.board().to_vec();

    let n = board.len();
    let positions = (0..n)
        .flat_map(|i| (i + 1..n).flat_map(move |j| (j + 1..n).map(move |k| [i, j, k])))
        .find(|&[i, j, k]| !is_set(&board[i], &board[j], &board[k]))
        .unwrap();

    let before = engine.snapshot();
    let outcome = engine.submit(positions);

    assert!(matches!(outcome, Some(GuessOutcome::NotASet { .. })));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_validation_on_live_board() {
    let engine = GameEngineBuilder::new().seed(11).build();

    assert!(matches!(engine.validate_guess("a b c"), Err(ValidationError::Parse { .. })));
    assert!(matches!(
        engine.validate_guess("1 1 2"),
        Err(ValidationError::Cardinality { .. })
    ));
    assert!(matches!(engine.validate_guess("0 1 2"), Err(ValidationError::Range { .. })));
    assert!(matches!(engine.validate_guess("1 2 13"), Err(ValidationError::Range { .. })));

    let guess = engine.validate_guess("12 1 6\n").unwrap();
    assert_eq!(guess.positions, [11, 0, 5]);
    let cards = guess.cards(engine.board()).unwrap();
    assert_eq!(cards, [engine.board()[11], engine.board()[0], engine.board()[5]]);
}

#[test]
fn test_config_flows_into_engine() {
    let config = GameConfig::new().with_seed(99).with_hints(true);
    let engine = GameEngineBuilder::new().config(config.clone()).build();
    let same = GameEngineBuilder::new().seed(99).build();

    assert_eq!(engine.config(), &config);
    assert_eq!(engine.board(), same.board());
}
