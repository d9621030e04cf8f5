//! Terminal Set runner.
//!
//! Reads guesses from stdin, prints to stdout. Logs go to stderr.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

use set_game::{GameConfig, GameEngineBuilder, Session};

#[derive(Parser)]
#[command(name = "set")]
#[command(about = "Play the card game Set in your terminal")]
#[command(version)]
struct Cli {
    /// Seed for dealing; replays the same game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Show every set on the board after a wrong guess
    #[arg(long)]
    hints: bool,

    /// JSON config file (seed, hints, max_redeals)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if cli.hints {
        config.hints = true;
    }

    let engine = GameEngineBuilder::new().config(config).build();
    info!(seed = engine.seed(), "dealt opening board");

    let stdin = io::stdin();
    let summary = Session::new(engine, stdin.lock(), io::stdout().lock())
        .run()
        .context("terminal I/O failed")?;

    if !summary.completed {
        info!(score = summary.score, seed = summary.seed, "game abandoned");
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}
