//! Headless Gomoku driver
//!
//! Replays a list of moves against a fresh match and reports each result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gomoku::{GameConfig, MatchEngine, Placement, Pos};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Replay Gomoku moves and report the outcome
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Replay five-in-a-row moves against the match engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML session config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Moves as row,col, played alternately starting with the first player
    #[arg(value_name = "MOVE")]
    moves: Vec<Pos>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }

    let mut engine = MatchEngine::new(&config).context("invalid session config")?;
    let (rows, cols) = engine.dimensions();
    info!(rows, cols, moves = cli.moves.len(), "starting replay");

    for pos in &cli.moves {
        let mover = engine.current_player();
        let name = engine.player(mover).name().to_owned();
        match engine.place_stone(pos.row, pos.col) {
            Ok(Placement::Continue { .. }) => info!(player = %name, %pos, "accepted"),
            Ok(Placement::Won { .. }) => info!(player = %name, %pos, "accepted, game over"),
            Err(e) => warn!(player = %name, %pos, "rejected: {e}"),
        }
    }

    print!("{}", engine.grid());
    match engine.winner() {
        Some(id) => println!("{} wins!", engine.player(id).name()),
        None => println!(
            "No winner yet, {} to move",
            engine.player(engine.current_player()).name()
        ),
    }

    Ok(())
}
