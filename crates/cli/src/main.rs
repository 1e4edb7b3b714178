use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chess_rules::{Color, Engine, Position};
use clap::Parser;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use tracing_subscriber::EnvFilter;

mod config;
mod game;

use game::GameSession;

/// Depth used when neither the command line nor the config file sets one.
const DEFAULT_DEPTH: u8 = 3;

#[derive(Debug, Parser)]
#[command(name = "chess_cli", about = "Play chess against a fixed-depth engine in the terminal")]
struct Args {
    /// Search depth in plies
    #[arg(long)]
    depth: Option<u8>,

    /// Engine to play against: "minimax" or "random"
    #[arg(long)]
    engine: Option<String>,

    /// Start from this FEN position instead of the standard one
    #[arg(long)]
    fen: Option<String>,

    /// Side you play
    #[arg(long = "play-as", value_parser = parse_color, default_value = "white")]
    play_as: Color,

    /// Settings file
    #[arg(long, default_value = "chess-cli.toml")]
    config: PathBuf,
}

fn parse_color(text: &str) -> Result<Color, String> {
    match text.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        other => Err(format!("expected 'white' or 'black', got '{other}'")),
    }
}

fn build_engine(name: &str) -> Result<Box<dyn Engine>> {
    match name.to_ascii_lowercase().as_str() {
        "minimax" => Ok(Box::new(MinimaxEngine::new())),
        "random" => Ok(Box::new(RandomEngine::new())),
        other => bail!("unknown engine '{other}' (expected 'minimax' or 'random')"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = config::load(&args.config)?.unwrap_or_default();

    let depth = args.depth.or(config.depth).unwrap_or(DEFAULT_DEPTH);
    let engine_choice = args
        .engine
        .or(config.engine)
        .unwrap_or_else(|| "minimax".to_string());
    let engine = build_engine(&engine_choice)?;

    let position = match &args.fen {
        Some(fen) => Position::from_fen(fen).context("invalid --fen position")?,
        None => Position::startpos(),
    };

    let mut session = GameSession::new(position, engine, depth, args.play_as);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    session.run(&mut input, &mut output)
}
