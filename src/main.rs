//! Othello engine CLI
//!
//! Plays the engine against itself and prints each finished game.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use othello::{play_game, Agent, Board, EngineConfig, GameRecord, Side, Turn};

#[derive(Parser, Debug)]
#[command(name = "othello")]
#[command(version, about = "Self-play driver for the Othello engine", long_about = None)]
struct Args {
    /// Search depth below each candidate move (overrides the config file)
    #[arg(short, long)]
    depth: Option<u8>,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: usize,

    /// JSON engine configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only print warnings and the final tally
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = args.depth {
        config = config.with_depth(depth);
        config.validate()?;
    }
    info!(depth = config.search_depth, games = args.games, "starting self-play");

    let mut black = Agent::with_config(Side::Black, &config)?;
    let mut white = Agent::with_config(Side::White, &config)?;
    let mut tally = [0usize; 3];

    for game in 1..=args.games {
        black.new_game();
        white.new_game();

        let record = play_game(&mut black, &mut white, Board::new())
            .with_context(|| format!("game {game} failed"))?;
        match record.winner {
            Some(Side::Black) => tally[0] += 1,
            Some(Side::White) => tally[1] += 1,
            None => tally[2] += 1,
        }
        if !args.quiet {
            print_game(game, &record);
        }
    }

    println!(
        "Black {} / White {} / Draw {} over {} game(s)",
        tally[0], tally[1], tally[2], args.games
    );
    Ok(())
}

fn print_game(game: usize, record: &GameRecord) {
    println!("--- Game {game} ---");
    let moves: Vec<String> = record
        .turns
        .iter()
        .map(|turn| match turn {
            Turn::Play { mv, .. } => mv.to_string(),
            Turn::Pass(_) => "--".to_string(),
        })
        .collect();
    println!("  Moves: {}", moves.join(" "));
    println!("{}", record.final_board);
    println!(
        "  Black {} - White {}: {}",
        record.black_discs,
        record.white_discs,
        match record.winner {
            Some(side) => format!("{side} wins"),
            None => "draw".to_string(),
        }
    );
}
