use anyhow::Result;
use clap::Parser;
use std::io;

use pawnbot::engine::Engine;
use pawnbot::protocol::Session;
use pawnbot::search::alphabeta::DEFAULT_DEPTH;
use pawnbot::square::Piece;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a pawn race over the runner's line protocol", long_about = None)]
struct Args {
    /// Our color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Gap files offered when playing Black, white file first, e.g. "ah"
    #[arg(long, default_value = "ah")]
    gaps: String,

    /// Pick uniformly random moves instead of searching
    #[arg(long)]
    random: bool,

    /// RNG seed for --random
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn parse_color(color_str: &str) -> Result<Piece> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Piece::White),
        "b" | "black" => Ok(Piece::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let color = parse_color(&args.color)?;
    let engine = if args.random {
        Engine::random(args.seed)
    } else {
        Engine::alpha_beta(args.depth)
    };

    // Stdout carries protocol lines only; everything else goes to the log.
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), color, engine);
    match session.play(&args.gaps)? {
        Some(side) => log::info!("{side} has won"),
        None => log::info!("game ended without a winner"),
    }
    Ok(())
}
