use anyhow::Result;
use clap::Parser;

use pawnbot::board::Board;
use pawnbot::engine::Engine;
use pawnbot::game::Game;
use pawnbot::protocol::parse_gaps;
use pawnbot::search::alphabeta::DEFAULT_DEPTH;
use pawnbot::square::Piece;

#[derive(Parser, Debug)]
#[command(name = "pawnbot-selfplay", about = "Play engine-vs-engine pawn races locally")]
struct Args {
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Gap files, white then black
    #[arg(long, default_value = "ah")]
    gaps: String,

    /// Black picks random moves instead of searching
    #[arg(long)]
    random_black: bool,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Safety stop; a pawn race cannot actually last this long
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (white_gap, black_gap) = parse_gaps(&args.gaps)
        .ok_or_else(|| anyhow::anyhow!("gaps must be two file letters, e.g. ah"))?;
    let mut game = Game::new(Board::new(white_gap, black_gap), Piece::White);

    let mut white = Engine::alpha_beta(args.depth);
    let mut black = if args.random_black {
        Engine::random(args.seed)
    } else {
        Engine::alpha_beta(args.depth)
    };

    let mut plies = 0;
    while !game.is_over() && plies < args.max_plies {
        let side = game.side_to_move();
        let engine = if side == Piece::White { &mut white } else { &mut black };
        let Some(mv) = engine.pick_move(&mut game) else {
            break;
        };
        println!("{side}: {mv}");
        game.apply_move(mv);
        plies += 1;
    }

    println!("{}", game.board());
    match game.winner() {
        Some(side) => println!("{side} has won after {plies} plies"),
        None => println!("no winner after {plies} plies"),
    }
    Ok(())
}
