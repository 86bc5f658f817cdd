use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game::Game;
use crate::moves::Move;
use crate::search::alphabeta::{SearchParams, Searcher};

/// Move picker for our side of a match: the alpha-beta search, or a seeded
/// uniform-random chooser useful as a weak opponent and in self-play.
pub enum Engine {
    AlphaBeta {
        searcher: Searcher,
        params: SearchParams,
    },
    Random {
        rng: StdRng,
    },
}

impl Engine {
    pub fn alpha_beta(depth: u32) -> Engine {
        Engine::AlphaBeta {
            searcher: Searcher::default(),
            params: SearchParams { depth },
        }
    }

    pub fn random(seed: u64) -> Engine {
        Engine::Random {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `None` means the side to move has no legal move, i.e. the position is
    /// terminal.
    pub fn pick_move(&mut self, game: &mut Game) -> Option<Move> {
        match self {
            Engine::AlphaBeta { searcher, params } => searcher.search(game, *params).bestmove,
            Engine::Random { rng } => {
                let moves = game.legal_moves(game.side_to_move());
                moves.choose(rng).copied()
            }
        }
    }
}
