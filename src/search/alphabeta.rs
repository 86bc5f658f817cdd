use log::debug;

use crate::game::Game;
use crate::moves::Move;
use crate::search::eval::advancement;
use crate::square::Piece;

/// Window bound; stays far inside i32 so negation and the per-ply bonuses
/// never overflow.
const INF: i32 = 1_000_000;

pub const DEFAULT_DEPTH: u32 = 6;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Fixed search depth in plies.
    pub depth: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub bestmove: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

#[derive(Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    /// Fixed-depth minimax with alpha-beta pruning for the side to move.
    /// Candidate moves are applied to the live game and undone after each
    /// subtree, so `game` comes back exactly as it went in. Score ties go to
    /// the first move in generation order, which keeps results reproducible.
    /// Returns no best move only when the position is already terminal.
    pub fn search(&mut self, game: &mut Game, params: SearchParams) -> SearchResult {
        self.nodes = 0;
        let root = game.side_to_move();
        let moves = game.legal_moves(root);
        if moves.is_empty() {
            return SearchResult {
                bestmove: None,
                score: advancement(game.board(), root),
                nodes: self.nodes,
            };
        }

        let mut alpha = -INF;
        let beta = INF;
        let mut bestmove = None;
        let mut best_score = -INF;
        for mv in moves {
            let bonus = move_bonus(&mv, true);
            let applied = game.apply_move(mv);
            debug_assert!(applied, "legal move rejected at root");
            let score = self.minimax(game, params.depth.saturating_sub(1), alpha, beta, root) + bonus;
            game.undo_move();
            if score > best_score {
                best_score = score;
                bestmove = Some(mv);
            }
            if best_score > alpha {
                alpha = best_score;
            }
        }
        debug!(
            "depth {} nodes {} score {} best {}",
            params.depth,
            self.nodes,
            best_score,
            bestmove.map_or_else(|| "-".to_string(), |mv| mv.to_string())
        );
        SearchResult {
            bestmove,
            score: best_score,
            nodes: self.nodes,
        }
    }

    /// Nodes where the root player moves maximize, opponent nodes minimize.
    /// Every non-peaceful move earns one extra point for its mover, counted
    /// from the root player's perspective.
    fn minimax(&mut self, game: &mut Game, depth: u32, mut alpha: i32, mut beta: i32, root: Piece) -> i32 {
        self.nodes += 1;
        if depth == 0 || game.is_over() {
            return advancement(game.board(), root);
        }
        let maximizing = game.side_to_move() == root;
        let mut best = if maximizing { -INF } else { INF };
        for mv in game.legal_moves(game.side_to_move()) {
            let bonus = move_bonus(&mv, maximizing);
            let applied = game.apply_move(mv);
            debug_assert!(applied, "legal move rejected in tree");
            let score = self.minimax(game, depth - 1, alpha, beta, root) + bonus;
            game.undo_move();
            if maximizing {
                if score > best {
                    best = score;
                }
                if best > alpha {
                    alpha = best;
                }
            } else {
                if score < best {
                    best = score;
                }
                if best < beta {
                    beta = best;
                }
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

fn move_bonus(mv: &Move, maximizing: bool) -> i32 {
    if !mv.is_capture() {
        0
    } else if maximizing {
        1
    } else {
        -1
    }
}
