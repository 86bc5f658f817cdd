use crate::board::Board;
use crate::square::Piece;

/// Advancement heuristic: how far each of `side`'s pawns has travelled from
/// its home rank. Opponent material is not counted here; the search layers a
/// move-kind bonus on top of this per ply.
pub fn advancement(board: &Board, side: Piece) -> i32 {
    board
        .positions_of(side)
        .into_iter()
        .map(|square| (square.rank() as i32 - side.home_rank() as i32) * side.forward() as i32)
        .sum()
}
