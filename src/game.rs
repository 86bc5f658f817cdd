use crate::board::Board;
use crate::moves::{Move, MoveKind};
use crate::square::{file_index, Piece, Square};

/// One applied move plus everything needed to reverse it exactly. The
/// captured pawn and its square are recorded at apply time: en passant
/// victims do not sit on the destination square, and inferring them later
/// from the move kind is unsound once the board has changed again.
#[derive(Debug, Clone, Copy)]
struct HistoryEntry {
    mv: Move,
    captured: Option<(Piece, Square)>,
}

/// Turn-sequenced game state: one board, the side to move, and a delta log
/// of applied moves. `apply_move` followed by `undo_move` restores both the
/// board and the side to move bit-for-bit.
pub struct Game {
    board: Board,
    to_move: Piece,
    history: Vec<HistoryEntry>,
}

impl Game {
    pub fn new(board: Board, to_move: Piece) -> Game {
        Game {
            board,
            to_move,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Piece {
        self.to_move
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|entry| &entry.mv)
    }

    /// Validates and applies `mv`. An out-of-turn or illegal move leaves the
    /// game untouched and returns false; rejection is a normal outcome, not
    /// an error.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        if mv.piece != self.to_move {
            return false;
        }
        if !self.board.is_valid_move(&mv, self.last_move()) {
            return false;
        }
        let captured = match mv.kind {
            MoveKind::Peaceful => None,
            MoveKind::Capture => self.board.piece_at(mv.to).map(|piece| (piece, mv.to)),
            MoveKind::EnPassant => mv
                .to
                .offset(0, mv.piece.opponent().forward())
                .ok()
                .and_then(|victim| self.board.piece_at(victim).map(|piece| (piece, victim))),
        };
        self.board.make_move(&mv);
        self.history.push(HistoryEntry { mv, captured });
        self.to_move = self.to_move.opponent();
        true
    }

    /// Reverses the most recent move; a no-op on an empty history. The moved
    /// pawn returns to its origin and any recorded victim is restored to the
    /// square it was actually taken from.
    pub fn undo_move(&mut self) {
        let Some(entry) = self.history.pop() else {
            return;
        };
        self.board.set(entry.mv.to, None);
        self.board.set(entry.mv.from, Some(entry.mv.piece));
        if let Some((piece, square)) = entry.captured {
            self.board.set(square, Some(piece));
        }
        self.to_move = self.to_move.opponent();
    }

    /// Every legal move for `piece`, in board scan order; per pawn the six
    /// geometric candidates are tried as forward one, forward two, left
    /// capture, left en passant, right capture, right en passant. The search
    /// breaks score ties by this order.
    pub fn legal_moves(&self, piece: Piece) -> Vec<Move> {
        let last = self.last_move();
        let mut moves = Vec::new();
        for from in self.board.positions_of(piece) {
            let candidates = [
                forward_candidate(&self.board, from, piece, 1),
                forward_candidate(&self.board, from, piece, 2),
                diagonal_candidate(&self.board, from, piece, -1, MoveKind::Capture, last),
                diagonal_candidate(&self.board, from, piece, -1, MoveKind::EnPassant, last),
                diagonal_candidate(&self.board, from, piece, 1, MoveKind::Capture, last),
                diagonal_candidate(&self.board, from, piece, 1, MoveKind::EnPassant, last),
            ];
            moves.extend(candidates.into_iter().flatten());
        }
        moves
    }

    pub fn is_over(&self) -> bool {
        self.promoted_side().is_some() || self.legal_moves(self.to_move).is_empty()
    }

    /// Winner once the game is over. A pawn on the far rank wins on the
    /// spot; otherwise a side left without a legal move loses (stalemate
    /// counts against the stuck side under this ruleset).
    pub fn winner(&self) -> Option<Piece> {
        if let Some(side) = self.promoted_side() {
            return Some(side);
        }
        if self.legal_moves(self.to_move).is_empty() {
            return Some(self.to_move.opponent());
        }
        None
    }

    fn promoted_side(&self) -> Option<Piece> {
        for side in [Piece::White, Piece::Black] {
            for file in 0..8 {
                if let Ok(square) = Square::new(file, side.promotion_rank() as i8) {
                    if self.board.piece_at(square).is_some() {
                        return Some(side);
                    }
                }
            }
        }
        None
    }

    /// Parses runner notation for the side to move: two characters name a
    /// peaceful destination ("b4"), four name a capture or en passant with
    /// the origin file spelled out ("bxc7"). File letters are
    /// case-insensitive. Anything that fails to name a legal move is `None`.
    pub fn parse_move(&self, text: &str) -> Option<Move> {
        let chars: Vec<char> = text.trim().chars().collect();
        let piece = self.to_move;
        match chars.as_slice() {
            [file, rank] => {
                let to = Square::from_chars(*file, *rank)?;
                self.board
                    .positions_of(piece)
                    .into_iter()
                    .find_map(|from| {
                        let mv = Move::new(piece, from, to, MoveKind::Peaceful);
                        self.board.is_valid_move(&mv, None).then_some(mv)
                    })
            }
            [origin, sep, file, rank] if sep.eq_ignore_ascii_case(&'x') => {
                let origin_file = file_index(*origin)?;
                let to = Square::from_chars(*file, *rank)?;
                let last = self.last_move();
                for from in self.board.positions_of(piece) {
                    if from.file() != origin_file {
                        continue;
                    }
                    for kind in [MoveKind::Capture, MoveKind::EnPassant] {
                        let mv = Move::new(piece, from, to, kind);
                        if self.board.is_valid_move(&mv, last) {
                            return Some(mv);
                        }
                    }
                }
                None
            }
            _ => None,
        }
    }
}

// Candidate builders are plain functions over immutable inputs; they return
// a move only when it validates against the current board and last move.

fn forward_candidate(board: &Board, from: Square, piece: Piece, steps: i8) -> Option<Move> {
    let to = from.offset(0, steps * piece.forward()).ok()?;
    let mv = Move::new(piece, from, to, MoveKind::Peaceful);
    board.is_valid_move(&mv, None).then_some(mv)
}

fn diagonal_candidate(
    board: &Board,
    from: Square,
    piece: Piece,
    files: i8,
    kind: MoveKind,
    last_move: Option<&Move>,
) -> Option<Move> {
    let to = from.offset(files, piece.forward()).ok()?;
    let mv = Move::new(piece, from, to, kind);
    board.is_valid_move(&mv, last_move).then_some(mv)
}
