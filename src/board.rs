use std::fmt;

use crate::moves::{Move, MoveKind};
use crate::square::{Piece, Square};

pub const SIZE: u8 = 8;

/// 8x8 grid of optional pawns, indexed [rank][file]. Owned by one `Game`;
/// the search mutates it only through strictly nested apply/undo pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Starting position: the second rank filled with White except the white
    /// gap file, the seventh rank filled with Black except the black gap
    /// file. Gap arguments are file indices, 0..8.
    pub fn new(white_gap: u8, black_gap: u8) -> Board {
        assert!(white_gap < SIZE && black_gap < SIZE, "gap file index out of range");
        let mut squares = [[None; 8]; 8];
        for file in 0..8 {
            squares[Piece::White.home_rank() as usize][file] = Some(Piece::White);
            squares[Piece::Black.home_rank() as usize][file] = Some(Piece::Black);
        }
        squares[Piece::White.home_rank() as usize][white_gap as usize] = None;
        squares[Piece::Black.home_rank() as usize][black_gap as usize] = None;
        Board { squares }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    /// Squares holding `piece`, scanned rank-major then by file. Candidate
    /// generation follows this order, so search tie-breaking depends on it.
    pub fn positions_of(&self, piece: Piece) -> Vec<Square> {
        let mut found = Vec::new();
        for rank in 0..8 {
            for file in 0..8 {
                if let Ok(square) = Square::new(file, rank) {
                    if self.piece_at(square) == Some(piece) {
                        found.push(square);
                    }
                }
            }
        }
        found
    }

    /// Legality under the pawn-race ruleset. `last_move` feeds the en
    /// passant precondition; the board itself is never touched. Coordinate
    /// bounds are already guaranteed by `Square` construction.
    pub fn is_valid_move(&self, mv: &Move, last_move: Option<&Move>) -> bool {
        if self.piece_at(mv.from) != Some(mv.piece) {
            return false;
        }
        match mv.kind {
            MoveKind::Peaceful => self.is_valid_peaceful(mv),
            MoveKind::Capture => self.is_valid_capture(mv),
            MoveKind::EnPassant => self.is_valid_en_passant(mv, last_move),
        }
    }

    fn is_valid_peaceful(&self, mv: &Move) -> bool {
        if side_steps(mv) != 0 {
            return false;
        }
        let forward = forward_steps(mv);
        if forward <= 0 {
            return false;
        }
        if self.piece_at(mv.to).is_some() {
            return false;
        }
        if forward == 2 {
            let skipped_rank = (mv.from.rank() + mv.to.rank()) / 2;
            match Square::new(mv.to.file() as i8, skipped_rank as i8) {
                Ok(skipped) if self.piece_at(skipped).is_some() => return false,
                Ok(_) => {}
                Err(_) => return false,
            }
        }
        if mv.from.rank() == mv.piece.home_rank() {
            forward <= 2
        } else {
            forward == 1
        }
    }

    fn is_valid_capture(&self, mv: &Move) -> bool {
        side_steps(mv).abs() == 1
            && forward_steps(mv) == 1
            && self.piece_at(mv.to) == Some(mv.piece.opponent())
    }

    /// Legal only straight after the opponent's two-square advance on an
    /// adjacent file. Checked geometrically: the capture must land on the
    /// square that advance skipped, so no phantom piece is ever placed on
    /// the board during validation.
    fn is_valid_en_passant(&self, mv: &Move, last_move: Option<&Move>) -> bool {
        let Some(last) = last_move else {
            return false;
        };
        if last.kind != MoveKind::Peaceful
            || last.piece != mv.piece.opponent()
            || side_steps(last) != 0
            || forward_steps(last) != 2
        {
            return false;
        }
        let skipped_rank = (last.from.rank() + last.to.rank()) / 2;
        side_steps(mv).abs() == 1
            && forward_steps(mv) == 1
            && mv.to.file() == last.to.file()
            && mv.to.rank() == skipped_rank
    }

    /// Unconditional mutation primitive. Legality is the caller's problem;
    /// this does exactly one move's worth of writes so undo can reverse it.
    /// For en passant the captured pawn sits behind the destination square
    /// (seen from its own side) and is cleared first.
    pub fn make_move(&mut self, mv: &Move) {
        if mv.kind == MoveKind::EnPassant {
            if let Ok(victim) = mv.to.offset(0, mv.piece.opponent().forward()) {
                self.set(victim, None);
            }
        }
        self.set(mv.from, None);
        self.set(mv.to, Some(mv.piece));
    }

    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank() as usize][square.file() as usize] = piece;
    }

    /// A pawn is passed when no opposing pawn sits strictly ahead of it on
    /// its file or an adjacent file, and every allied pawn ahead of it in
    /// that band is itself passed.
    pub fn is_passed_pawn(&self, square: Square) -> bool {
        let Some(piece) = self.piece_at(square) else {
            return false;
        };
        let ahead_and_adjacent = |other: Square| {
            let adjacent = (other.file() as i8 - square.file() as i8).abs() <= 1;
            let ahead = match piece {
                Piece::White => other.rank() > square.rank(),
                Piece::Black => other.rank() < square.rank(),
            };
            adjacent && ahead
        };
        if self
            .positions_of(piece.opponent())
            .into_iter()
            .any(ahead_and_adjacent)
        {
            return false;
        }
        self.positions_of(piece)
            .into_iter()
            .filter(|&ally| ahead_and_adjacent(ally))
            .all(|ally| self.is_passed_pawn(ally))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let cell = match self.squares[rank][file] {
                    Some(Piece::White) => 'W',
                    Some(Piece::Black) => 'B',
                    None => '.',
                };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

/// Rank displacement in the mover's forward direction; negative means the
/// move goes backward for that side.
fn forward_steps(mv: &Move) -> i8 {
    (mv.to.rank() as i8 - mv.from.rank() as i8) * mv.piece.forward()
}

fn side_steps(mv: &Move) -> i8 {
    mv.to.file() as i8 - mv.from.file() as i8
}
