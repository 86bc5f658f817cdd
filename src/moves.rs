use std::fmt;

use crate::square::{Piece, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Peaceful,
    Capture,
    EnPassant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    pub fn new(piece: Piece, from: Square, to: Square, kind: MoveKind) -> Move {
        Move {
            piece,
            from,
            to,
            kind,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.kind != MoveKind::Peaceful
    }
}

impl fmt::Display for Move {
    /// Runner notation: peaceful moves print as the bare destination ("b4"),
    /// captures and en passant as origin file plus destination ("bxc7").
    /// Both forms round-trip through `Game::parse_move`; destination-only
    /// output would lose the capture marker.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Peaceful => write!(f, "{}", self.to),
            MoveKind::Capture | MoveKind::EnPassant => {
                write!(f, "{}x{}", self.from.file_char(), self.to)
            }
        }
    }
}
