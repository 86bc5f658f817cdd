use std::fmt;
use thiserror::Error;

/// The one fatal error class in the core: a file or rank index left the 8x8
/// board. Everything gameplay-level (illegal move, bad text) is an `Option`
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("square out of range: file {file}, rank {rank}")]
pub struct OutOfRange {
    pub file: i8,
    pub rank: i8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    White,
    Black,
}

impl Piece {
    pub fn opponent(self) -> Piece {
        match self {
            Piece::White => Piece::Black,
            Piece::Black => Piece::White,
        }
    }

    /// Direction of travel along the rank axis: White races upward.
    pub fn forward(self) -> i8 {
        match self {
            Piece::White => 1,
            Piece::Black => -1,
        }
    }

    /// Rank index the side's pawns start on.
    pub fn home_rank(self) -> u8 {
        match self {
            Piece::White => 1,
            Piece::Black => 6,
        }
    }

    /// Rank index the side is racing toward.
    pub fn promotion_rank(self) -> u8 {
        match self {
            Piece::White => 7,
            Piece::Black => 0,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::White => write!(f, "White"),
            Piece::Black => write!(f, "Black"),
        }
    }
}

/// A validated board coordinate. File 0..=7 maps to a..h, rank 0..=7 to 1..8;
/// a `Square` that exists is always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(file: i8, rank: i8) -> Result<Square, OutOfRange> {
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return Err(OutOfRange { file, rank });
        }
        Ok(Square {
            file: file as u8,
            rank: rank as u8,
        })
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Bounds-checked offset; fails with `OutOfRange` exactly like `new`.
    pub fn offset(self, files: i8, ranks: i8) -> Result<Square, OutOfRange> {
        Square::new(self.file as i8 + files, self.rank as i8 + ranks)
    }

    /// Algebraic form like "b4". File letters are case-insensitive.
    pub fn from_text(text: &str) -> Option<Square> {
        let mut chars = text.chars();
        let square = Square::from_chars(chars.next()?, chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(square)
    }

    pub fn from_chars(file: char, rank: char) -> Option<Square> {
        Some(Square {
            file: file_index(file)?,
            rank: rank_index(rank)?,
        })
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank + 1)
    }
}

/// 'a'..='h' (either case) to 0..=7.
pub fn file_index(c: char) -> Option<u8> {
    let c = c.to_ascii_lowercase();
    if ('a'..='h').contains(&c) {
        Some(c as u8 - b'a')
    } else {
        None
    }
}

/// '1'..='8' to 0..=7.
pub fn rank_index(c: char) -> Option<u8> {
    if ('1'..='8').contains(&c) {
        Some(c as u8 - b'1')
    } else {
        None
    }
}
