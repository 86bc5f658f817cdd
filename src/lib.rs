pub mod board;
pub mod engine;
pub mod game;
pub mod moves;
pub mod protocol;
pub mod search;
pub mod square;

// Re-exports kept minimal: the core types most callers touch.
pub use board::Board;
pub use game::Game;
pub use moves::{Move, MoveKind};
pub use square::{OutOfRange, Piece, Square};
