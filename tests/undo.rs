use pawnbot::board::Board;
use pawnbot::game::Game;
use pawnbot::moves::{Move, MoveKind};
use pawnbot::square::{Piece, Square};

fn sq(text: &str) -> Square {
    Square::from_text(text).expect("valid square")
}

fn mv(piece: Piece, from: &str, to: &str, kind: MoveKind) -> Move {
    Move::new(piece, sq(from), sq(to), kind)
}

#[test]
fn undo_restores_a_peaceful_move_exactly() {
    let mut game = Game::new(Board::new(0, 7), Piece::White);
    let before = game.board().clone();

    assert!(game.apply_move(mv(Piece::White, "b2", "b4", MoveKind::Peaceful)));
    assert_ne!(*game.board(), before);
    assert_eq!(game.side_to_move(), Piece::Black);

    game.undo_move();
    assert_eq!(*game.board(), before);
    assert_eq!(game.side_to_move(), Piece::White);
}

#[test]
fn undo_restores_a_captured_pawn_to_its_square() {
    let mut game = Game::new(Board::new(0, 7), Piece::White);
    assert!(game.apply_move(mv(Piece::White, "b2", "b4", MoveKind::Peaceful)));
    assert!(game.apply_move(mv(Piece::Black, "a7", "a5", MoveKind::Peaceful)));
    let before = game.board().clone();

    assert!(game.apply_move(mv(Piece::White, "b4", "a5", MoveKind::Capture)));
    assert_eq!(game.board().piece_at(sq("a5")), Some(Piece::White));
    assert_eq!(game.board().piece_at(sq("b4")), None);

    game.undo_move();
    assert_eq!(*game.board(), before);
    assert_eq!(game.board().piece_at(sq("a5")), Some(Piece::Black));
    assert_eq!(game.side_to_move(), Piece::White);

    // Unwind the whole game; the board must return to the initial layout.
    game.undo_move();
    game.undo_move();
    assert_eq!(*game.board(), Board::new(0, 7));
    assert_eq!(game.side_to_move(), Piece::White);
}

#[test]
fn undo_restores_an_en_passant_victim_off_the_destination_square() {
    let mut game = Game::new(Board::new(0, 7), Piece::White);
    assert!(game.apply_move(mv(Piece::White, "d2", "d4", MoveKind::Peaceful)));
    assert!(game.apply_move(mv(Piece::Black, "a7", "a5", MoveKind::Peaceful)));
    assert!(game.apply_move(mv(Piece::White, "c2", "c4", MoveKind::Peaceful)));
    assert!(game.apply_move(mv(Piece::Black, "a5", "a4", MoveKind::Peaceful)));
    assert!(game.apply_move(mv(Piece::White, "b2", "b4", MoveKind::Peaceful)));
    let before = game.board().clone();

    assert!(game.apply_move(mv(Piece::Black, "a4", "b3", MoveKind::EnPassant)));
    assert_eq!(game.board().piece_at(sq("b3")), Some(Piece::Black));
    assert_eq!(game.board().piece_at(sq("b4")), None);
    assert_eq!(game.board().piece_at(sq("a4")), None);

    game.undo_move();
    assert_eq!(*game.board(), before);
    assert_eq!(game.board().piece_at(sq("b4")), Some(Piece::White));
    assert_eq!(game.board().piece_at(sq("b3")), None);
    assert_eq!(game.board().piece_at(sq("a4")), Some(Piece::Black));
    assert_eq!(game.side_to_move(), Piece::Black);
}

#[test]
fn undo_on_empty_history_is_a_noop() {
    let mut game = Game::new(Board::new(2, 5), Piece::White);
    let before = game.board().clone();
    game.undo_move();
    assert_eq!(*game.board(), before);
    assert_eq!(game.side_to_move(), Piece::White);
}

#[test]
fn rejected_moves_leave_the_game_untouched() {
    let mut game = Game::new(Board::new(0, 7), Piece::White);
    let before = game.board().clone();

    // Out of turn.
    assert!(!game.apply_move(mv(Piece::Black, "a7", "a6", MoveKind::Peaceful)));
    // Geometrically illegal.
    assert!(!game.apply_move(mv(Piece::White, "b2", "b5", MoveKind::Peaceful)));
    // Capture into thin air.
    assert!(!game.apply_move(mv(Piece::White, "b2", "c3", MoveKind::Capture)));

    assert_eq!(*game.board(), before);
    assert_eq!(game.side_to_move(), Piece::White);
    assert!(game.last_move().is_none());
}
