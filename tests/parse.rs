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
fn peaceful_moves_parse_from_the_destination_alone() {
    let game = Game::new(Board::new(0, 7), Piece::White);
    assert_eq!(
        game.parse_move("b4"),
        Some(mv(Piece::White, "b2", "b4", MoveKind::Peaceful))
    );
    assert_eq!(
        game.parse_move("b3"),
        Some(mv(Piece::White, "b2", "b3", MoveKind::Peaceful))
    );
    // File letters are case-insensitive, stray whitespace is trimmed.
    assert_eq!(
        game.parse_move("B4"),
        Some(mv(Piece::White, "b2", "b4", MoveKind::Peaceful))
    );
    assert_eq!(
        game.parse_move(" b4\n"),
        Some(mv(Piece::White, "b2", "b4", MoveKind::Peaceful))
    );
}

#[test]
fn captures_parse_with_the_origin_file_disambiguating() {
    let mut board = Board::new(0, 7);
    board.make_move(&mv(Piece::White, "b2", "b6", MoveKind::Peaceful));
    board.make_move(&mv(Piece::White, "d2", "d6", MoveKind::Peaceful));
    let game = Game::new(board, Piece::White);

    // Both b6 and d6 attack c7; the origin file picks one.
    assert_eq!(
        game.parse_move("bxc7"),
        Some(mv(Piece::White, "b6", "c7", MoveKind::Capture))
    );
    assert_eq!(
        game.parse_move("dxc7"),
        Some(mv(Piece::White, "d6", "c7", MoveKind::Capture))
    );
}

#[test]
fn en_passant_parses_through_the_capture_notation() {
    let mut board = Board::new(0, 7);
    board.make_move(&mv(Piece::White, "e2", "e5", MoveKind::Peaceful));
    let mut game = Game::new(board, Piece::White);
    assert!(game.apply_move(mv(Piece::White, "g2", "g4", MoveKind::Peaceful)));
    assert!(game.apply_move(mv(Piece::Black, "f7", "f5", MoveKind::Peaceful)));

    // f6 is empty, so the plain capture reading fails and the parser falls
    // through to en passant.
    assert_eq!(
        game.parse_move("exf6"),
        Some(mv(Piece::White, "e5", "f6", MoveKind::EnPassant))
    );
}

#[test]
fn malformed_or_illegal_text_parses_to_none() {
    let game = Game::new(Board::new(0, 7), Piece::White);
    assert_eq!(game.parse_move(""), None);
    assert_eq!(game.parse_move("b"), None);
    assert_eq!(game.parse_move("b9"), None);
    assert_eq!(game.parse_move("i4"), None);
    assert_eq!(game.parse_move("b44"), None);
    assert_eq!(game.parse_move("b4c5"), None);
    assert_eq!(game.parse_move("bxc7x"), None);
    // No white pawn on the a file (it is the gap), so nothing can validate.
    assert_eq!(game.parse_move("axb4"), None);
    // No capture is available from b2 at the start.
    assert_eq!(game.parse_move("bxc3"), None);
}

#[test]
fn serialized_moves_round_trip_through_the_parser() {
    let mut game = Game::new(Board::new(0, 7), Piece::White);
    assert!(game.apply_move(mv(Piece::White, "b2", "b4", MoveKind::Peaceful)));
    assert!(game.apply_move(mv(Piece::Black, "a7", "a5", MoveKind::Peaceful)));

    let capture = mv(Piece::White, "b4", "a5", MoveKind::Capture);
    assert_eq!(capture.to_string(), "bxa5");
    assert_eq!(game.parse_move(&capture.to_string()), Some(capture));

    let peaceful = mv(Piece::White, "c2", "c4", MoveKind::Peaceful);
    assert_eq!(peaceful.to_string(), "c4");
    assert_eq!(game.parse_move(&peaceful.to_string()), Some(peaceful));
}
