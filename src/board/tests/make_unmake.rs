//! Make/unmake move tests.

use crate::board::{Board, BoardBuilder, Color, ColoredPiece, Move, Piece, Square};
use rand::prelude::*;

#[test]
fn test_quiet_move_make_unmake() {
    let mut board = Board::new();
    let original = board.clone();
    let mv = Move::new(Square(1, 4), Square(3, 4));
    let pawn = board.piece_at(mv.from).unwrap();

    let info = board.make_move(mv, pawn);
    assert_eq!(info.captured(), None);
    assert_eq!(board.piece_at(Square(3, 4)), Some(pawn));
    assert!(board.is_empty(Square(1, 4)));

    board.unmake_move(mv, info);
    assert_eq!(board, original);
}

#[test]
fn test_capture_make_unmake() {
    let mut board = BoardBuilder::new()
        .piece(Square(0, 0), Color::White, Piece::Rook)
        .piece(Square(7, 0), Color::Black, Piece::Queen)
        .build();
    let original = board.clone();
    let mv = Move::new(Square(0, 0), Square(7, 0));
    let rook = ColoredPiece::new(Color::White, Piece::Rook);

    let info = board.make_move(mv, rook);
    assert_eq!(
        info.captured(),
        Some(ColoredPiece::new(Color::Black, Piece::Queen))
    );
    assert_eq!(board.pieces().count(), 1);

    board.unmake_move(mv, info);
    assert_eq!(board, original);
}

#[test]
fn test_make_unmake_piece_not_on_source() {
    // Simulating a piece that is not actually on `from` must still restore exactly.
    let mut board = BoardBuilder::new()
        .piece(Square(2, 2), Color::Black, Piece::Knight)
        .build();
    let original = board.clone();
    let mv = Move::new(Square(2, 2), Square(5, 5));
    let queen = ColoredPiece::new(Color::White, Piece::Queen);

    let info = board.make_move(mv, queen);
    assert_eq!(info.moved(), queen);
    assert_eq!(board.piece_at(Square(5, 5)), Some(queen));
    assert!(board.is_empty(Square(2, 2)));

    board.unmake_move(mv, info);
    assert_eq!(board, original);
}

#[test]
fn test_null_move_make_unmake() {
    let mut board = Board::new();
    let original = board.clone();
    let mv = Move::new(Square(0, 3), Square(0, 3));
    let queen = board.piece_at(mv.from).unwrap();

    let info = board.make_move(mv, queen);
    board.unmake_move(mv, info);
    assert_eq!(board, original);
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..12 {
        let color = if rng.gen_bool(0.5) {
            Color::White
        } else {
            Color::Black
        };
        let moves = board.legal_moves(color);
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        let mover = board.piece_at(mv.from).unwrap();

        let before = board.legal_moves(color.opponent());
        let info = board.make_move(mv, mover);
        board.unmake_move(mv, info);
        assert_eq!(board.legal_moves(color.opponent()), before);

        let _ = board.make_move(mv, mover);
    }
}
