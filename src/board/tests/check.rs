//! Check detection tests.

use crate::board::{Board, BoardBuilder, Color, ColoredPiece, Move, Piece, Square};

fn king_and(attacker_sq: Square, attacker: Piece) -> Board {
    BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(attacker_sq, Color::Black, attacker)
        .build()
}

#[test]
fn test_rook_on_open_file_gives_check() {
    let board = king_and(Square(7, 4), Piece::Rook);
    assert!(board.is_king_in_check(Color::White));
}

#[test]
fn test_bishop_on_same_file_does_not() {
    let board = king_and(Square(7, 4), Piece::Bishop);
    assert!(!board.is_king_in_check(Color::White));
}

#[test]
fn test_blocked_line_is_not_check() {
    let mut board = king_and(Square(7, 4), Piece::Rook);
    board.set_piece(Square(3, 4), ColoredPiece::new(Color::White, Piece::Knight));
    assert!(!board.is_king_in_check(Color::White));
    board.remove_piece(Square(3, 4));
    assert!(board.is_king_in_check(Color::White));
}

#[test]
fn test_pawn_checks_diagonally_only() {
    assert!(king_and(Square(1, 3), Piece::Pawn).is_king_in_check(Color::White));
    assert!(king_and(Square(1, 5), Piece::Pawn).is_king_in_check(Color::White));
    // A pawn directly in front of the king cannot capture it.
    assert!(!king_and(Square(1, 4), Piece::Pawn).is_king_in_check(Color::White));
}

#[test]
fn test_knight_and_king_attacks() {
    assert!(king_and(Square(2, 5), Piece::Knight).is_king_in_check(Color::White));
    assert!(king_and(Square(1, 4), Piece::King).is_king_in_check(Color::White));
    assert!(!king_and(Square(2, 4), Piece::King).is_king_in_check(Color::White));
}

#[test]
fn test_no_king_means_no_check() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::Black, Piece::Rook)
        .build();
    assert!(!board.is_king_in_check(Color::White));
    assert_eq!(board.king_square(Color::White), None);
}

#[test]
fn test_start_position_no_check() {
    let board = Board::new();
    assert!(!board.is_king_in_check(Color::White));
    assert!(!board.is_king_in_check(Color::Black));
    assert_eq!(board.king_square(Color::White), Some(Square(0, 4)));
    assert_eq!(board.king_square(Color::Black), Some(Square(7, 4)));
}

#[test]
fn test_first_king_in_scan_order_is_used() {
    // Two white kings: only a1, the first in rank-major order, is tested.
    let board = BoardBuilder::new()
        .piece(Square(0, 0), Color::White, Piece::King)
        .piece(Square(5, 7), Color::White, Piece::King)
        .piece(Square(7, 7), Color::Black, Piece::Rook)
        .build();
    assert_eq!(board.king_square(Color::White), Some(Square(0, 0)));
    assert!(!board.is_king_in_check(Color::White));
}

#[test]
fn test_attackers_of() {
    let board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(7, 4), Color::Black, Piece::Rook)
        .piece(Square(3, 0), Color::Black, Piece::Bishop)
        .piece(Square(2, 2), Color::Black, Piece::Bishop)
        .build();
    let attackers: Vec<Square> = board.attackers_of(Square(0, 4), Color::Black).iter().collect();
    // The a4 bishop is off every diagonal through e1; the c3 bishop reaches it via d2.
    assert_eq!(attackers, vec![Square(2, 2), Square(7, 4)]);
}

#[test]
fn test_would_be_in_check_detects_pin() {
    let mut board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(1, 4), Color::White, Piece::Bishop)
        .piece(Square(7, 4), Color::Black, Piece::Rook)
        .build();
    let bishop = ColoredPiece::new(Color::White, Piece::Bishop);
    assert!(board.would_be_in_check(Square(1, 4), bishop, Square(2, 5)));
}

#[test]
fn test_would_be_in_check_capturing_the_attacker() {
    let mut board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(7, 0), Color::White, Piece::Rook)
        .piece(Square(7, 4), Color::Black, Piece::Rook)
        .build();
    let rook = ColoredPiece::new(Color::White, Piece::Rook);
    assert!(board.is_king_in_check(Color::White));
    assert!(!board.would_be_in_check(Square(7, 0), rook, Square(7, 4)));
}

#[test]
fn test_king_cannot_step_into_attack() {
    let mut board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(7, 3), Color::Black, Piece::Rook)
        .build();
    let king = ColoredPiece::new(Color::White, Piece::King);
    assert!(board.would_be_in_check(Square(0, 4), king, Square(0, 3)));
    assert!(!board.would_be_in_check(Square(0, 4), king, Square(0, 5)));

    let destinations = board.legal_destinations(Square(0, 4));
    assert!(!destinations.contains(Square(0, 3)));
    assert!(!destinations.contains(Square(1, 3)));
    assert!(destinations.contains(Square(1, 4)));
}

#[test]
fn test_would_be_in_check_leaves_board_untouched() {
    let mut board =
        Board::try_from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R").unwrap();
    let before = board.clone();
    for (from, piece) in before.pieces() {
        for to in Square::all() {
            let _ = board.would_be_in_check(from, piece, to);
            assert_eq!(
                board,
                before,
                "simulating {} for {piece} leaked",
                Move::new(from, to)
            );
        }
    }
}
