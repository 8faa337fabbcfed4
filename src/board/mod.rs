//! Chess board representation and move rules.
//!
//! The board is a 64-slot array of optional pieces. Move validation is a pure
//! query against a board; check detection reuses the same validation, and the
//! "does this leave my king attacked" test makes the move on the board, asks,
//! and unmakes it again.
//!
//! Castling, en passant and promotion are not part of these rules.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let mut board = Board::new();
//! let knight = board.piece_at(Square(0, 1)).unwrap();
//! assert!(board.is_valid_move(Square(0, 1), knight, Square(2, 2)));
//! assert_eq!(board.legal_moves(Color::White).len(), 20);
//! ```

mod attack_tables;
mod builder;
mod check;
mod error;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, SquareError};
pub use make_unmake::UnmakeInfo;
pub use state::Board;
pub use types::{Bitboard, BitboardIter, Color, ColoredPiece, Move, Piece, Square};

pub(crate) use fen::parse_fen;
