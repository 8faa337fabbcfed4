pub mod board;
pub mod session;

pub use board::{Bitboard, Board, Color, ColoredPiece, Move, Piece, Square};
pub use session::{ClickOutcome, GameSession, MoveError, MoveOutcome, SelectError};
