//! Core chess types.
//!
//! - `Piece`, `Color` and `ColoredPiece` - piece kinds, sides, and the pair
//! - `Square` - (rank, file) board coordinate
//! - `Bitboard` - 64-bit square set
//! - `Move` - a from/to relocation

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::Move;
pub use piece::{Color, ColoredPiece, Piece};
pub use square::Square;
