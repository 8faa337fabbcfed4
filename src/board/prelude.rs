//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{Bitboard, Board, BoardBuilder, Color, ColoredPiece, Move, Piece, Square};
pub use crate::session::{GameSession, MoveOutcome, SessionOptions};
