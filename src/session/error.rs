//! Why a selection or a move was refused.
//!
//! Callers that only need success or failure use the boolean
//! `select_piece`/`attempt_move`; the reasons here are for hosts that want to
//! explain a rejection.

use std::fmt;

use crate::board::{Color, Move, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// Coordinates outside the 8x8 grid
    OffBoard { rank: usize, file: usize },
    /// Nothing to select on this square
    EmptySquare { square: Square },
    /// The piece belongs to the side not on move
    NotSideToMove { square: Square, color: Color },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::OffBoard { rank, file } => {
                write!(f, "({rank}, {file}) is off the board")
            }
            SelectError::EmptySquare { square } => write!(f, "No piece on {square}"),
            SelectError::NotSideToMove { square, color } => {
                write!(f, "Piece on {square} belongs to {color}, who is not on move")
            }
        }
    }
}

impl std::error::Error for SelectError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No piece is selected
    NoSelection,
    /// Destination outside the 8x8 grid
    OffBoard { rank: usize, file: usize },
    /// The piece cannot move that way
    IllegalMove { mv: Move },
    /// The move would leave the mover's own king attacked
    LeavesKingInCheck { mv: Move },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoSelection => write!(f, "No piece selected"),
            MoveError::OffBoard { rank, file } => {
                write!(f, "({rank}, {file}) is off the board")
            }
            MoveError::IllegalMove { mv } => write!(f, "Illegal move '{mv}'"),
            MoveError::LeavesKingInCheck { mv } => {
                write!(f, "Move '{mv}' would leave the king in check")
            }
        }
    }
}

impl std::error::Error for MoveError {}
