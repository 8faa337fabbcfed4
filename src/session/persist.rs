//! Snapshots of a game and the store they are mirrored to.
//!
//! Storage is a best-effort mirror: the session keeps playing whatever a
//! store does, and the session's own state is always the authoritative one.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, ColoredPiece, Piece, Square};

/// One occupied square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    pub rank: usize,
    pub file: usize,
    pub color: Color,
    pub piece: Piece,
}

/// The persisted form of a game: a sparse list of pieces plus the side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    pub placements: Vec<Placement>,
    pub side_to_move: Color,
}

impl GameSnapshot {
    /// Capture `board` and `side_to_move`. Placements are in rank-major order.
    #[must_use]
    pub fn capture(board: &Board, side_to_move: Color) -> Self {
        let placements = board
            .pieces()
            .map(|(sq, p)| Placement {
                rank: sq.rank(),
                file: sq.file(),
                color: p.color,
                piece: p.piece,
            })
            .collect();
        GameSnapshot {
            placements,
            side_to_move,
        }
    }

    /// Rebuild the board, rejecting off-board and doubly occupied squares.
    pub fn to_board(&self) -> Result<Board, SnapshotError> {
        let mut board = Board::empty();
        for placement in &self.placements {
            let square = Square::new(placement.rank, placement.file).ok_or(
                SnapshotError::SquareOutOfBounds {
                    rank: placement.rank,
                    file: placement.file,
                },
            )?;
            let piece = ColoredPiece::new(placement.color, placement.piece);
            if board.set_piece(square, piece).is_some() {
                return Err(SnapshotError::DuplicateSquare { square });
            }
        }
        Ok(board)
    }
}

/// Error type for snapshots that do not describe a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// A placement lies outside the 8x8 grid
    SquareOutOfBounds { rank: usize, file: usize },
    /// Two placements share a square
    DuplicateSquare { square: Square },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::SquareOutOfBounds { rank, file } => {
                write!(f, "Placement ({rank}, {file}) is off the board")
            }
            SnapshotError::DuplicateSquare { square } => {
                write!(f, "Square {square} holds more than one piece")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

/// A failure reported by a [`SnapshotStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        StoreError {
            message: message.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "snapshot store error: {}", self.message)
    }
}

impl std::error::Error for StoreError {}

/// Where a session mirrors its state after every committed move.
pub trait SnapshotStore {
    fn save(&self, snapshot: &GameSnapshot) -> Result<(), StoreError>;

    /// The most recently stored game, if any.
    fn load(&self) -> Result<Option<GameSnapshot>, StoreError> {
        Ok(None)
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStore;

impl SnapshotStore for NullStore {
    fn save(&self, _snapshot: &GameSnapshot) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Keeps every saved snapshot in memory, oldest first. Clones share the same
/// storage. [`SnapshotStore::load`] returns the latest save.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    saved: Arc<Mutex<Vec<GameSnapshot>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `load` returns `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: GameSnapshot) -> Self {
        MemoryStore {
            saved: Arc::new(Mutex::new(vec![snapshot])),
        }
    }

    #[must_use]
    pub fn latest(&self) -> Option<GameSnapshot> {
        self.saved.lock().last().cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.saved.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.saved.lock().is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&self, snapshot: &GameSnapshot) -> Result<(), StoreError> {
        self.saved.lock().push(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<GameSnapshot>, StoreError> {
        Ok(self.latest())
    }
}
