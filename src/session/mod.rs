//! Turn and selection state machine.
//!
//! A [`GameSession`] owns the live [`Board`], the side to move and the current
//! selection. It is either idle or has one square selected; a successful move
//! clears the selection and hands the turn to the other side. Play never
//! ends: there is no checkmate, stalemate or draw detection, only an
//! informational check flag after each move.
//!
//! # Example
//! ```
//! use chess_rules::session::GameSession;
//!
//! let mut session = GameSession::new();
//! assert!(session.select_piece(1, 4)); // e2
//! assert!(session.attempt_move(3, 4)); // e4
//! assert!(!session.select_piece(3, 4)); // black to move now
//! ```

mod error;
mod options;
mod persist;

use std::fmt;

use log::{debug, info, warn};

use crate::board::{parse_fen, Bitboard, Board, Color, ColoredPiece, FenError, Move, Square};

pub use error::{MoveError, SelectError};
pub use options::{OptionError, SessionOptions};
pub use persist::{
    GameSnapshot, MemoryStore, NullStore, Placement, SnapshotError, SnapshotStore, StoreError,
};

/// A committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub piece: ColoredPiece,
    pub captured: Option<ColoredPiece>,
    /// Whether the side now on move is in check.
    pub check: bool,
}

/// What a pointer press on a square did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Moved(MoveOutcome),
    /// A piece was (re)selected; carries its legal destinations.
    Selected(Bitboard),
    /// The press was off the board and the selection was dropped.
    Cleared,
    /// Nothing changed.
    Ignored,
}

pub struct GameSession {
    board: Board,
    side_to_move: Color,
    selection: Option<Square>,
    highlights: Bitboard,
    options: SessionOptions,
    store: Box<dyn SnapshotStore>,
}

impl GameSession {
    /// Standard starting position, White to move, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Board::new(), Color::White)
    }

    /// Start from an arbitrary board.
    #[must_use]
    pub fn from_position(board: Board, side_to_move: Color) -> Self {
        GameSession {
            board,
            side_to_move,
            selection: None,
            highlights: Bitboard::EMPTY,
            options: SessionOptions::default(),
            store: Box::new(NullStore),
        }
    }

    /// Restore a persisted game.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<Self, SnapshotError> {
        let board = snapshot.to_board()?;
        Ok(Self::from_position(board, snapshot.side_to_move))
    }

    /// Start from a FEN string; the side-to-move field defaults to White.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let (board, side) = parse_fen(fen)?;
        Ok(Self::from_position(board, side))
    }

    /// Resume the game `store` last saved, or start a new one.
    ///
    /// Load failures and unusable snapshots are logged and fall back to the
    /// starting position. The store stays attached to the returned session.
    pub fn resume<S>(store: S) -> Self
    where
        S: SnapshotStore + 'static,
    {
        let restored = match store.load() {
            Ok(Some(snapshot)) => match Self::from_snapshot(&snapshot) {
                Ok(session) => Some(session),
                Err(err) => {
                    warn!("Discarding stored game: {err}");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!("Could not load stored game: {err}");
                None
            }
        };

        restored.unwrap_or_default().with_store(store)
    }

    #[must_use]
    pub fn with_store<S>(mut self, store: S) -> Self
    where
        S: SnapshotStore + 'static,
    {
        self.store = Box::new(store);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    /// New game from the starting position. Options and store are kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.side_to_move = Color::White;
        self.clear_selection();
        debug!("Game reset");
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// Legal destinations of the selected piece (empty when idle or when
    /// highlighting is disabled).
    #[must_use]
    pub fn highlights(&self) -> Bitboard {
        self.highlights
    }

    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut SessionOptions {
        &mut self.options
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_king_in_check(color)
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.board, self.side_to_move)
    }

    /// Placement and side-to-move fields of FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!("{} {}", self.board.to_fen(), self.side_to_move.to_fen_char())
    }

    /// Select the piece on (`rank`, `file`). Fails without changing anything
    /// unless the square holds a piece of the side to move.
    pub fn select_piece(&mut self, rank: usize, file: usize) -> bool {
        self.try_select(rank, file).is_ok()
    }

    /// [`GameSession::select_piece`] with the reason for a refusal. On success
    /// returns the selected piece's legal destinations.
    pub fn try_select(&mut self, rank: usize, file: usize) -> Result<Bitboard, SelectError> {
        let square = Square::new(rank, file).ok_or(SelectError::OffBoard { rank, file })?;
        let piece = self
            .board
            .piece_at(square)
            .ok_or(SelectError::EmptySquare { square })?;
        if piece.color != self.side_to_move {
            return Err(SelectError::NotSideToMove {
                square,
                color: piece.color,
            });
        }

        self.selection = Some(square);
        self.highlights = if self.options.highlight_destinations {
            self.board.legal_destinations(square)
        } else {
            Bitboard::EMPTY
        };
        debug!(
            "Selected {piece} on {square}, {} legal destinations",
            self.highlights.popcount()
        );
        Ok(self.highlights)
    }

    /// Drop the selection and its highlights.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.highlights = Bitboard::EMPTY;
    }

    /// Move the selected piece to (`rank`, `file`). On failure nothing changes.
    pub fn attempt_move(&mut self, rank: usize, file: usize) -> bool {
        self.try_move(rank, file).is_ok()
    }

    /// [`GameSession::attempt_move`] with the reason for a refusal.
    pub fn try_move(&mut self, rank: usize, file: usize) -> Result<MoveOutcome, MoveError> {
        let from = self.selection.ok_or(MoveError::NoSelection)?;
        let to = Square::new(rank, file).ok_or(MoveError::OffBoard { rank, file })?;
        let mover = self.board.piece_at(from).ok_or(MoveError::NoSelection)?;
        let mv = Move::new(from, to);

        if mover.color != self.side_to_move || !self.board.is_valid_move(from, mover, to) {
            return Err(MoveError::IllegalMove { mv });
        }
        if self.board.would_be_in_check(from, mover, to) {
            return Err(MoveError::LeavesKingInCheck { mv });
        }

        let info = self.board.make_move(mv, mover);
        self.clear_selection();
        self.side_to_move = self.side_to_move.opponent();

        let check = self.board.is_king_in_check(self.side_to_move);
        debug!("{mover} {mv}");
        if check && self.options.announce_check {
            info!("Check! {} king is in danger", self.side_to_move);
        }

        self.persist();

        Ok(MoveOutcome {
            mv,
            piece: mover,
            captured: info.captured(),
            check,
        })
    }

    /// A pointer press on (`rank`, `file`).
    ///
    /// With a piece selected, tries to move it there and otherwise tries to
    /// select the pressed square instead. Without a selection, just selects.
    /// A press off the board drops the selection.
    pub fn click(&mut self, rank: usize, file: usize) -> ClickOutcome {
        if Square::new(rank, file).is_none() {
            self.clear_selection();
            return ClickOutcome::Cleared;
        }

        if self.selection.is_some() {
            if let Ok(outcome) = self.try_move(rank, file) {
                return ClickOutcome::Moved(outcome);
            }
        }

        match self.try_select(rank, file) {
            Ok(destinations) => ClickOutcome::Selected(destinations),
            Err(_) => ClickOutcome::Ignored,
        }
    }

    fn persist(&self) {
        if !self.options.persist_after_move {
            return;
        }
        if let Err(err) = self.store.save(&self.snapshot()) {
            warn!("Failed to persist game state: {err}");
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("side_to_move", &self.side_to_move)
            .field("selection", &self.selection)
            .field("highlights", &self.highlights)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
