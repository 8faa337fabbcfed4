use std::fmt;

use super::{Bitboard, Color, ColoredPiece, Piece, Square};

/// The authoritative grid of pieces.
///
/// One slot per square, indexed by `rank * 8 + file`, so a square can never
/// hold two pieces. The board carries no side to move and no game history;
/// that state belongs to [`GameSession`](crate::session::GameSession).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [Option<ColoredPiece>; 64],
}

impl Board {
    /// Standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, piece) in Piece::BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                board.set_piece(
                    Square(color.back_rank(), file),
                    ColoredPiece::new(color, *piece),
                );
                board.set_piece(
                    Square(color.pawn_start_rank(), file),
                    ColoredPiece::new(color, Piece::Pawn),
                );
            }
        }
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// The piece on `sq`, or `None` for an empty or off-board square.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        if !sq.is_on_board() {
            return None;
        }
        self.squares[sq.as_index()]
    }

    /// Get just the piece kind on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|p| p.piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    /// True for an on-board square with no piece. Off-board squares are not empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        sq.is_on_board() && self.squares[sq.as_index()].is_none()
    }

    /// Place `piece` on `sq`, returning whatever stood there before.
    /// Off-board squares are ignored.
    pub(crate) fn set_piece(&mut self, sq: Square, piece: ColoredPiece) -> Option<ColoredPiece> {
        self.replace(sq, Some(piece))
    }

    /// Empty `sq`, returning the piece that stood there.
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<ColoredPiece> {
        self.replace(sq, None)
    }

    pub(crate) fn replace(
        &mut self,
        sq: Square,
        slot: Option<ColoredPiece>,
    ) -> Option<ColoredPiece> {
        if !sq.is_on_board() {
            return None;
        }
        std::mem::replace(&mut self.squares[sq.as_index()], slot)
    }

    /// Occupied squares with their pieces, rank ascending then file ascending.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|p| (Square::from_index(idx), p)))
    }

    /// Squares holding a piece of `color`.
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.pieces()
            .filter(|(_, p)| p.color == color)
            .map(|(sq, _)| sq)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = self
                    .piece_at(Square(rank, file))
                    .map_or('.', ColoredPiece::to_fen_char);
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}
