//! Move validation.
//!
//! [`Board::is_valid_move`] decides whether a piece may relocate from one
//! square to another by its movement rule alone. King safety is layered on
//! top in [`Board::is_legal`] via the make/unmake simulation in `check.rs`.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Bitboard, Board, Color, ColoredPiece, Move, Piece, Square};

impl Board {
    /// Whether `mover`, standing on `from`, may move to `to` by its movement rule.
    ///
    /// The piece is passed by value: the board is only consulted for
    /// occupancy, never to confirm that `mover` actually stands on `from`.
    /// Total for any input; off-board squares simply yield `false`.
    #[must_use]
    pub fn is_valid_move(&self, from: Square, mover: ColoredPiece, to: Square) -> bool {
        if !from.is_on_board() || !to.is_on_board() || from == to {
            return false;
        }
        if self.color_on(to) == Some(mover.color) {
            return false;
        }

        let mv = Move::new(from, to);
        match mover.piece {
            Piece::Pawn => self.is_valid_pawn_move(mv, mover.color),
            Piece::Knight => Self::is_valid_knight_move(mv),
            Piece::Bishop => self.is_valid_slider_move(mv, SliderType::Bishop),
            Piece::Rook => self.is_valid_slider_move(mv, SliderType::Rook),
            Piece::Queen => self.is_valid_slider_move(mv, SliderType::Queen),
            Piece::King => Self::is_valid_king_move(mv),
        }
    }

    /// [`Board::is_valid_move`] for whatever piece stands on `mv.from`.
    /// An empty source square is never a valid move.
    #[must_use]
    pub fn is_pseudo_legal(&self, mv: Move) -> bool {
        self.piece_at(mv.from)
            .is_some_and(|mover| self.is_valid_move(mv.from, mover, mv.to))
    }

    /// A pseudo-legal move that also keeps the mover's king out of check.
    pub fn is_legal(&mut self, mv: Move) -> bool {
        let Some(mover) = self.piece_at(mv.from) else {
            return false;
        };
        self.is_valid_move(mv.from, mover, mv.to) && !self.would_be_in_check(mv.from, mover, mv.to)
    }

    /// Every square the piece on `from` may legally move to.
    ///
    /// Empty when `from` holds no piece. The side to move is not consulted;
    /// that is the session's concern.
    pub fn legal_destinations(&mut self, from: Square) -> Bitboard {
        let Some(mover) = self.piece_at(from) else {
            return Bitboard::EMPTY;
        };

        let mut destinations = Bitboard::EMPTY;
        for to in Square::all() {
            if self.is_valid_move(from, mover, to) && !self.would_be_in_check(from, mover, to) {
                destinations.insert(to);
            }
        }
        destinations
    }

    /// All legal moves for `color`, ordered by source square then destination.
    pub fn legal_moves(&mut self, color: Color) -> Vec<Move> {
        let sources: Vec<Square> = self.occupied_by(color).iter().collect();
        let mut moves = Vec::new();
        for from in sources {
            for to in self.legal_destinations(from) {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }
}
