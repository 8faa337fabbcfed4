//! Check detection.

use super::{Bitboard, Board, Color, ColoredPiece, Move, Piece, Square};

impl Board {
    /// First king of `color` in rank-major order (a1, b1, ..., h8).
    ///
    /// Boards are not required to hold exactly one king per side; with
    /// several, only the first found is ever considered.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = ColoredPiece::new(color, Piece::King);
        self.pieces()
            .find(|(_, p)| *p == king)
            .map(|(sq, _)| sq)
    }

    /// Pieces of `by` that could validly move onto `target`.
    #[must_use]
    pub fn attackers_of(&self, target: Square, by: Color) -> Bitboard {
        self.pieces()
            .filter(|(from, p)| p.color == by && self.is_valid_move(*from, *p, target))
            .map(|(from, _)| from)
            .collect()
    }

    /// Whether the king of `color` is attacked. A side with no king is
    /// never in check.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        let Some(king_sq) = self.king_square(color) else {
            return false;
        };
        let opponent = color.opponent();
        self.pieces()
            .any(|(from, p)| p.color == opponent && self.is_valid_move(from, p, king_sq))
    }

    /// Whether moving `mover` from `from` to `to` would leave its own king attacked.
    ///
    /// The move is made on this board, tested, and unmade before returning,
    /// so the board is unchanged afterwards.
    pub fn would_be_in_check(&mut self, from: Square, mover: ColoredPiece, to: Square) -> bool {
        let mv = Move::new(from, to);
        let info = self.make_move(mv, mover);
        let in_check = self.is_king_in_check(mover.color);
        self.unmake_move(mv, info);
        in_check
    }
}
