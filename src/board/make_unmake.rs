use super::{Board, ColoredPiece, Move};

/// Everything needed to reverse a [`Board::make_move`] exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a made move must be unmade with this info"]
pub struct UnmakeInfo {
    pub(crate) moved: ColoredPiece,
    /// Whatever stood on `from` before the move (normally `moved` itself).
    pub(crate) previous_from: Option<ColoredPiece>,
    pub(crate) captured: Option<ColoredPiece>,
}

impl UnmakeInfo {
    #[must_use]
    pub fn captured(&self) -> Option<ColoredPiece> {
        self.captured
    }

    #[must_use]
    pub fn moved(&self) -> ColoredPiece {
        self.moved
    }
}

impl Board {
    /// Apply `mv` for `mover`: empty the source, drop any occupant of the
    /// destination, place `mover` on the destination.
    pub fn make_move(&mut self, mv: Move, mover: ColoredPiece) -> UnmakeInfo {
        let previous_from = self.remove_piece(mv.from);
        let captured = self.set_piece(mv.to, mover);
        UnmakeInfo {
            moved: mover,
            previous_from,
            captured,
        }
    }

    /// Reverse a [`Board::make_move`] made with the same `mv`.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        self.replace(mv.to, info.captured);
        self.replace(mv.from, info.previous_from);
    }
}
