use super::super::attack_tables::KING_STEPS;
use super::super::{Board, Move};

impl Board {
    /// One step in any direction. There is no castling.
    pub(crate) fn is_valid_king_move(mv: Move) -> bool {
        KING_STEPS[mv.from.as_index()].contains(mv.to)
    }
}
