use super::super::attack_tables::KNIGHT_STEPS;
use super::super::{Board, Move};

impl Board {
    /// Knights jump, so occupancy in between never matters.
    pub(crate) fn is_valid_knight_move(mv: Move) -> bool {
        KNIGHT_STEPS[mv.from.as_index()].contains(mv.to)
    }
}
