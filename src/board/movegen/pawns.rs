use super::super::{Board, Color, Move};

impl Board {
    /// Pawn rule: one step forward onto an empty square, two from the start
    /// rank through an empty square, or one step diagonally onto an enemy.
    pub(crate) fn is_valid_pawn_move(&self, mv: Move, color: Color) -> bool {
        let dir = color.pawn_direction();
        let dr = mv.rank_delta();
        let df = mv.file_delta();

        if df == 0 {
            if dr == dir {
                return self.is_empty(mv.to);
            }
            if dr == 2 * dir && mv.from.rank() == color.pawn_start_rank() {
                let Some(middle) = mv.from.offset(dir, 0) else {
                    return false;
                };
                return self.is_empty(middle) && self.is_empty(mv.to);
            }
            return false;
        }

        // No en passant: a diagonal needs a piece to take.
        dr == dir
            && df.abs() == 1
            && self.color_on(mv.to).is_some_and(|target| target != color)
    }
}
