use super::super::{Board, Move};

/// Type of sliding piece for move validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn allows(self, mv: Move) -> bool {
        let dr = mv.rank_delta();
        let df = mv.file_delta();
        let straight = dr == 0 || df == 0;
        let diagonal = dr.abs() == df.abs();
        match self {
            SliderType::Rook => straight,
            SliderType::Bishop => diagonal,
            SliderType::Queen => straight || diagonal,
        }
    }
}

impl Board {
    pub(crate) fn is_valid_slider_move(&self, mv: Move, slider: SliderType) -> bool {
        slider.allows(mv) && self.path_is_clear(mv)
    }

    /// True when every square strictly between `mv.from` and `mv.to` is empty.
    ///
    /// `mv` must lie on a shared rank, file or diagonal.
    pub(crate) fn path_is_clear(&self, mv: Move) -> bool {
        let step_r = mv.rank_delta().signum();
        let step_f = mv.file_delta().signum();

        let mut current = mv.from;
        loop {
            let Some(next) = current.offset(step_r, step_f) else {
                return false;
            };
            if next == mv.to {
                return true;
            }
            if !self.is_empty(next) {
                return false;
            }
            current = next;
        }
    }
}
