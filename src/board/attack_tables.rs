use once_cell::sync::Lazy;

use super::{Bitboard, Square};

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn step_table(deltas: &[(isize, isize)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for (idx, entry) in table.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        *entry = deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect();
    }
    table
}

/// Squares a knight on each square can jump to.
pub(crate) static KNIGHT_STEPS: Lazy<[Bitboard; 64]> = Lazy::new(|| step_table(&KNIGHT_DELTAS));

/// Squares a king on each square can step to.
pub(crate) static KING_STEPS: Lazy<[Bitboard; 64]> = Lazy::new(|| step_table(&KING_DELTAS));
