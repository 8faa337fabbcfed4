//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A relocation of one piece from `from` to `to`.
///
/// There are no special move kinds: castling, en passant and promotion are not
/// part of these rules, and a capture is whatever happens to stand on `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Signed rank delta
    #[inline]
    #[must_use]
    pub const fn rank_delta(self) -> isize {
        self.to.0 as isize - self.from.0 as isize
    }

    /// Signed file delta
    #[inline]
    #[must_use]
    pub const fn file_delta(self) -> isize {
        self.to.1 as isize - self.from.1 as isize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
