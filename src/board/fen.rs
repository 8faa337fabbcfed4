use super::error::FenError;
use super::{Board, Color, ColoredPiece, Square};

/// Parse the placement field and optional side-to-move field of a FEN string.
///
/// Castling, en passant and clock fields are accepted and ignored. A missing
/// side-to-move field means White.
pub(crate) fn parse_fen(fen: &str) -> Result<(Board, Color), FenError> {
    let mut parts = fen.split_whitespace();
    let placement = parts.next().ok_or(FenError::Empty)?;

    let mut board = Board::empty();
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() > 8 {
        return Err(FenError::TooManyRanks { found: ranks.len() });
    }
    if ranks.len() < 8 {
        return Err(FenError::TooFewRanks { found: ranks.len() });
    }

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx;
        let mut file = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 {
                    return Err(FenError::InvalidPiece { char: c });
                }
                file += skip as usize;
            } else {
                let piece =
                    ColoredPiece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank,
                        files: file + 1,
                    });
                }
                board.set_piece(Square(rank, file), piece);
                file += 1;
            }
            if file > 8 {
                return Err(FenError::TooManyFiles { rank, files: file });
            }
        }
        if file < 8 {
            return Err(FenError::TooFewFiles { rank, files: file });
        }
    }

    let side = match parts.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };

    Ok((board, side))
}

impl Board {
    /// Parse a board from FEN. Only the placement field is used here; see
    /// [`GameSession::try_from_fen`](crate::session::GameSession::try_from_fen)
    /// for the side to move.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen).map(|(board, _)| board)
    }

    /// The FEN placement field for this board.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some(piece) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}
