//! Conversions between board coordinates and algebraic text.
//!
//! Row 0 is rank 8 and row 7 is rank 1, so ranks are inverted relative to rows.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok(Square {
        row: b'8' - rank,
        col: file - b'a',
    })
}

/// Convert a square to lowercase algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col);
    let rank_char = char::from(b'8' - square.row);
    format!("{file_char}{rank_char}")
}

/// Split long algebraic move text (`e2e4`, `e7e8q`) into its start and end squares.
///
/// Promotion is always to a queen, so the only accepted suffix is `q`.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(Square, Square)> {
    let text = text.trim();
    let invalid = || ChessError::InvalidMoveText(text.to_owned());

    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(invalid());
    }
    if let Some(piece) = text.get(4..) {
        if !piece.is_empty() && !piece.eq_ignore_ascii_case("q") {
            return Err(invalid());
        }
    }

    let start = text.get(0..2).ok_or_else(invalid)?;
    let end = text.get(2..4).ok_or_else(invalid)?;
    Ok((algebraic_to_square(start)?, algebraic_to_square(end)?))
}
