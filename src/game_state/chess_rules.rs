//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard starting position and the home squares
//! that anchor castling rights.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Column of both kings at the start of the game.
pub const KING_HOME_COL: u8 = 4;

/// Column of the king-side rook's home square.
pub const KINGSIDE_ROOK_COL: u8 = 7;

/// Column of the queen-side rook's home square.
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Castling right lost when a rook leaves or is captured on `square`, if any.
#[inline]
pub fn castling_right_for_rook_home(square: Square) -> Option<CastlingRights> {
    match (square.row, square.col) {
        (7, QUEENSIDE_ROOK_COL) => Some(CASTLE_WHITE_QUEENSIDE),
        (7, KINGSIDE_ROOK_COL) => Some(CASTLE_WHITE_KINGSIDE),
        (0, QUEENSIDE_ROOK_COL) => Some(CASTLE_BLACK_QUEENSIDE),
        (0, KINGSIDE_ROOK_COL) => Some(CASTLE_BLACK_KINGSIDE),
        _ => None,
    }
}

/// Rook source and destination columns for a castle whose king lands on `king_end_col`.
#[inline]
pub const fn castling_rook_columns(king_end_col: u8) -> (u8, u8) {
    if king_end_col > KING_HOME_COL {
        (KINGSIDE_ROOK_COL, king_end_col - 1)
    } else {
        (QUEENSIDE_ROOK_COL, king_end_col + 1)
    }
}
