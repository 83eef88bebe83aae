//! Move value type.
//!
//! A `Move` records everything make/undo needs (moved and captured pieces plus
//! special-move flags), snapshotted from the board before the move is applied.
//! Identity is the packed start/end coordinate key alone.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

const START_SHIFT: u16 = 6;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_pawn_promotion: bool,
    pub is_castle_move: bool,
    pub is_enpassant_move: bool,
}

impl Move {
    /// Builds an ordinary move by reading the pieces on `board` before it is mutated.
    ///
    /// Fails if `start` is empty. Castling and en passant are only produced by the
    /// generator; a hand-built move with the same squares still compares equal to them.
    pub fn from_board(start: Square, end: Square, board: &Board) -> ChessResult<Self> {
        let piece = board
            .get(start)
            .ok_or_else(|| ChessError::EmptyStartSquare(square_to_algebraic(start)))?;
        Ok(Self::standard(start, end, piece, board.get(end)))
    }

    #[inline]
    pub(crate) fn standard(
        start: Square,
        end: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
    ) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_pawn_promotion: piece_moved.kind == PieceKind::Pawn
                && end.row == piece_moved.color.promotion_row(),
            is_castle_move: false,
            is_enpassant_move: false,
        }
    }

    /// Diagonal pawn move onto the en-passant target; the victim is the enemy pawn
    /// beside the mover, not whatever sits on `end` (which is empty).
    #[inline]
    pub(crate) fn en_passant(start: Square, end: Square, piece_moved: Piece) -> Self {
        Self {
            piece_captured: Some(Piece::new(piece_moved.color.opposite(), PieceKind::Pawn)),
            is_enpassant_move: true,
            ..Self::standard(start, end, piece_moved, None)
        }
    }

    #[inline]
    pub(crate) fn castle(start: Square, end: Square, king: Piece) -> Self {
        Self {
            is_castle_move: true,
            ..Self::standard(start, end, king, None)
        }
    }

    /// Packed `(start, end)` key; the sole basis of equality.
    #[inline]
    pub fn key(&self) -> u16 {
        ((self.start.index() as u16) << START_SHIFT) | self.end.index() as u16
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub fn en_passant_victim(&self) -> Square {
        Square {
            row: self.start.row,
            col: self.end.col,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// True for a pawn advancing two rows.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && self.start.row.abs_diff(self.end.row) == 2
    }

    /// Human-readable `"<start>, <end>"` form, for example `"E2, E4"`.
    pub fn notation(&self) -> String {
        format!("{}, {}", rank_file(self.start), rank_file(self.end))
    }

    /// Long algebraic form used by the CLI, for example `e2e4` or `e7e8q`.
    pub fn to_long_algebraic(&self) -> String {
        let promotion = if self.is_pawn_promotion { "q" } else { "" };
        format!(
            "{}{}{promotion}",
            square_to_algebraic(self.start),
            square_to_algebraic(self.end)
        )
    }
}

fn rank_file(square: Square) -> String {
    square_to_algebraic(square).to_ascii_uppercase()
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
