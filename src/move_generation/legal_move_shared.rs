//! Movement tables and emit helpers shared by the per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, 1), (-1, -1), (1, -1), (1, 1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-2, -1),
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (0, -1),
];

/// Walks each direction until the edge or the first occupied square, which is
/// included only when it holds an enemy piece.
pub fn push_sliding_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match board.get(to) {
                None => out.push(Move::standard(from, to, piece, None)),
                Some(target) => {
                    if target.color != piece.color {
                        out.push(Move::standard(from, to, piece, Some(target)));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}

/// Single-step moves to each in-bounds offset not occupied by an allied piece.
pub fn push_step_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        let target = board.get(to);
        if target.map_or(true, |p| p.color != piece.color) {
            out.push(Move::standard(from, to, piece, target));
        }
    }
}
