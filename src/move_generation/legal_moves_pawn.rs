//! Pawn move generation.
//!
//! Pushes (single and double), diagonal captures, and en-passant captures onto
//! the stored target square. Promotion is flagged by `Move` itself.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    pawn: Piece,
    en_passant_square: Option<Square>,
    out: &mut Vec<Move>,
) {
    let side = pawn.color;
    let forward = side.pawn_direction();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            out.push(Move::standard(from, one_step, pawn, None));

            if from.row == side.pawn_start_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(Move::standard(from, two_step, pawn, None));
                    }
                }
            }
        }
    }

    for to in pawn_attack_squares(from, side).into_iter().flatten() {
        match board.get(to) {
            Some(target) if target.color != side => {
                out.push(Move::standard(from, to, pawn, Some(target)));
            }
            None if en_passant_square == Some(to)
                && has_en_passant_victim(board, from, to, side) =>
            {
                out.push(Move::en_passant(from, to, pawn));
            }
            _ => {}
        }
    }
}

/// The passed pawn stands beside the capturer, on the target's file.
#[inline]
fn has_en_passant_victim(board: &Board, from: Square, to: Square, side: Color) -> bool {
    let victim = Square { row: from.row, col: to.col };
    board.get(victim) == Some(Piece::new(side.opposite(), PieceKind::Pawn))
}

/// The (up to two) diagonal squares a pawn of `side` on `from` attacks.
#[inline]
pub fn pawn_attack_squares(from: Square, side: Color) -> [Option<Square>; 2] {
    let forward = side.pawn_direction();
    [from.offset(forward, -1), from.offset(forward, 1)]
}
