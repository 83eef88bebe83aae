//! King move generation, including castling.
//!
//! Ordinary king steps are pseudo-legal like every other piece. Castling is
//! produced separately, after the legality filter, because it depends on the
//! safety of several squares rather than on the king's destination alone.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_step_moves, KING_OFFSETS};
use crate::moves::chess_move::Move;

pub fn generate_king_moves(board: &Board, from: Square, king: Piece, out: &mut Vec<Move>) {
    push_step_moves(board, from, king, &KING_OFFSETS, out);
}

/// Appends the castling moves available to the side to move.
///
/// Requires the right, the king and rook on their home squares, empty squares
/// between them, the king not in check, and neither the transit nor the
/// destination square attacked.
pub fn generate_castling_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let row = side.back_row();
    let king_from = game_state.king_square(side);
    if king_from != (Square { row, col: KING_HOME_COL }) {
        return;
    }

    let rights = game_state.castling_rights;
    let wants_kingside = rights & kingside_right(side) != 0;
    let wants_queenside = rights & queenside_right(side) != 0;
    if !wants_kingside && !wants_queenside {
        return;
    }

    // Cannot castle out of check.
    if game_state.square_under_attack(king_from) {
        return;
    }

    let king = Piece::new(side, PieceKind::King);

    if wants_kingside && castling_path_is_clear(game_state, side, KINGSIDE_ROOK_COL) {
        let transit = Square { row, col: KING_HOME_COL + 1 };
        let dest = Square { row, col: KING_HOME_COL + 2 };
        if !game_state.square_under_attack(transit) && !game_state.square_under_attack(dest) {
            out.push(Move::castle(king_from, dest, king));
        }
    }

    if wants_queenside && castling_path_is_clear(game_state, side, QUEENSIDE_ROOK_COL) {
        let transit = Square { row, col: KING_HOME_COL - 1 };
        let dest = Square { row, col: KING_HOME_COL - 2 };
        if !game_state.square_under_attack(transit) && !game_state.square_under_attack(dest) {
            out.push(Move::castle(king_from, dest, king));
        }
    }
}

/// Own rook on its home square and every square between it and the king empty.
fn castling_path_is_clear(game_state: &GameState, side: Color, rook_col: u8) -> bool {
    let row = side.back_row();
    let board = &game_state.board;
    let rook_square = Square { row, col: rook_col };
    if board.get(rook_square) != Some(Piece::new(side, PieceKind::Rook)) {
        return false;
    }

    let (low, high) = if rook_col > KING_HOME_COL {
        (KING_HOME_COL + 1, rook_col)
    } else {
        (rook_col + 1, KING_HOME_COL)
    };
    (low..high).all(|col| board.is_empty(Square { row, col }))
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn edge_king_has_five_steps() {
        let mut board = Board::empty();
        let e1 = Square { row: 7, col: 4 };
        let king = Piece::new(Color::White, PieceKind::King);
        board.set(e1, Some(king));

        let mut moves = Vec::new();
        generate_king_moves(&board, e1, king, &mut moves);
        assert_eq!(moves.len(), 5);
        assert!(moves.iter().all(|mv| !mv.is_castle_move));
    }
}
