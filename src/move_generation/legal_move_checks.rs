//! Attack and check detection.
//!
//! Move generation is the source of truth: a square is attacked when some
//! pseudo-legal move of the attacker ends on it. Pawns are the one exception,
//! since their pushes do not attack and their diagonal moves are only generated
//! onto occupied squares; they contribute their diagonal squares directly.
//! Regenerating only the opponent's moves would miss a pawn guarding an empty
//! square, so a castling king could cross it; the rules count it as attacked.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_pawn::pawn_attack_squares;
use crate::move_generation::move_generator::{generate_piece_moves, MOVE_BUFFER_CAPACITY};

pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let mut moves = Vec::with_capacity(MOVE_BUFFER_CAPACITY);
    for (from, piece) in board.pieces_of(attacker) {
        if piece.kind == PieceKind::Pawn {
            if pawn_attack_squares(from, attacker).contains(&Some(square)) {
                return true;
            }
        } else {
            generate_piece_moves(board, from, piece, None, &mut moves);
        }
    }
    moves.iter().any(|mv| mv.end == square)
}

impl GameState {
    /// Whether the opponent of the side to move attacks `square`.
    pub fn square_under_attack(&self, square: Square) -> bool {
        is_square_attacked(&self.board, square, self.side_to_move.opposite())
    }

    /// Whether the side to move's king is attacked.
    pub fn in_check(&self) -> bool {
        self.square_under_attack(self.king_square(self.side_to_move))
    }
}
