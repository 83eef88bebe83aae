//! Knight move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_step_moves, KNIGHT_OFFSETS};
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(board: &Board, from: Square, knight: Piece, out: &mut Vec<Move>) {
    push_step_moves(board, from, knight, &KNIGHT_OFFSETS, out);
}
