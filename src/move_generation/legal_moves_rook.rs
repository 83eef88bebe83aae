//! Rook move generation.
//!
//! Emits moves along ranks and files, including captures of the first enemy
//! piece met in each direction.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_sliding_moves, ROOK_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(board: &Board, from: Square, rook: Piece, out: &mut Vec<Move>) {
    push_sliding_moves(board, from, rook, &ROOK_DIRECTIONS, out);
}
