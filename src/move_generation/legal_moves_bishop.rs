//! Bishop move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_sliding_moves, BISHOP_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(board: &Board, from: Square, bishop: Piece, out: &mut Vec<Move>) {
    push_sliding_moves(board, from, bishop, &BISHOP_DIRECTIONS, out);
}
