//! Queen move generation: the union of rook and bishop rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

pub fn generate_queen_moves(board: &Board, from: Square, queen: Piece, out: &mut Vec<Move>) {
    generate_rook_moves(board, from, queen, out);
    generate_bishop_moves(board, from, queen, out);
}
