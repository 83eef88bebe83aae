//! Pseudo-legal move generation.
//!
//! Dispatches on the closed `PieceKind` enumeration to the per-piece
//! generators. Results obey movement rules and board bounds but may still leave
//! the mover's king attacked; see `legal_move_generator` for the filter.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Upper bound on pseudo-legal moves used to size buffers.
pub const MOVE_BUFFER_CAPACITY: usize = 128;

/// Pseudo-legal moves of a single piece.
pub fn generate_piece_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    en_passant_square: Option<Square>,
    out: &mut Vec<Move>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, en_passant_square, out),
        PieceKind::Knight => generate_knight_moves(board, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece, out),
        PieceKind::Rook => generate_rook_moves(board, from, piece, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece, out),
        PieceKind::King => generate_king_moves(board, from, piece, out),
    }
}

/// All pseudo-legal moves for `side`, castling excluded.
pub fn generate_pseudo_legal_moves(
    board: &Board,
    side: Color,
    en_passant_square: Option<Square>,
) -> Vec<Move> {
    let mut out = Vec::with_capacity(MOVE_BUFFER_CAPACITY);
    for (from, piece) in board.pieces_of(side) {
        generate_piece_moves(board, from, piece, en_passant_square, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::generate_pseudo_legal_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn both_sides_have_twenty_from_the_start() {
        let board = Board::starting_position();
        assert_eq!(generate_pseudo_legal_moves(&board, Color::White, None).len(), 20);
        assert_eq!(generate_pseudo_legal_moves(&board, Color::Black, None).len(), 20);
    }
}
