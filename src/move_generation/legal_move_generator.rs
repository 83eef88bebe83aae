//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal moves, applies each candidate, drops those that
//! leave the mover's king attacked, then appends castling and records the
//! terminal flags.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_moves_king::generate_castling_moves;
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::moves::chess_move::Move;

impl GameState {
    /// All legal moves for the side to move.
    ///
    /// Also sets `checkmate` or `stalemate` when the result is empty, and clears
    /// both otherwise. The position is left exactly as it was found.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        let mover = self.side_to_move;
        let pseudo = generate_pseudo_legal_moves(&self.board, mover, self.en_passant_square);

        let mut legal = Vec::with_capacity(pseudo.len());
        for mv in pseudo {
            self.make_move(mv);
            let exposed = is_square_attacked(&self.board, self.king_square(mover), mover.opposite());
            self.undo_move();

            if !exposed {
                legal.push(mv);
            }
        }

        generate_castling_moves(self, &mut legal);

        let no_moves = legal.is_empty();
        let in_check = no_moves && self.in_check();
        self.checkmate = no_moves && in_check;
        self.stalemate = no_moves && !in_check;

        legal
    }
}
