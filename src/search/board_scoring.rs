//! Pluggable board evaluation.
//!
//! Search delegates static scoring to `BoardScorer`, so alternate heuristics can
//! be swapped in without touching the search code. Scores are White-relative;
//! negamax multiplies by the side to move's sign.

use crate::game_state::chess_types::*;

/// Score magnitude of a finished game. Larger than any material difference.
pub const CHECKMATE: i32 = 1000;

pub const STALEMATE: i32 = 0;

pub trait BoardScorer: Send + Sync {
    /// Score from White's point of view.
    ///
    /// Reads the terminal flags, so it is only meaningful for terminal positions
    /// right after `get_valid_moves` has run on them.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Plain material count with the terminal flags taking precedence.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 10,
            PieceKind::King => 0,
        }
    }

    #[inline]
    pub fn material_balance_white_minus_black(game_state: &GameState) -> i32 {
        game_state
            .board
            .pieces()
            .map(|(_, piece)| piece.color.sign() * Self::piece_value(piece.kind))
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        if game_state.checkmate {
            // The side to move has been mated.
            -game_state.side_to_move.sign() * CHECKMATE
        } else if game_state.stalemate {
            STALEMATE
        } else {
            Self::material_balance_white_minus_black(game_state)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, MaterialScorer, CHECKMATE, STALEMATE};
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(MaterialScorer.score(&GameState::new_game()), 0);
    }

    #[test]
    fn material_is_white_minus_black() {
        // White: queen + rook + pawn = 16. Black: knight + bishop = 6.
        let game = GameState::from_fen("2nbk3/8/8/8/8/8/4P3/R2QK3 w - - 0 1").expect("fen");
        assert_eq!(MaterialScorer.score(&game), 10);

        let mut black_to_move = game.clone();
        black_to_move.side_to_move = Color::Black;
        assert_eq!(MaterialScorer.score(&black_to_move), 10);
    }

    #[test]
    fn checkmate_favors_the_side_that_delivered_it() {
        let mut game = GameState::new_game();
        for lan in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            let mv = game.find_move_lan(lan).expect("move should be legal");
            game.make_move(mv);
        }
        game.get_valid_moves();
        assert!(game.checkmate);
        assert_eq!(MaterialScorer.score(&game), -CHECKMATE);
    }

    #[test]
    fn stalemate_scores_zero_despite_material() {
        let mut game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("fen");
        game.get_valid_moves();
        assert!(game.stalemate);
        assert_eq!(MaterialScorer.score(&game), STALEMATE);
    }
}
