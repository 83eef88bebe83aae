//! Perft: counts legal move paths to a fixed depth.
//!
//! Walks the tree with make/undo on a single `GameState`, the same way search
//! does, so it exercises both the generator and the reversibility of moves.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

/// Leaf-node count at `depth`.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    perft_counts(game_state, depth).nodes
}

/// Leaf-node count with a breakdown of the special moves reaching the leaves.
pub fn perft_counts(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in game_state.get_valid_moves() {
        if depth == 1 {
            total.nodes += 1;
            total.captures += u64::from(mv.is_capture());
            total.en_passant += u64::from(mv.is_enpassant_move);
            total.castles += u64::from(mv.is_castle_move);
            total.promotions += u64::from(mv.is_pawn_promotion);
            continue;
        }

        game_state.make_move(mv);
        total.merge(perft_counts(game_state, depth - 1));
        game_state.undo_move();
    }
    total
}

/// Per-root-move node counts, in long algebraic notation, for debugging.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for mv in game_state.get_valid_moves() {
        game_state.make_move(mv);
        out.push((mv.to_long_algebraic(), perft(game_state, depth - 1)));
        game_state.undo_move();
    }
    out
}
