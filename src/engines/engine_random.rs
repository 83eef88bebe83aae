//! Random-move engine.
//!
//! Selects uniformly from legal moves. Also serves as the fallback when search
//! returns no move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{invalid_option, parse_option, Engine, EngineOutput, GoParams};
use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Uniformly random move from `valid_moves`, or `None` if it is empty.
pub fn find_random_move(valid_moves: &[Move]) -> Option<Move> {
    find_random_move_with(valid_moves, &mut rand::rng())
}

pub fn find_random_move_with<R: Rng + ?Sized>(valid_moves: &[Move], rng: &mut R) -> Option<Move> {
    valid_moves.choose(rng).copied()
}

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        if name.eq_ignore_ascii_case("seed") {
            self.rng = StdRng::seed_from_u64(parse_option(name, value)?);
            Ok(())
        } else {
            Err(invalid_option(name, value))
        }
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        _params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let legal_moves = game_state.get_valid_moves();
        Ok(EngineOutput {
            best_move: find_random_move_with(&legal_moves, &mut self.rng),
            best_score: None,
            nodes: legal_moves.len() as u64,
        })
    }
}
