//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different move
//! selection strategies can be chosen at runtime behind a single trait.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth for one call.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub best_score: Option<i32>,
    pub nodes: u64,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        Err(invalid_option(name, value))
    }

    /// Picks a move for the side to move. `game_state` is left as it was found.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput>;
}

pub(crate) fn invalid_option(name: &str, value: &str) -> ChessError {
    ChessError::InvalidOption {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}

/// Parses an option value, mapping failures to `InvalidOption`.
pub(crate) fn parse_option<T: std::str::FromStr>(name: &str, value: &str) -> ChessResult<T> {
    value.trim().parse().map_err(|_| invalid_option(name, value))
}
