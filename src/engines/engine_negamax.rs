//! Search-backed engine.
//!
//! Runs the fixed-depth negamax search with material scoring and falls back to a
//! uniformly random legal move when the search returns none.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::engines::engine_random::find_random_move_with;
use crate::engines::engine_trait::{invalid_option, parse_option, Engine, EngineOutput, GoParams};
use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::search::board_scoring::MaterialScorer;
use crate::search::negamax::{search, SearchConfig};

pub struct NegamaxEngine {
    config: SearchConfig,
    scorer: MaterialScorer,
    rng: StdRng,
}

impl NegamaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            scorer: MaterialScorer,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self {
            config,
            scorer: MaterialScorer,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

fn parse_bool_option(name: &str, value: &str) -> ChessResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(invalid_option(name, value)),
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "Negamax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        match name.to_ascii_lowercase().as_str() {
            "depth" => self.config.max_depth = parse_option(name, value)?,
            "pruning" => self.config.pruning = parse_bool_option(name, value)?,
            "threads" => {
                let threads: usize = parse_option(name, value)?;
                if threads == 0 {
                    return Err(invalid_option(name, value));
                }
                self.config.threads = threads;
            }
            "seed" => self.rng = StdRng::seed_from_u64(parse_option(name, value)?),
            _ => return Err(invalid_option(name, value)),
        }
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let config = SearchConfig {
            max_depth: params.depth.unwrap_or(self.config.max_depth),
            ..self.config
        };

        let legal_moves = game_state.get_valid_moves();
        let result = search(game_state, &legal_moves, &self.scorer, &config, &mut self.rng);

        let best_move = match result.best_move {
            Some(mv) => Some(mv),
            None => {
                let fallback = find_random_move_with(&legal_moves, &mut self.rng);
                if let Some(mv) = fallback {
                    info!(fallback = %mv.notation(), "search returned no move, playing random");
                }
                fallback
            }
        };

        info!(
            engine = self.name(),
            depth = config.max_depth,
            nodes = result.nodes,
            score = result.best_score,
            best_move = ?best_move.map(|mv| mv.to_long_algebraic()),
            "choose_move"
        );

        Ok(EngineOutput {
            best_move,
            best_score: result.best_move.map(|_| result.best_score),
            nodes: result.nodes,
        })
    }
}
