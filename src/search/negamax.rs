//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The tree is walked by make/recurse/undo on the caller's `GameState`; no board
//! is copied. Every node returns its `(score, move)` pair and only the root's
//! move is used. Root moves are shuffled so equally scored moves vary between
//! calls.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, CHECKMATE};
use crate::search::threading::parallel_root_search;

/// Window bound strictly outside every reachable score.
pub const INFINITY: i32 = CHECKMATE + 1;

pub const DEFAULT_DEPTH: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// Alpha-beta cutoffs. Turning this off gives plain minimax with the same result.
    pub pruning: bool,
    pub shuffle_root: bool,
    /// Root-split workers; 1 searches on the caller's state.
    pub threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            pruning: true,
            shuffle_root: true,
            threads: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// From the side to move's point of view.
    pub best_score: i32,
    pub nodes: u64,
}

/// Per-search state threaded through the recursion.
pub(crate) struct SearchContext<'a, S: BoardScorer> {
    pub scorer: &'a S,
    pub pruning: bool,
    pub nodes: u64,
}

impl<'a, S: BoardScorer> SearchContext<'a, S> {
    pub fn new(scorer: &'a S, pruning: bool) -> Self {
        Self {
            scorer,
            pruning,
            nodes: 0,
        }
    }
}

/// Best move among `valid_moves`, which must be the legal moves of `game_state`.
///
/// Returns `None` when the list is empty or the depth is zero. `game_state` is
/// back in its original position when this returns.
pub fn search<S: BoardScorer, R: Rng + ?Sized>(
    game_state: &mut GameState,
    valid_moves: &[Move],
    scorer: &S,
    config: &SearchConfig,
    rng: &mut R,
) -> SearchResult {
    let mut root_moves = valid_moves.to_vec();
    if config.shuffle_root {
        root_moves.shuffle(rng);
    }

    debug!(
        depth = config.max_depth,
        root_moves = root_moves.len(),
        threads = config.threads,
        "search start"
    );

    let result = if config.threads > 1 && config.max_depth > 0 && root_moves.len() > 1 {
        parallel_root_search(game_state, &root_moves, scorer, config)
    } else {
        let mut ctx = SearchContext::new(scorer, config.pruning);
        let (best_score, best_move) = negamax(
            game_state,
            &root_moves,
            config.max_depth,
            -INFINITY,
            INFINITY,
            &mut ctx,
        );
        SearchResult {
            best_move,
            best_score,
            nodes: ctx.nodes,
        }
    };

    debug!(
        best_move = ?result.best_move.map(|mv| mv.to_long_algebraic()),
        score = result.best_score,
        nodes = result.nodes,
        "search finished"
    );

    result
}

/// Default search: material scoring at depth 3 with a shuffled root.
pub fn find_best_move(game_state: &mut GameState, valid_moves: &[Move]) -> Option<Move> {
    let mut rng = rand::rng();
    search(
        game_state,
        valid_moves,
        &MaterialScorer,
        &SearchConfig::default(),
        &mut rng,
    )
    .best_move
}

/// Scores `moves` (the legal moves of `game_state`) to `depth` plies.
///
/// Leaves and positions without moves score `sign * evaluation`, where the
/// terminal flags were set by the `get_valid_moves` call that produced `moves`.
pub(crate) fn negamax<S: BoardScorer>(
    game_state: &mut GameState,
    moves: &[Move],
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext<'_, S>,
) -> (i32, Option<Move>) {
    ctx.nodes += 1;

    if depth == 0 || moves.is_empty() {
        let sign = game_state.side_to_move.sign();
        return (sign * ctx.scorer.score(game_state), None);
    }

    let mut best_score = -INFINITY;
    let mut best_move = None;

    for &mv in moves {
        game_state.make_move(mv);
        let replies = game_state.get_valid_moves();
        let (child_score, _) = negamax(game_state, &replies, depth - 1, -beta, -alpha, ctx);
        game_state.undo_move();

        let score = -child_score;
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }

        if ctx.pruning {
            alpha = alpha.max(best_score);
            if best_score >= beta {
                break;
            }
        }
    }

    (best_score, best_move)
}
