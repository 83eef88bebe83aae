//! Root-split parallel search.
//!
//! The (already shuffled) root moves are cut into contiguous chunks, one per
//! worker. Each worker owns a clone of the game state and runs the sequential
//! negamax over its chunk with a full window, so nothing mutable is shared.
//! Chunks are merged in order, keeping the first maximum, which is the same
//! move and score the single-threaded search returns.

use std::thread;

use tracing::trace;

use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::BoardScorer;
use crate::search::negamax::{negamax, SearchConfig, SearchContext, SearchResult, INFINITY};

#[derive(Debug, Clone, Copy)]
struct WorkerResult {
    score: i32,
    best_move: Option<Move>,
    nodes: u64,
}

/// Searches `root_moves` across `config.threads` workers.
pub fn parallel_root_search<S: BoardScorer>(
    game_state: &GameState,
    root_moves: &[Move],
    scorer: &S,
    config: &SearchConfig,
) -> SearchResult {
    let workers = config.threads.clamp(1, root_moves.len().max(1));
    let chunk_len = root_moves.len().div_ceil(workers).max(1);

    let results: Vec<WorkerResult> = thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .chunks(chunk_len)
            .enumerate()
            .map(|(worker_id, chunk)| {
                let mut local = game_state.clone();
                scope.spawn(move || {
                    let mut ctx = SearchContext::new(scorer, config.pruning);
                    let (score, best_move) = negamax(
                        &mut local,
                        chunk,
                        config.max_depth,
                        -INFINITY,
                        INFINITY,
                        &mut ctx,
                    );
                    trace!(worker_id, moves = chunk.len(), score, nodes = ctx.nodes, "worker done");
                    WorkerResult {
                        score,
                        best_move,
                        nodes: ctx.nodes,
                    }
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(payload) => std::panic::resume_unwind(payload),
            })
            .collect()
    });

    let mut merged = SearchResult {
        best_move: None,
        best_score: -INFINITY,
        nodes: 0,
    };
    for result in results {
        merged.nodes += result.nodes;
        if result.score > merged.best_score {
            merged.best_score = result.score;
            merged.best_move = result.best_move;
        }
    }
    merged
}
