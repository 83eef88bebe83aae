//! Errors used throughout the chess engine.
//!
//! The rules core itself never fails: illegal moves are simply never generated,
//! and make/undo operate on moves drawn from the legal list. `ChessError` covers
//! the surfaces that accept outside input (FEN and algebraic parsing, move
//! admission, engine options).

use thiserror::Error;

/// Unified error type for the chess engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Square text that is not a file `a`-`h` followed by a rank `1`-`8`.
    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    /// Long algebraic move text (for example `e2e4`) that could not be read.
    #[error("invalid long algebraic move: {0}")]
    InvalidMoveText(String),

    /// A FEN position string was malformed or described an impossible position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A move was built from a square holding no piece.
    #[error("no piece on start square {0}")]
    EmptyStartSquare(String),

    /// The candidate is not among the legal moves of the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The side to move has no legal moves (checkmate or stalemate).
    #[error("no legal moves available")]
    NoLegalMoves,

    /// An engine option name or value was rejected.
    #[error("invalid engine option {name}={value}")]
    InvalidOption { name: String, value: String },
}

/// Result type alias for fallible chess operations.
pub type ChessResult<T> = Result<T, ChessError>;
