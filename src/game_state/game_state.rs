//! Core mutable game state.
//!
//! `GameState` owns the board, side to move, king-location cache, castling
//! rights, en-passant target, and the per-ply history used by make/undo. It is
//! mutated in place: search walks the game tree by applying a move, recursing,
//! and undoing it on this one instance.

use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castling_right_for_rook_home, castling_rook_columns};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::parse_long_algebraic;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,

    // Indexed by `Color::index`.
    pub(crate) king_squares: [Square; 2],

    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    /// Set by `get_valid_moves` when it returns no moves; cleared by make/undo.
    pub checkmate: bool,
    pub stalemate: bool,

    pub(crate) undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move, all castling rights.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            side_to_move: Color::White,
            king_squares: [Square { row: 7, col: 4 }, Square { row: 0, col: 4 }],
            castling_rights: CASTLE_ALL,
            en_passant_square: None,
            checkmate: false,
            stalemate: false,
            undo_stack: Vec::new(),
        }
    }

    /// Assembles a state around an arbitrary board, or `None` unless each side has
    /// exactly one king.
    pub fn from_board(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_square: Option<Square>,
    ) -> Option<Self> {
        let mut king_squares = [None; 2];
        for (square, piece) in board.pieces() {
            if piece.kind == PieceKind::King {
                let slot = &mut king_squares[piece.color.index()];
                if slot.is_some() {
                    return None;
                }
                *slot = Some(square);
            }
        }

        Some(Self {
            board,
            side_to_move,
            king_squares: [king_squares[0]?, king_squares[1]?],
            castling_rights,
            en_passant_square,
            checkmate: false,
            stalemate: false,
            undo_stack: Vec::new(),
        })
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Number of moves applied since this state was created.
    #[inline]
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }

    /// Applied moves, oldest first.
    pub fn move_log(&self) -> impl Iterator<Item = &Move> + '_ {
        self.undo_stack.iter().map(|record| &record.mv)
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.undo_stack.last().map(|record| &record.mv)
    }

    /// Castling rights before each applied move followed by the current rights;
    /// always one longer than the move log.
    pub fn castling_rights_log(&self) -> Vec<CastlingRights> {
        self.undo_stack
            .iter()
            .map(|record| record.prev_castling_rights)
            .chain(std::iter::once(self.castling_rights))
            .collect()
    }

    /// Applies `mv`, which must come from `get_valid_moves` for this position.
    pub fn make_move(&mut self, mv: Move) {
        let mover = mv.piece_moved.color;

        self.undo_stack.push(UndoState {
            mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_square: self.en_passant_square,
        });

        self.board.set(mv.start, None);
        let placed = if mv.is_pawn_promotion {
            Piece::new(mover, PieceKind::Queen)
        } else {
            mv.piece_moved
        };
        self.board.set(mv.end, Some(placed));

        if mv.piece_moved.kind == PieceKind::King {
            self.king_squares[mover.index()] = mv.end;
        }

        if mv.is_enpassant_move {
            self.board.set(mv.en_passant_victim(), None);
        }

        self.en_passant_square = if mv.is_double_pawn_push() {
            Some(Square {
                row: (mv.start.row + mv.end.row) / 2,
                col: mv.start.col,
            })
        } else {
            None
        };

        if mv.is_castle_move {
            let (rook_from_col, rook_to_col) = castling_rook_columns(mv.end.col);
            let rook_from = Square { row: mv.end.row, col: rook_from_col };
            let rook_to = Square { row: mv.end.row, col: rook_to_col };
            let rook = self.board.get(rook_from);
            self.board.set(rook_to, rook);
            self.board.set(rook_from, None);
        }

        self.update_castling_rights(&mv);

        self.checkmate = false;
        self.stalemate = false;
        self.side_to_move = mover.opposite();
    }

    /// Reverts the most recent `make_move`, returning it. No-op on empty history.
    pub fn undo_move(&mut self) -> Option<Move> {
        let record = self.undo_stack.pop()?;
        let mv = record.mv;
        let mover = mv.piece_moved.color;

        self.board.set(mv.start, Some(mv.piece_moved));
        if mv.is_enpassant_move {
            self.board.set(mv.end, None);
            self.board.set(mv.en_passant_victim(), mv.piece_captured);
        } else {
            self.board.set(mv.end, mv.piece_captured);
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.king_squares[mover.index()] = mv.start;
        }

        if mv.is_castle_move {
            let (rook_from_col, rook_to_col) = castling_rook_columns(mv.end.col);
            let rook_from = Square { row: mv.end.row, col: rook_from_col };
            let rook_to = Square { row: mv.end.row, col: rook_to_col };
            let rook = self.board.get(rook_to);
            self.board.set(rook_from, rook);
            self.board.set(rook_to, None);
        }

        self.castling_rights = record.prev_castling_rights;
        self.en_passant_square = record.prev_en_passant_square;

        self.checkmate = false;
        self.stalemate = false;
        self.side_to_move = mover;
        Some(mv)
    }

    fn update_castling_rights(&mut self, mv: &Move) {
        match mv.piece_moved.kind {
            PieceKind::King => {
                let color = mv.piece_moved.color;
                self.castling_rights &= !(kingside_right(color) | queenside_right(color));
            }
            PieceKind::Rook => {
                if let Some(right) = castling_right_for_rook_home(mv.start) {
                    self.castling_rights &= !right;
                }
            }
            _ => {}
        }

        // Capturing a rook on its home square also removes that right.
        if mv.piece_captured.is_some_and(|p| p.kind == PieceKind::Rook) {
            if let Some(right) = castling_right_for_rook_home(mv.end) {
                self.castling_rights &= !right;
            }
        }
    }

    /// Legal move with the given start and end squares, if any.
    pub fn find_move(&mut self, start: Square, end: Square) -> Option<Move> {
        self.get_valid_moves()
            .into_iter()
            .find(|mv| mv.start == start && mv.end == end)
    }

    /// Legal move matching long algebraic text such as `e2e4`.
    pub fn find_move_lan(&mut self, text: &str) -> ChessResult<Move> {
        let (start, end) = parse_long_algebraic(text)?;
        self.find_move(start, end)
            .ok_or_else(|| ChessError::IllegalMove(text.to_owned()))
    }

    /// Admission gate for externally built moves.
    ///
    /// Returns the generated move equal to `candidate` (carrying the flags and
    /// captured piece of the current position), or `IllegalMove`.
    pub fn admit_move(&mut self, candidate: &Move) -> ChessResult<Move> {
        let admitted = self
            .get_valid_moves()
            .into_iter()
            .find(|mv| mv == candidate);

        admitted.ok_or_else(|| {
            debug!(candidate = %candidate.notation(), "rejected move not in legal list");
            ChessError::IllegalMove(candidate.notation())
        })
    }

    /// Admits and applies `candidate`.
    pub fn play_move(&mut self, candidate: &Move) -> ChessResult<Move> {
        let mv = self.admit_move(candidate)?;
        self.make_move(mv);
        Ok(mv)
    }
}
