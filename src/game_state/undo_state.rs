use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Single history record for `make_move` / `undo_move`.
///
/// One record per ply keeps the applied move and the non-local state it
/// overwrote together, so undo always pops a coherent snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
}
