//! Mailbox board representation.
//!
//! The board is a plain 8x8 grid of optional pieces that is mutated in place by
//! make/undo. Search never copies it.

use std::ops::{Index, IndexMut};

use crate::game_state::chess_types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting layout.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for col in 0..8 {
            board.cells[0][col] = Some(Piece::new(Color::Black, BACK_RANK[col]));
            board.cells[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.cells[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.cells[7][col] = Some(Piece::new(Color::White, BACK_RANK[col]));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// Every occupied square with its piece, a8 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares belonging to one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Locates the king of `color` by scanning the grid.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, square: Square) -> &Self::Output {
        &self.cells[square.row as usize][square.col as usize]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        &mut self.cells[square.row as usize][square.col as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_position_has_mirrored_armies() {
        let board = Board::starting_position();
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
        assert_eq!(board.find_king(Color::White), Square::new(7, 4));
        assert_eq!(board.find_king(Color::Black), Square::new(0, 4));

        for col in 0..8 {
            let white = board.get(Square { row: 7, col }).expect("white back rank is full");
            let black = board.get(Square { row: 0, col }).expect("black back rank is full");
            assert_eq!(white.kind, black.kind);
        }
    }

    #[test]
    fn index_matches_get_and_set() {
        let mut board = Board::empty();
        let e4 = Square { row: 4, col: 4 };
        board[e4] = Some(Piece::new(Color::White, PieceKind::Queen));
        assert_eq!(board.get(e4), Some(Piece::new(Color::White, PieceKind::Queen)));
        board.set(e4, None);
        assert!(board.is_empty(e4));
    }
}
