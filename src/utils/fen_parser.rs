//! FEN-to-GameState parser.
//!
//! Reads placement, side to move, castling rights, and the en-passant target.
//! The halfmove clock and fullmove number are optional and only checked for
//! being numbers, since the engine keeps no clocks.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;

    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u32>()
            .map_err(|_| invalid(format!("clock field is not a number: {clock}")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_square = parse_en_passant_square(en_passant_part, &board, side_to_move)?;

    GameState::from_board(board, side_to_move, castling_rights, en_passant_square)
        .ok_or_else(|| invalid("each side needs exactly one king"))
}

fn invalid(reason: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(reason.into())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err(invalid(format!("rank {} has too many files", 8 - row)));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
            let square = Square::new(row as u8, col)
                .ok_or_else(|| invalid(format!("rank {} has too many files", 8 - row)))?;
            board.set(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(invalid(format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side to move: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        rights |= match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(invalid(format!("invalid castling character '{ch}'"))),
        };
    }
    Ok(rights)
}

/// The target must sit behind an enemy pawn that could just have double-pushed.
fn parse_en_passant_square(
    en_passant_part: &str,
    board: &Board,
    side_to_move: Color,
) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(format!("invalid en-passant square: {en_passant_part}")))?;

    let pusher = side_to_move.opposite();
    let target_row = (pusher.pawn_start_row() as i8 + pusher.pawn_direction()) as u8;
    if square.row != target_row {
        return Err(invalid(format!("en-passant square on wrong rank: {en_passant_part}")));
    }
    if !board.is_empty(square) {
        return Err(invalid(format!("en-passant square is occupied: {en_passant_part}")));
    }

    let victim = square
        .offset(pusher.pawn_direction(), 0)
        .and_then(|victim| board.get(victim));
    if victim != Some(Piece::new(pusher, PieceKind::Pawn)) {
        return Err(invalid(format!("no pawn to capture en passant on {en_passant_part}")));
    }

    Ok(Some(square))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_matches_new_game() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state, GameState::new_game());
    }

    #[test]
    fn clock_fields_are_optional() {
        let short = parse_fen("4k3/8/8/8/8/8/8/4K3 w - -").expect("four fields should parse");
        let long = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 12 40").expect("six fields should parse");
        assert_eq!(short, long);
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1"),
            Err(ChessError::InvalidFen(_))
        ));
    }

    #[test]
    fn en_passant_and_rights_are_read() {
        let game = parse_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w Kq f6 0 3")
            .expect("FEN should parse");
        assert_eq!(game.en_passant_square, algebraic_to_square("f6").ok());
        assert_eq!(game.castling_rights, CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
        assert_eq!(game.side_to_move, Color::White);
    }

    #[test]
    fn en_passant_target_needs_a_capturable_pawn() {
        let cases = [
            // A knight, not a pawn, stands on e5.
            "4k3/8/8/3Pn3/8/8/8/4K3 w - e6 0 1",
            // A third-rank target belongs to Black's turn.
            "4k3/8/8/8/4P3/8/3P4/4K3 w - e3 0 1",
            // Sixth-rank target with Black to move.
            "4k3/8/8/3Pp3/8/8/8/4K3 b - e6 0 1",
            // Target square occupied.
            "4k3/8/4n3/3Pp3/8/8/8/4K3 w - e6 0 1",
            // Nothing on the victim square.
            "4k3/8/8/3P4/8/8/8/4K3 w - e6 0 1",
        ];
        for fen in cases {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }

        let white = parse_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1").expect("white ep FEN");
        assert_eq!(white.en_passant_square, algebraic_to_square("e6").ok());
        let black = parse_fen("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1").expect("black ep FEN");
        assert_eq!(black.en_passant_square, algebraic_to_square("e3").ok());
    }

    #[test]
    fn malformed_fens_are_rejected() {
        let bad = [
            "",
            "8/8/8/8/8/8/8 w - -",
            "4k3/8/8/8/8/8/8/4K4 w - -",
            "4k3/8/8/8/8/8/8/4X3 w - -",
            "4k3/8/8/8/8/8/8/4K3 x - -",
            "4k3/8/8/8/8/8/8/4K3 w KX -",
            "4k3/8/8/8/8/8/8/4K3 w - e4",
            "8/8/8/8/8/8/8/4K3 w - -",
            "4k3/8/8/8/8/8/8/3KK3 w - -",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
        ];
        for fen in bad {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }
    }
}
