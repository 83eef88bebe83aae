use ember_chess::game_state::chess_types::GameState;
use ember_chess::move_generation::perft::{perft, perft_counts};

// Promotion is always to a queen, so positions are only searched to depths where
// no pawn can reach the last rank unless the expected count accounts for it.

fn test_perft_fen_nodes(depth: u8, fen: &str, expected: u64) {
    let mut position = GameState::from_fen(fen).expect("perft FEN should parse");
    let before = position.clone();
    let res = perft(&mut position, depth);
    assert_eq!(res, expected, "PERFT({depth}) failed on {fen}");
    assert_eq!(position, before, "perft left {fen} modified");
}

/// https://www.chessprogramming.org/Perft_Results
#[cfg(test)]
mod simple_perfts {
    use super::*;

    const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -";
    const POSITION_6: &str =
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10";

    #[test]
    fn test_startpos_perft() {
        test_perft_fen_nodes(1, STARTPOS, 20);
        test_perft_fen_nodes(2, STARTPOS, 400);
        test_perft_fen_nodes(3, STARTPOS, 8902);
    }

    #[test]
    fn test_kiwipete_perft() {
        test_perft_fen_nodes(1, KIWIPETE, 48);
        test_perft_fen_nodes(2, KIWIPETE, 2039);
        test_perft_fen_nodes(3, KIWIPETE, 97862);
    }

    #[test]
    fn test_position_3_perft() {
        test_perft_fen_nodes(1, POSITION_3, 14);
        test_perft_fen_nodes(2, POSITION_3, 191);
        test_perft_fen_nodes(3, POSITION_3, 2812);
        test_perft_fen_nodes(4, POSITION_3, 43238);
    }

    #[test]
    fn test_position_4_perft() {
        test_perft_fen_nodes(
            1,
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            6,
        );
    }

    #[test]
    fn test_position_6_perft() {
        test_perft_fen_nodes(1, POSITION_6, 46);
        test_perft_fen_nodes(2, POSITION_6, 2079);
        test_perft_fen_nodes(3, POSITION_6, 89890);
    }
}

#[cfg(test)]
mod special_perfts {
    use super::*;

    #[test]
    fn test_special_perft_short_castling_gives_check() {
        test_perft_fen_nodes(1, "5k2/8/8/8/8/8/8/4K2R w K - 0 1", 15);
    }

    #[test]
    fn test_special_perft_long_castling_gives_check() {
        test_perft_fen_nodes(1, "3k4/8/8/8/8/8/8/R3K3 w Q - 0 1", 16);
    }

    #[test]
    fn test_special_perft_queen_only_promotion() {
        // 44 with under-promotions; d7xc8 yields a single queen move here.
        let fen = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";
        test_perft_fen_nodes(1, fen, 41);

        let mut position = GameState::from_fen(fen).expect("perft FEN should parse");
        let counts = perft_counts(&mut position, 1);
        assert_eq!(counts.promotions, 1);
        assert_eq!(counts.castles, 1);
    }

    #[test]
    fn test_special_perft_kiwipete_breakdown() {
        let mut position = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("perft FEN should parse");
        let counts = perft_counts(&mut position, 2);
        assert_eq!(counts.nodes, 2039);
        assert_eq!(counts.captures, 351);
        assert_eq!(counts.en_passant, 1);
        assert_eq!(counts.castles, 91);
        assert_eq!(counts.promotions, 0);
    }
}
