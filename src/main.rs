use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ember_chess::engines::engine_negamax::NegamaxEngine;
use ember_chess::engines::engine_trait::{Engine, GoParams};
use ember_chess::errors::{ChessError, ChessResult};
use ember_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use ember_chess::game_state::chess_types::GameState;
use ember_chess::move_generation::perft::{perft_counts, perft_divide};
use ember_chess::search::negamax::SearchConfig;
use ember_chess::utils::render_game_state::render_game_state;

/// Chess rules engine with a fixed-depth negamax player.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Starting position.
    #[arg(short, long, global = true, default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Comma-separated moves in long algebraic notation applied to the position first.
    #[arg(short, long, global = true, value_delimiter = ',')]
    moves: Vec<String>,

    /// If set, the position is drawn before the command runs.
    #[arg(short, long, global = true, default_value = "false")]
    show: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Count legal move paths to the given depth.
    Perft {
        depth: u8,

        /// If set, node counts are printed per root move.
        #[arg(short, long, default_value = "false")]
        divide: bool,
    },

    /// List the legal moves of the position.
    #[command(alias = "m")]
    Moves {
        /// If set, moves are sorted alphabetically.
        #[arg(long, default_value = "false")]
        sort: bool,
    },

    /// Search the position and print the chosen move.
    #[command(alias = "go")]
    BestMove {
        #[arg(short, long, default_value_t = SearchConfig::default().max_depth)]
        depth: u8,

        /// Seed for the root shuffle and random fallback.
        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long, default_value_t = 1)]
        threads: usize,

        /// Disable alpha-beta cutoffs.
        #[arg(long, default_value = "false")]
        no_prune: bool,
    },
}

fn load_position(fen: &str, moves: &[String]) -> ChessResult<GameState> {
    let mut game_state = GameState::from_fen(fen)?;
    for text in moves {
        let mv = game_state.find_move_lan(text)?;
        game_state.make_move(mv);
    }
    Ok(game_state)
}

fn run(cli: Cli) -> ChessResult<()> {
    let mut game_state = load_position(&cli.fen, &cli.moves)?;

    if cli.show {
        println!("{}\n{}\n", render_game_state(&game_state), game_state.get_fen());
    }

    match cli.command {
        Command::Perft { depth, divide } => {
            if divide {
                for (lan, nodes) in perft_divide(&mut game_state, depth) {
                    println!("{lan}: {nodes}");
                }
            }
            let counts = perft_counts(&mut game_state, depth);
            println!("nodes {}", counts.nodes);
            println!(
                "captures {} en_passant {} castles {} promotions {}",
                counts.captures, counts.en_passant, counts.castles, counts.promotions
            );
        }

        Command::Moves { sort } => {
            let mut moves: Vec<String> = game_state
                .get_valid_moves()
                .iter()
                .map(|mv| format!("{} ({})", mv.to_long_algebraic(), mv.notation()))
                .collect();
            if sort {
                moves.sort();
            }
            for line in &moves {
                println!("{line}");
            }
            if game_state.checkmate {
                println!("checkmate");
            } else if game_state.stalemate {
                println!("stalemate");
            } else {
                println!("{} legal moves", moves.len());
            }
        }

        Command::BestMove {
            depth,
            seed,
            threads,
            no_prune,
        } => {
            let config = SearchConfig {
                max_depth: depth,
                pruning: !no_prune,
                threads: threads.max(1),
                ..SearchConfig::default()
            };
            let mut engine = match seed {
                Some(seed) => NegamaxEngine::with_seed(config, seed),
                None => NegamaxEngine::new(config),
            };

            let out = engine.choose_move(&mut game_state, &GoParams::default())?;
            let mv = out.best_move.ok_or(ChessError::NoLegalMoves)?;
            match out.best_score {
                Some(score) => println!("bestmove {} score {score} nodes {}", mv.to_long_algebraic(), out.nodes),
                None => println!("bestmove {} nodes {}", mv.to_long_algebraic(), out.nodes),
            }
        }
    }

    Ok(())
}

fn main() -> Result<(), ChessError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}
