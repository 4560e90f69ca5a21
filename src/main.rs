//! go-minimax: a Go engine driven by minimax / alpha-beta search.
//!
//! ## Usage
//!
//! - `go-minimax` - Show a demo
//! - `go-minimax gtp` - Start GTP server for GUI integration
//! - `go-minimax selfplay` - Let the engine play itself
//!
//! Set `RUST_LOG=debug` to see search summaries on stderr.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::info;

use go_minimax::board::{Board, Color};
use go_minimax::config::{AiSettings, validate_board_size};
use go_minimax::constants::{
    DEFAULT_BOARD_SIZE, DEFAULT_CANDIDATES_BASE, DEFAULT_DEPTH, DEFAULT_TIME_MS,
};
use go_minimax::gtp::{GtpEngine, format_vertex};
use go_minimax::rules::{GameState, legal_moves};
use go_minimax::search::Searcher;

/// go-minimax: a Go engine with minimax and alpha-beta search
#[derive(Parser)]
#[command(name = "go-minimax")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Board and search settings shared by every subcommand.
#[derive(Args)]
struct EngineArgs {
    /// Board size (odd, 7 to 25)
    #[arg(long, global = true, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Search algorithm: minimax or alphabeta
    #[arg(long, global = true, default_value = "alphabeta")]
    algorithm: String,

    /// Search depth in plies (1 to 6)
    #[arg(long, global = true, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Time budget per move in milliseconds (0 = unlimited)
    #[arg(long, global = true, default_value_t = DEFAULT_TIME_MS)]
    time_ms: u64,

    /// Base number of candidate moves searched per node
    #[arg(long, global = true, default_value_t = DEFAULT_CANDIDATES_BASE)]
    candidates: usize,
}

impl EngineArgs {
    /// Validate every setting through the searcher's setters.
    fn searcher(&self) -> Result<Searcher> {
        let mut searcher = Searcher::default();
        searcher.set_algorithm(&self.algorithm)?;
        searcher.set_depth(self.depth)?;
        searcher.set_max_time_ms(self.time_ms)?;
        searcher.set_max_candidates_base(self.candidates)?;
        Ok(searcher)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp,
    /// Run a short demo of captures and one engine move
    Demo,
    /// Play the engine against itself
    Selfplay {
        /// Number of random opening moves before the engine takes over
        #[arg(long, default_value_t = 0)]
        openings: usize,
        /// Seed for the random openings
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many turns (default 3 * size * size)
        #[arg(long)]
        max_moves: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let size = validate_board_size(cli.engine.size)?;
    let searcher = cli.engine.searcher()?;

    match cli.command {
        Some(Commands::Gtp) => {
            let settings: AiSettings = *searcher.settings();
            let mut engine = GtpEngine::new(size, settings)?;
            engine.run()
        }
        Some(Commands::Selfplay {
            openings,
            seed,
            max_moves,
        }) => run_selfplay(size, searcher, openings, seed, max_moves),
        Some(Commands::Demo) | None => run_demo(size, searcher),
    }
}

fn run_demo(size: usize, mut searcher: Searcher) -> Result<()> {
    println!("go-minimax: Go engine with {} search\n", searcher.settings().algorithm);

    // Demo 1: a capture
    println!("=== Capture Demo ===");
    let mut game = GameState::new(size);
    let c = size / 2;
    let moves = [
        ((c, c), Color::Black),
        ((c - 1, c), Color::White),
        ((c, c - 1), Color::White),
        ((c, c + 1), Color::White),
    ];
    for (pt, color) in moves {
        game.apply_move(pt, color)?;
    }
    let captured = game.apply_move((c + 1, c), Color::White)?;
    println!("White at {}: captured {captured}", format_vertex((c + 1, c), size));
    println!("{}", game.board);

    // Demo 2: engine reply on an open board
    println!("=== Search Demo ===");
    let board = Board::new(size);
    match searcher.find_best_move(&board, Color::Black) {
        Some(pt) => println!("Best opening move: {}", format_vertex(pt, size)),
        None => println!("No legal move"),
    }
    let stats = searcher.stats();
    println!(
        "{} nodes in {} ms ({} nodes/s)",
        stats.nodes_evaluated, stats.time_used_ms, stats.nodes_per_second
    );
    Ok(())
}

fn run_selfplay(
    size: usize,
    mut searcher: Searcher,
    openings: usize,
    seed: Option<u64>,
    max_moves: Option<usize>,
) -> Result<()> {
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let max_moves = max_moves.unwrap_or(3 * size * size);
    let mut game = GameState::new(size);

    while !game.game_over && game.move_number < max_moves {
        let player = game.current_player;
        let choice = if game.move_number < openings {
            let moves = legal_moves(&game.board, player);
            rng.choice(moves)
        } else {
            searcher.find_best_move(&game.board, player)
        };

        match choice {
            Some(pt) => {
                let captured = game.apply_move(pt, player)?;
                info!(
                    "move {}: {player} {} (captured {captured}, {} nodes)",
                    game.move_number,
                    format_vertex(pt, size),
                    searcher.stats().nodes_evaluated
                );
            }
            None => {
                info!("move {}: {player} passes", game.move_number + 1);
                game.pass();
            }
        }
    }

    let result = game.end_game();
    println!("{}", game.board);
    println!(
        "Black {} (captured {}), White {} (captured {}): {result} after {} moves",
        result.black_score,
        game.captures(Color::Black),
        result.white_score,
        game.captures(Color::White),
        game.move_number
    );
    Ok(())
}
