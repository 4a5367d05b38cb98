//! # Knights solver
//!
//! `knights_solver` is a small command-line front end for two search
//! algorithms:
//!
//! 1.  **Model checking**: the knights and knaves puzzles are encoded as
//!     propositional knowledge bases, and every "X is a Knight" / "X is a Knave"
//!     symbol the knowledge base entails is printed.
//! 2.  **Minimax**: the optimal tic-tac-toe move for a given board, or a game
//!     played out with both sides moving optimally.
//!
//! ## Usage
//!
//! ```sh
//! knights_solver [GLOBAL_OPTIONS] [SUBCOMMAND]
//! ```
//!
//! Without a subcommand every knights puzzle is solved.
//!
//! ### Subcommands
//!
//! 1.  **`knights`**: Solve the puzzles.
//!     ```sh
//!     knights_solver knights [--puzzle <N>] [--show-knowledge]
//!     ```
//!
//! 2.  **`best-move`**: Print the optimal move on a board.
//!     ```sh
//!     knights_solver best-move --board "XO./.X./..O" [--pruning none|alpha-beta]
//!     ```
//!
//! 3.  **`self-play`**: Play a game out from a board (empty by default).
//!     ```sh
//!     knights_solver self-play [--board <BOARD>] [--pruning none|alpha-beta]
//!     ```
//!
//! 4.  **`completions`**: Generate shell completions.
//!
//! ### Common Options
//!
//! -   `-d, --debug`: Enable debug logging.
//! -   `--trace`: Enable trace logging.
//! -   `-s, --stats`: Print search statistics, including jemalloc memory usage.

use crate::command_line::cli::{
    best_move, init_logging, play_out, print_completions, solve_knights, Cli, Commands,
};
use clap::Parser;

mod command_line;

/// Global allocator using `tikv-jemallocator`, which also provides the memory
/// statistics printed with `--stats`.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.common);

    let result = match cli.command {
        None => solve_knights(None, false, &cli.common),
        Some(Commands::Knights {
            puzzle,
            show_knowledge,
        }) => solve_knights(puzzle, show_knowledge, &cli.common),
        Some(Commands::BestMove { board, pruning }) => best_move(&board, pruning, &cli.common),
        Some(Commands::SelfPlay { board, pruning }) => play_out(&board, pruning, &cli.common),
        Some(Commands::Completions { shell }) => {
            print_completions(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
