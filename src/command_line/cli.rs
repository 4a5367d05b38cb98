#![allow(clippy::cast_precision_loss)]

use clap::{Args, CommandFactory, Parser, Subcommand};
use knights_solver::knights::puzzles::{all_puzzles, candidate_symbols, Puzzle};
use knights_solver::knights::solver::{solve, Outcome};
use knights_solver::logic::{CheckStats, ModelChecker};
use knights_solver::tictactoe::{self_play, Board, Minimax, Pruning, SearchStats};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the puzzle solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(
    name = "knights_solver",
    version,
    about = "Knights and knaves by model checking, tic-tac-toe by minimax"
)]
pub(crate) struct Cli {
    /// Specifies the subcommand to execute. Without one, every knights puzzle is solved.
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve the knights and knaves puzzles.
    Knights {
        /// Solve only the puzzle with this number.
        #[arg(short, long)]
        puzzle: Option<usize>,

        /// Print each puzzle's statements and knowledge base before its answer.
        #[arg(long, default_value_t = false)]
        show_knowledge: bool,
    },

    /// Print the optimal move for the player to move on a tic-tac-toe board.
    BestMove {
        /// Board as nine cells, e.g. "XO./.X./..O" (`.`, `-` or `_` for empty).
        #[arg(short, long)]
        board: String,

        #[arg(long, default_value_t = Pruning::AlphaBeta)]
        pruning: Pruning,
    },

    /// Play optimal moves for both sides until the game is over.
    SelfPlay {
        /// Starting board, empty by default.
        #[arg(short, long, default_value = ".........")]
        board: String,

        #[arg(long, default_value_t = Pruning::AlphaBeta)]
        pruning: Pruning,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable debug logging.
    #[arg(short, long, global = true, default_value_t = false)]
    pub(crate) debug: bool,

    /// Enable trace logging, including every counterexample found.
    #[arg(long, global = true, default_value_t = false)]
    pub(crate) trace: bool,

    /// Print search statistics after solving.
    #[arg(short, long, global = true, default_value_t = false)]
    pub(crate) stats: bool,
}

impl CommonOptions {
    const fn log_level(&self) -> LevelFilter {
        if self.trace {
            LevelFilter::Trace
        } else if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

pub(crate) fn init_logging(common: &CommonOptions) {
    if let Err(e) = TermLogger::init(
        common.log_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialise logging: {e}");
    }
}

/// Solve every knights puzzle, or only `puzzle`, and print what each one entails.
///
/// # Errors
///
/// If `puzzle` does not name a puzzle, or the model checker reports an
/// evaluation error.
pub(crate) fn solve_knights(
    puzzle: Option<usize>,
    show_knowledge: bool,
    common: &CommonOptions,
) -> Result<(), String> {
    let puzzles = all_puzzles();
    let selected: Vec<&Puzzle> = match puzzle {
        Some(i) => vec![puzzles.get(i).ok_or_else(|| {
            format!("No puzzle {i}: expected 0 to {}", puzzles.len() - 1)
        })?],
        None => puzzles.iter().collect(),
    };

    let candidates = candidate_symbols();
    let mut checker = ModelChecker::new();
    let time = Instant::now();

    for puzzle in selected {
        println!("{}", puzzle.name);
        if show_knowledge {
            for statement in &puzzle.statements {
                println!("  {statement}");
            }
            println!("  Knowledge: {}", puzzle.knowledge);
        }

        let outcome = solve(&puzzle.knowledge, &candidates, &mut checker)
            .map_err(|e| format!("Error solving {}: {e}", puzzle.name))?;
        for line in render_outcome(&outcome) {
            println!("{line}");
        }
    }

    if common.stats {
        print_check_stats(time.elapsed(), &checker.stats());
    }
    Ok(())
}

pub(crate) fn render_outcome(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::NotImplemented => vec!["    Not yet implemented.".to_string()],
        Outcome::Entailed(symbols) => symbols.iter().map(|s| format!("    {s}")).collect(),
    }
}

/// Print the optimal move on `board`.
///
/// # Errors
///
/// If `board` cannot be parsed.
pub(crate) fn best_move(board: &str, pruning: Pruning, common: &CommonOptions) -> Result<(), String> {
    let board: Board = board.parse().map_err(|e| format!("Invalid board: {e}"))?;
    println!("{board}\n");

    let mut search = Minimax::new(pruning);
    let time = Instant::now();
    match search.best_move(&board) {
        Some((row, col)) => println!("Best move for {}: ({row}, {col})", board.player()),
        None => println!("Game over: {}", describe_end(&board)),
    }

    if common.stats {
        print_search_stats(time.elapsed(), &search.stats());
    }
    Ok(())
}

/// Play the game out from `board` with both sides moving optimally.
///
/// # Errors
///
/// If `board` cannot be parsed.
pub(crate) fn play_out(board: &str, pruning: Pruning, common: &CommonOptions) -> Result<(), String> {
    let board: Board = board.parse().map_err(|e| format!("Invalid board: {e}"))?;

    let mut search = Minimax::new(pruning);
    let time = Instant::now();
    let history = self_play(board, &mut search);
    let elapsed = time.elapsed();

    for (turn, position) in history.iter().enumerate() {
        println!("Turn {turn}:\n{position}\n");
    }
    if let Some(end) = history.last() {
        println!("Game over: {}", describe_end(end));
    }

    if common.stats {
        print_search_stats(elapsed, &search.stats());
    }
    Ok(())
}

pub(crate) fn describe_end(board: &Board) -> String {
    board
        .winner()
        .map_or_else(|| "Tie".to_string(), |p| format!("{p} wins"))
}

pub(crate) fn print_completions(shell: clap_complete::Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
}

/// Allocated and resident memory in MiB, as reported by jemalloc.
fn memory_usage() -> Option<(f64, f64)> {
    const MIB: f64 = 1024.0 * 1024.0;

    epoch::advance().ok()?;
    let allocated = stats::allocated::mib().ok()?.read().ok()?;
    let resident = stats::resident::mib().ok()?.read().ok()?;
    Some((allocated as f64 / MIB, resident as f64 / MIB))
}

/// Helper function to print a single statistic line in a formatted table row.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

fn print_resources(elapsed: Duration) {
    if let Some((allocated, resident)) = memory_usage() {
        stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
        stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    }
    stat_line("CPU time (s)", format!("{:.3}", elapsed.as_secs_f64()));
    println!("=====================================================================");
}

pub(crate) fn print_check_stats(elapsed: Duration, s: &CheckStats) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=====================[ Model Checking Statistics ]===================");
    stat_line("Queries", s.queries);
    stat_line_with_rate("Assignments", s.assignments, elapsed_secs);
    stat_line("Models", s.models);
    print_resources(elapsed);
}

pub(crate) fn print_search_stats(elapsed: Duration, s: &SearchStats) {
    println!("\n========================[ Search Statistics ]========================");
    stat_line_with_rate("Nodes", s.nodes, elapsed.as_secs_f64());
    print_resources(elapsed);
}
