//! This crate provides two small search algorithms: entailment by propositional
//! model checking, applied to knights and knaves puzzles, and exact minimax for
//! tic-tac-toe.

/// The `knights` module encodes knights and knaves puzzles as knowledge bases
/// and reports what they entail.
pub mod knights;

/// The `logic` module implements propositional formulas, their evaluation,
/// and brute-force model checking.
pub mod logic;

/// The `tictactoe` module implements the game rules and a minimax player.
pub mod tictactoe;
