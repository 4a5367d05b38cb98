#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Knights and knaves puzzles solved by model checking.

/// The puzzle statements, encoded as knowledge bases.
pub mod puzzles;

/// Reports which symbols each puzzle's knowledge base entails.
pub mod solver;
