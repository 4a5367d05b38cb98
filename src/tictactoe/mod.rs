#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Tic-tac-toe rules and an optimal player.

pub mod board;
pub mod error;
pub mod minimax;

pub use board::{Action, Actions, Board, Player};
pub use error::{MoveError, ParseBoardError};
pub use minimax::{minimax, self_play, Minimax, Pruning, SearchStats};
