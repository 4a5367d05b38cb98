//! Exhaustive minimax over the tic-tac-toe game tree.
//!
//! `X` is the maximizing player and `O` the minimizing one; values are the
//! [`Board::utility`] of the terminal positions reached. Among equally good
//! actions the first one in [`Board::actions`] order wins. Alpha-beta pruning
//! is optional and never changes the chosen action.

use crate::tictactoe::board::{Action, Board, Player};
use clap::ValueEnum;
use log::debug;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Pruning {
    /// Visit the complete game tree.
    #[default]
    None,
    /// Skip subtrees that cannot change the result.
    AlphaBeta,
}

impl Display for Pruning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, terminal ones included.
    pub nodes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Minimax {
    pruning: Pruning,
    stats: SearchStats,
}

impl Minimax {
    #[must_use]
    pub const fn new(pruning: Pruning) -> Self {
        Self {
            pruning,
            stats: SearchStats { nodes: 0 },
        }
    }

    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The optimal action for the player to move, or `None` once the game is
    /// over.
    pub fn best_move(&mut self, board: &Board) -> Option<Action> {
        if board.is_terminal() {
            return None;
        }

        let before = self.stats.nodes;
        let (value, action) = self.search(board, i32::MIN, i32::MAX);
        debug!(
            "{} plays {action:?} (value {value}, {} nodes, pruning {})",
            board.player(),
            self.stats.nodes - before,
            self.pruning
        );
        action
    }

    /// The minimax value of `board` and the action achieving it.
    ///
    /// The result is exact whenever it lies strictly inside `(alpha, beta)`.
    fn search(&mut self, board: &Board, mut alpha: i32, mut beta: i32) -> (i32, Option<Action>) {
        self.stats.nodes += 1;
        if board.is_terminal() {
            return (board.utility(), None);
        }

        let maximizing = board.player() == Player::X;
        let mut best: Option<(i32, Action)> = None;

        for action in board.actions() {
            let (value, _) = self.search(&board.place(action), alpha, beta);

            let improves = best.is_none_or(|(v, _)| {
                if maximizing { value > v } else { value < v }
            });
            if improves {
                best = Some((value, action));
            }

            if self.pruning == Pruning::AlphaBeta {
                if maximizing {
                    alpha = alpha.max(value);
                } else {
                    beta = beta.min(value);
                }
                if alpha >= beta {
                    break;
                }
            }
        }

        // a non-terminal board always has at least one action
        best.map_or((board.utility(), None), |(v, a)| (v, Some(a)))
    }
}

/// The optimal action for the player to move, searching the full tree.
#[must_use]
pub fn minimax(board: &Board) -> Option<Action> {
    Minimax::default().best_move(board)
}

/// Plays optimal moves for both sides from `board` until the game ends.
///
/// The returned boards start with `board` itself and end with a terminal one.
pub fn self_play(board: Board, search: &mut Minimax) -> Vec<Board> {
    let mut history = vec![board];
    let mut current = board;
    while let Some(action) = search.best_move(&current) {
        current = current.place(action);
        history.push(current);
    }
    history
}
