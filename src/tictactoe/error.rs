use thiserror::Error;

/// A move the rules reject. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("move ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    IllegalMove { row: usize, col: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("unexpected character `{0}` in board")]
    InvalidCell(char),

    #[error("expected 9 cells, found {0}")]
    WrongCellCount(usize),

    #[error("{x} X marks and {o} O marks cannot be reached with X moving first")]
    UnreachableCounts { x: usize, o: usize },
}
