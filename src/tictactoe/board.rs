//! Tic-tac-toe rules over an immutable 3x3 board.
//!
//! `X` always moves first, so in every reachable position `X` has either as
//! many marks as `O` or exactly one more.

use crate::tictactoe::error::{MoveError, ParseBoardError};
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::Display;
use std::str::FromStr;

pub const SIZE: usize = 3;

/// A `(row, col)` cell coordinate, both in `0..3`.
pub type Action = (usize, usize);

/// The legal actions of a position. Never more than nine, so they stay inline.
pub type Actions = SmallVec<[Action; SIZE * SIZE]>;

/// Every row, column and diagonal.
const LINES: [[Action; SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    X,
    O,
}

impl Player {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    #[must_use]
    pub const fn mark(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board([[Option<Player>; SIZE]; SIZE]);

impl Board {
    /// The empty starting position.
    #[must_use]
    pub const fn new() -> Self {
        Self([[None; SIZE]; SIZE])
    }

    /// The mark at `(row, col)`.
    ///
    /// # Panics
    ///
    /// If either coordinate is outside `0..3`.
    #[must_use]
    pub fn cell(&self, (row, col): Action) -> Option<Player> {
        self.0[row][col]
    }

    fn cells(&self) -> impl Iterator<Item = Option<Player>> + '_ {
        self.0.iter().flatten().copied()
    }

    fn count(&self, player: Player) -> usize {
        self.cells().filter(|&c| c == Some(player)).count()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Every empty cell, in row-major order.
    #[must_use]
    pub fn actions(&self) -> Actions {
        (0..SIZE)
            .cartesian_product(0..SIZE)
            .filter(|&action| self.cell(action).is_none())
            .collect()
    }

    /// The board after the current player marks `action`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if either coordinate is outside `0..3`.
    /// - [`MoveError::IllegalMove`] if the cell is already marked.
    pub fn result(&self, (row, col): Action) -> Result<Self, MoveError> {
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if self.0[row][col].is_some() {
            return Err(MoveError::IllegalMove { row, col });
        }
        Ok(self.place((row, col)))
    }

    /// [`Board::result`] for an action already known to be legal.
    pub(crate) fn place(&self, (row, col): Action) -> Self {
        let mut next = *self;
        next.0[row][col] = Some(self.player());
        next
    }

    /// The player holding a complete row, column or diagonal, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            line.iter()
                .map(|&action| self.cell(action))
                .all_equal_value()
                .ok()
                .flatten()
        })
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells().all(|c| c.is_some())
    }

    /// The game is over: someone has won or no empty cell remains.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// `1` if `X` has won, `-1` if `O` has won, `0` otherwise.
    #[must_use]
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .0
            .iter()
            .map(|row| row.iter().map(|c| c.map_or('.', Player::mark)).join(" "))
            .join("\n");
        write!(f, "{rendered}")
    }
}

/// Parses nine cells: `X`, `O`, and `.`, `-` or `_` for empty. Whitespace and
/// `/` may separate rows and are ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<Option<Player>> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Some(Player::X)),
                'O' => Ok(Some(Player::O)),
                '.' | '-' | '_' => Ok(None),
                _ => Err(ParseBoardError::InvalidCell(c)),
            })
            .collect::<Result<_, _>>()?;

        if cells.len() != SIZE * SIZE {
            return Err(ParseBoardError::WrongCellCount(cells.len()));
        }

        let mut board = Self::new();
        for (i, cell) in cells.into_iter().enumerate() {
            board.0[i / SIZE][i % SIZE] = cell;
        }

        let (x, o) = (board.count(Player::X), board.count(Player::O));
        if x != o && x != o + 1 {
            return Err(ParseBoardError::UnreachableCounts { x, o });
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let b = Board::new();
        assert_eq!(b, Board::default());
        assert_eq!(b.player(), Player::X);
        assert_eq!(b.actions().len(), 9);
        assert_eq!(b.winner(), None);
        assert!(!b.is_terminal());
    }

    #[test]
    fn test_player_alternates() {
        let b = Board::new().result((1, 1)).unwrap();
        assert_eq!(b.cell((1, 1)), Some(Player::X));
        assert_eq!(b.player(), Player::O);

        let b = b.result((0, 0)).unwrap();
        assert_eq!(b.cell((0, 0)), Some(Player::O));
        assert_eq!(b.player(), Player::X);
    }

    #[test]
    fn test_actions_are_the_empty_cells() {
        let b = board("XO. / .X. / ..O");
        let actions = b.actions();
        assert_eq!(actions.len(), 5);
        assert!(actions.iter().all(|&a| b.cell(a).is_none()));
        assert!(actions.iter().all_unique());
    }

    #[test]
    fn test_result_leaves_input_untouched() {
        let before = Board::new();
        let after = before.result((2, 2)).unwrap();
        assert_eq!(before, Board::new());
        assert_ne!(before, after);
    }

    #[test]
    fn test_result_rejects_bad_moves() {
        let b = Board::new().result((0, 0)).unwrap();
        assert_eq!(
            b.result((3, 0)),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            b.result((0, 7)),
            Err(MoveError::OutOfBounds { row: 0, col: 7 })
        );
        assert_eq!(
            b.result((0, 0)),
            Err(MoveError::IllegalMove { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_winner_lines() {
        assert_eq!(board("XXX/OO./...").winner(), Some(Player::X));
        assert_eq!(board("XXX/OO./...").utility(), 1);
        assert_eq!(board("OX./OX./O.X").winner(), Some(Player::O));
        assert_eq!(board("OX./OX./O.X").utility(), -1);
        assert_eq!(board("XO./OX./..X").winner(), Some(Player::X));
        assert_eq!(board("X.O/XO./O.X").winner(), Some(Player::O));
        assert_eq!(board("XO./.../...").winner(), None);
        assert_eq!(board("XO./.../...").utility(), 0);
    }

    #[test]
    fn test_terminal() {
        // won with empty cells left
        assert!(board("XXX/OO./...").is_terminal());
        // drawn: full with no line
        let draw = board("XOX/XOO/OXX");
        assert_eq!(draw.winner(), None);
        assert!(draw.is_full());
        assert!(draw.is_terminal());
        assert_eq!(draw.utility(), 0);
        assert!(!board("XO./.../...").is_terminal());
    }

    #[test]
    fn test_nine_legal_moves_reach_a_terminal_board() {
        let orders: [fn(&Actions) -> Action; 2] = [|a| a[0], |a| a[a.len() - 1]];
        for pick in orders {
            let mut b = Board::new();
            for _ in 0..9 {
                b = b.result(pick(&b.actions())).unwrap();
            }
            assert!(b.is_full());
            assert!(b.is_terminal());
        }
    }

    #[test]
    fn test_parse_and_display() {
        let b = board("x.o\n.X.\n..-");
        assert_eq!(b.to_string(), "X . O\n. X .\n. . .");
        assert_eq!(b.to_string().parse::<Board>(), Ok(b));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(ParseBoardError::InvalidCell('?'))
        );
        assert_eq!(
            "XO.".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount(3))
        );
        assert_eq!(
            "XX.......".parse::<Board>(),
            Err(ParseBoardError::UnreachableCounts { x: 2, o: 0 })
        );
        assert_eq!(
            "O........".parse::<Board>(),
            Err(ParseBoardError::UnreachableCounts { x: 0, o: 1 })
        );
    }
}
