use std::fmt;

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    Human,
    Computer,
}

/// A cell coordinate. Construction does not range-check; `Board::place`
/// rejects positions outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    NoWinnerYet,
    PlayerWins,
    ComputerWins,
    Draw,
}

impl Outcome {
    pub const WIN_SCORE: i32 = 10;

    /// Base score from the computer's point of view, before depth adjustment.
    pub fn score(&self) -> i32 {
        match self {
            Outcome::ComputerWins => Self::WIN_SCORE,
            Outcome::PlayerWins => -Self::WIN_SCORE,
            Outcome::Draw | Outcome::NoWinnerYet => 0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self != Outcome::NoWinnerYet
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    OutOfRange,
    AlreadyOccupied,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfRange => {
                write!(f, "Row and column must be between 0 and {}", BOARD_SIZE - 1)
            }
            PlacementError::AlreadyOccupied => write!(f, "Cell is already marked"),
        }
    }
}

impl std::error::Error for PlacementError {}
