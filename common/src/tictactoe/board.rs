use super::types::{BOARD_SIZE, Mark, PlacementError, Position};
use super::win_detector::check_win;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Panics if `pos` is off the board; callers validate coordinates first.
    pub fn mark_at(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.mark_at(pos) == Mark::Empty
    }

    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), PlacementError> {
        if !pos.is_on_board() {
            return Err(PlacementError::OutOfRange);
        }
        if !self.is_empty(pos) {
            return Err(PlacementError::AlreadyOccupied);
        }
        self.cells[pos.row][pos.col] = mark;
        Ok(())
    }

    /// Undoes a successful `place`. Not validated against the current content.
    pub fn retract(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Mark::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|&pos| self.is_empty(pos))
    }
}

#[cfg(test)]
pub(crate) fn board_from_rows(rows: [&str; BOARD_SIZE]) -> Board {
    let mut board = Board::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let mark = match ch {
                'X' => Mark::Human,
                'O' => Mark::Computer,
                _ => Mark::Empty,
            };
            board.cells[row][col] = mark;
        }
    }
    board
}
