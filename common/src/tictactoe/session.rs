use crate::log;

use super::board::Board;
use super::bot_controller::choose_move;
use super::types::{Mark, Outcome, PlacementError, Position};
use super::win_detector::evaluate;

/// One human-versus-computer game session. Owns the board; the round
/// controller drives it one half-move at a time and checks
/// [`current_outcome`](Self::current_outcome) after each.
#[derive(Debug, Default)]
pub struct GameSession {
    board: Board,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn reset_board(&mut self) {
        self.board.reset();
    }

    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<(), PlacementError> {
        self.board.place(Position::new(row, col), Mark::Human)
    }

    /// Picks and plays the computer's move. `None` when no cell is empty.
    pub fn computer_turn(&mut self) -> Option<Position> {
        let choice = choose_move(&mut self.board)?;
        log!(
            "Computer plays {} (score {}, {} positions evaluated)",
            choice.position,
            choice.score,
            choice.nodes_evaluated
        );
        self.board.place(choice.position, Mark::Computer).ok()?;
        Some(choice.position)
    }

    pub fn current_outcome(&self) -> Outcome {
        evaluate(&self.board)
    }
}
