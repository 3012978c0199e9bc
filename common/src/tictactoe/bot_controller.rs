use super::board::Board;
use super::minimax::minimax;
use super::types::{Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    pub position: Position,
    pub score: i32,
    pub nodes_evaluated: u64,
}

/// Best computer move on `board`, or `None` when no cell is empty.
///
/// Ties keep the first cell in row-major order. The board is left unchanged.
pub fn select_best_move(board: &mut Board) -> Option<Position> {
    choose_move(board).map(|choice| choice.position)
}

pub fn choose_move(board: &mut Board) -> Option<MoveChoice> {
    let mut best: Option<(Position, i32)> = None;
    let mut nodes_evaluated = 0;

    for pos in Position::all() {
        if !board.is_empty(pos) {
            continue;
        }

        let _ = board.place(pos, Mark::Computer);
        let score = minimax(board, false, 0, &mut nodes_evaluated);
        board.retract(pos);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    best.map(|(position, score)| MoveChoice {
        position,
        score,
        nodes_evaluated,
    })
}
