use super::board::Board;
use super::types::{Mark, Position};
use super::win_detector::evaluate;

/// Depth-adjusted minimax value of `board` from the computer's point of view.
///
/// Every empty cell is tried in row-major order with the mark of the side to
/// move (computer when `is_maximizing`), recursing to the end of the game.
/// A win found `depth` plies below the root scores `10 - depth`, a loss
/// `-10 + depth`, so quicker wins and slower losses rank higher.
///
/// The board is borrowed mutably for exploratory placements and is returned
/// exactly as it was received.
pub fn search(board: &mut Board, is_maximizing: bool, depth: i32) -> i32 {
    let mut nodes = 0;
    minimax(board, is_maximizing, depth, &mut nodes)
}

pub(crate) fn minimax(board: &mut Board, is_maximizing: bool, depth: i32, nodes: &mut u64) -> i32 {
    *nodes += 1;

    let score = evaluate(board).score();
    if score > 0 {
        return score - depth;
    }
    if score < 0 {
        return score + depth;
    }
    if board.is_full() {
        return 0;
    }

    let mark = if is_maximizing { Mark::Computer } else { Mark::Human };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::all() {
        if !board.is_empty(pos) {
            continue;
        }

        // Cell was checked empty above, so placement cannot fail.
        let _ = board.place(pos, mark);
        let value = minimax(board, !is_maximizing, depth + 1, nodes);
        board.retract(pos);

        best = if is_maximizing { best.max(value) } else { best.min(value) };
    }

    best
}
