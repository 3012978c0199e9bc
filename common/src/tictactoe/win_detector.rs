use super::board::Board;
use super::types::{BOARD_SIZE, Mark, Outcome};

type Line = [(usize, usize); BOARD_SIZE];

// Rows, then columns, then the two diagonals.
const LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(cells: &[[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Option<Mark> {
    LINES.iter().find_map(|&[(r0, c0), (r1, c1), (r2, c2)]| {
        let mark = cells[r0][c0];
        if mark != Mark::Empty && mark == cells[r1][c1] && mark == cells[r2][c2] {
            Some(mark)
        } else {
            None
        }
    })
}

pub fn evaluate(board: &Board) -> Outcome {
    match board.winner() {
        Some(Mark::Computer) => Outcome::ComputerWins,
        Some(Mark::Human) => Outcome::PlayerWins,
        _ if board.is_full() => Outcome::Draw,
        _ => Outcome::NoWinnerYet,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::board_from_rows;
    use crate::tictactoe::types::Position;

    #[test]
    fn test_rows_columns_and_diagonals_win() {
        assert_eq!(board_from_rows(["...", "XXX", "OO."]).winner(), Some(Mark::Human));
        assert_eq!(board_from_rows(["O.X", "O.X", "O.."]).winner(), Some(Mark::Computer));
        assert_eq!(board_from_rows(["X.O", ".XO", "..X"]).winner(), Some(Mark::Human));
        assert_eq!(board_from_rows(["XXO", ".O.", "O.X"]).winner(), Some(Mark::Computer));
    }

    fn holds_line(board: &Board, mark: Mark) -> bool {
        LINES.iter().any(|line| {
            line.iter()
                .all(|&(row, col)| board.mark_at(Position::new(row, col)) == mark)
        })
    }

    // Alternating play from the empty board, human first, stopping at the
    // first completed line.
    fn walk_reachable_boards(board: &mut Board, to_move: Mark, visited: &mut u64) {
        *visited += 1;
        let human_line = holds_line(board, Mark::Human);
        let computer_line = holds_line(board, Mark::Computer);
        assert!(!(human_line && computer_line), "both sides hold a line on {:?}", board);

        let expected = if human_line {
            Some(Mark::Human)
        } else if computer_line {
            Some(Mark::Computer)
        } else {
            None
        };
        assert_eq!(board.winner(), expected);
        if expected.is_some() {
            return;
        }

        let next = if to_move == Mark::Human { Mark::Computer } else { Mark::Human };
        for pos in Position::all() {
            if board.place(pos, to_move).is_ok() {
                walk_reachable_boards(board, next, visited);
                board.retract(pos);
            }
        }
    }

    #[test]
    fn test_reachable_boards_have_at_most_one_winner() {
        let mut board = Board::new();
        let mut visited = 0;
        walk_reachable_boards(&mut board, Mark::Human, &mut visited);
        assert_eq!(board, Board::new());
        // Size of the complete tic-tac-toe game tree including the root.
        assert_eq!(visited, 549_946);
    }

    #[test]
    fn test_partial_lines_do_not_win() {
        assert_eq!(board_from_rows(["XX.", "OO.", "..."]).winner(), None);
        assert_eq!(board_from_rows(["XOX", "...", "..."]).winner(), None);
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate(&Board::new()), Outcome::NoWinnerYet);
        assert_eq!(evaluate(&board_from_rows(["OOO", "XX.", "X.."])), Outcome::ComputerWins);
        assert_eq!(evaluate(&board_from_rows(["XXX", "OO.", "..."])), Outcome::PlayerWins);
        assert_eq!(evaluate(&board_from_rows(["XOX", "XOO", "OXX"])), Outcome::Draw);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let board = board_from_rows(["XOX", "OXO", "OXX"]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board), Outcome::PlayerWins);
    }
}
