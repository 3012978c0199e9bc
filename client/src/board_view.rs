use common::tictactoe::{BOARD_SIZE, Board, Position};

use crate::config::SymbolConfig;

/// Text rendering of the board with row and column labels:
///
/// ```text
///    0   1   2
/// 0  X | O |
///   ---+---+---
/// ```
pub fn render_board(board: &Board, symbols: &SymbolConfig) -> String {
    let mut out = String::from("\n  ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!(" {}  ", col));
    }
    out.truncate(out.trim_end().len());
    out.push('\n');

    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{} ", row));
        for col in 0..BOARD_SIZE {
            let ch = symbols.symbol_for(board.mark_at(Position::new(row, col)));
            out.push_str(&format!(" {} ", ch));
            if col + 1 < BOARD_SIZE {
                out.push('|');
            }
        }
        out.push('\n');
        if row + 1 < BOARD_SIZE {
            out.push_str("  ---+---+---\n");
        }
    }
    out.push('\n');
    out
}
