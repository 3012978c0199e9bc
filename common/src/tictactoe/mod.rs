mod board;
mod bot_controller;
mod minimax;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{MoveChoice, choose_move, select_best_move};
pub use minimax::search;
pub use session::GameSession;
pub use types::{BOARD_SIZE, Mark, Outcome, PlacementError, Position};
pub use win_detector::{check_win, evaluate};
