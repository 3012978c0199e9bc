use std::io::{self, BufRead, Write};

use common::log;
use common::tictactoe::{BOARD_SIZE, GameSession, Outcome, PlacementError};

use crate::board_view::render_board;
use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Turn {
    Human,
    Computer,
}

/// Line-oriented round controller. Owns the game session and talks to the
/// player through any reader/writer pair.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    config: Config,
    session: GameSession,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
            session: GameSession::new(),
        }
    }

    /// Plays rounds until the player declines a replay or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_banner()?;

        let mut rounds = 0u32;
        loop {
            self.session.reset_board();
            rounds += 1;
            let Some(outcome) = self.play_one_round()? else {
                log!("Input closed during round {}", rounds);
                break;
            };
            log!("Round {} finished: {:?}", rounds, outcome);

            if !self.ask_play_again()? {
                break;
            }
        }

        writeln!(self.output, "Thanks for playing!")?;
        self.output.flush()
    }

    fn print_banner(&mut self) -> io::Result<()> {
        let symbols = self.config.symbols;
        writeln!(self.output, "==============================")?;
        writeln!(self.output, "   Tic-Tac-Toe (Rust with AI)")?;
        writeln!(self.output, "==============================")?;
        writeln!(self.output)?;
        writeln!(self.output, "You are {}, computer is {}.", symbols.human, symbols.computer)?;
        writeln!(self.output, "Enter moves as: row col")?;
        writeln!(self.output)
    }

    /// `None` when input ends before the round is decided.
    fn play_one_round(&mut self) -> io::Result<Option<Outcome>> {
        let mut turn = Turn::Human;

        loop {
            write!(self.output, "{}", render_board(self.session.board(), &self.config.symbols))?;

            let outcome = self.session.current_outcome();
            match outcome {
                Outcome::PlayerWins => {
                    writeln!(self.output, "You win!\n")?;
                    return Ok(Some(outcome));
                }
                Outcome::ComputerWins => {
                    writeln!(self.output, "Computer wins.\n")?;
                    return Ok(Some(outcome));
                }
                Outcome::Draw => {
                    writeln!(self.output, "It's a draw.\n")?;
                    return Ok(Some(outcome));
                }
                Outcome::NoWinnerYet => {}
            }

            turn = match turn {
                Turn::Human => {
                    if !self.human_turn()? {
                        return Ok(None);
                    }
                    Turn::Computer
                }
                Turn::Computer => {
                    self.computer_turn()?;
                    Turn::Human
                }
            };
        }
    }

    /// Returns `false` if input ended before a legal move was entered.
    fn human_turn(&mut self) -> io::Result<bool> {
        loop {
            write!(self.output, "Your move (row col): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(false);
            };

            let Some((row, col)) = parse_coordinates(&line) else {
                writeln!(self.output, "Invalid input, please enter two numbers.")?;
                continue;
            };

            let placed = match (usize::try_from(row), usize::try_from(col)) {
                (Ok(row), Ok(col)) => self.session.apply_human_move(row, col),
                _ => Err(PlacementError::OutOfRange),
            };

            match placed {
                Ok(()) => return Ok(true),
                Err(PlacementError::OutOfRange) => writeln!(
                    self.output,
                    "Row and column must be between 0 and {}.",
                    BOARD_SIZE - 1
                )?,
                Err(PlacementError::AlreadyOccupied) => {
                    writeln!(self.output, "That cell is taken, pick another one.")?
                }
            }
        }
    }

    fn computer_turn(&mut self) -> io::Result<()> {
        writeln!(self.output, "Computer is thinking...")?;
        if let Some(pos) = self.session.computer_turn()
            && self.config.announce_computer_moves
        {
            writeln!(self.output, "Computer plays {} {}.", pos.row, pos.col)?;
        }
        Ok(())
    }

    fn ask_play_again(&mut self) -> io::Result<bool> {
        loop {
            write!(self.output, "Play again? (y/n): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(false);
            };

            match line.trim().chars().next() {
                Some('y' | 'Y') => return Ok(true),
                Some('n' | 'N') => return Ok(false),
                Some(_) => writeln!(self.output, "Please enter 'y' or 'n'.")?,
                None => {}
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// First two whitespace-separated integers on the line. Range is checked by
/// the board, so negative values parse here.
fn parse_coordinates(line: &str) -> Option<(i64, i64)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    Some((row, col))
}
