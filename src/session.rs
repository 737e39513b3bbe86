//! Interactive turn loop over injectable input/output endpoints.

use std::io::{self, BufRead, Write};

use crate::config::SURRENDER_COMMAND;
use crate::coord::Coordinate;
use crate::game::{Game, Outcome};
use crate::render::render_board;

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every ship was sunk.
    Won,
    /// The player gave up (surrender sentinel or end of input).
    Surrendered,
}

/// Turn-loop states. `Won` and `Surrendered` are terminal.
enum TurnState {
    AwaitingInput,
    Resolving(Coordinate),
    Won,
    Surrendered,
}

/// Drives one game over any line-oriented input source and output sink, so
/// the loop runs against real console streams and test buffers alike.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    /// The underlying game, for inspection after the loop ends.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the loop to completion. Rejected guesses (malformed, out of
    /// bounds, duplicate) print a one-line message and re-prompt; the loop
    /// only exits on a win or a surrender.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        let mut state = TurnState::AwaitingInput;
        loop {
            state = match state {
                TurnState::AwaitingInput => self.read_guess()?,
                TurnState::Resolving(coord) => self.resolve(coord)?,
                TurnState::Won => return Ok(SessionEnd::Won),
                TurnState::Surrendered => {
                    write!(
                        self.output,
                        "{}",
                        render_board(self.game.grid(), self.game.fleet())
                    )?;
                    return Ok(SessionEnd::Surrendered);
                }
            };
        }
    }

    fn read_guess(&mut self) -> io::Result<TurnState> {
        write!(self.output, "Enter a coordinate: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // end of input counts as giving up
            writeln!(self.output)?;
            return Ok(TurnState::Surrendered);
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line == SURRENDER_COMMAND {
            return Ok(TurnState::Surrendered);
        }
        match line.parse::<Coordinate>() {
            Ok(coord) => Ok(TurnState::Resolving(coord)),
            Err(err) => {
                writeln!(self.output, "{}", err)?;
                Ok(TurnState::AwaitingInput)
            }
        }
    }

    fn resolve(&mut self, coord: Coordinate) -> io::Result<TurnState> {
        match self.game.resolve_guess(coord) {
            Outcome::OutOfBounds => {
                writeln!(self.output, "Please enter a valid coordinate")?;
                Ok(TurnState::AwaitingInput)
            }
            Outcome::AlreadyPlayed => {
                writeln!(
                    self.output,
                    "You've already played this coordinate. Please enter a different coordinate"
                )?;
                Ok(TurnState::AwaitingInput)
            }
            Outcome::Miss => {
                writeln!(self.output, "MISS")?;
                Ok(TurnState::AwaitingInput)
            }
            Outcome::Hit => {
                writeln!(self.output, "HIT")?;
                self.check_win()
            }
            Outcome::Sink(_) => {
                writeln!(self.output, "SINK")?;
                self.check_win()
            }
        }
    }

    fn check_win(&mut self) -> io::Result<TurnState> {
        if self.game.is_fleet_destroyed() {
            writeln!(self.output, "WIN")?;
            Ok(TurnState::Won)
        } else {
            Ok(TurnState::AwaitingInput)
        }
    }
}
