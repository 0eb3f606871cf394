//! Line-based hot-seat frontend.
//!
//! Each input line is one input event: it is mapped to a cell index and
//! handed to the match. The console re-renders the board after every
//! accepted move and stops reading once the match reports a result.

use noughts::{Game, GameStatus, Position};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// The match reached a result.
    Completed(GameStatus),
    /// Input ended or a player quit before the match was decided.
    Abandoned,
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A cell index; not yet checked against the board.
    Cell(usize),
    /// Leave the match.
    Quit,
    /// Nothing typed.
    Blank,
    /// Neither a number, a cell label nor a command.
    Unrecognized(String),
}

impl Input {
    /// Parses a line: a number, a cell label such as `center`, or `quit`.
    ///
    /// Numbers are passed through unchecked so the match itself reports
    /// out-of-range indices.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Input::Blank;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            return Input::Quit;
        }
        if let Ok(index) = line.parse::<usize>() {
            return Input::Cell(index);
        }
        match Position::from_label_or_number(line) {
            Some(position) => Input::Cell(position.to_index()),
            None => Input::Unrecognized(line.to_string()),
        }
    }
}

/// Message announcing a finished match, or `None` while it is in progress.
pub fn outcome_message(game: &Game) -> Option<String> {
    match game.status() {
        GameStatus::InProgress => None,
        GameStatus::Won(symbol) => Some(match game.winner() {
            Some(winner) => format!(
                "Congratulations, {} ({})! You have won the game!",
                winner.name(),
                winner.symbol()
            ),
            None => format!("{symbol} has won the game!"),
        }),
        GameStatus::Drawn => Some("It's a draw! Well played both!".to_string()),
    }
}

/// Hot-seat console over any line reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and rendering to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the match until it is decided or input runs out.
    #[instrument(skip_all)]
    pub fn run(&mut self, game: &mut Game) -> io::Result<Finish> {
        info!("Console session started");
        self.render_players(game)?;
        self.render_board(game)?;

        if game.is_over() {
            self.render_outcome(game)?;
            return Ok(Finish::Completed(*game.status()));
        }

        let mut line = String::new();
        loop {
            write!(self.output, "{}, choose a cell: ", game.current_player())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                info!("Input closed before the match was decided");
                writeln!(self.output)?;
                return Ok(Finish::Abandoned);
            }

            match Input::parse(&line) {
                Input::Blank => continue,
                Input::Quit => {
                    info!("Player quit");
                    writeln!(self.output, "Match abandoned.")?;
                    return Ok(Finish::Abandoned);
                }
                Input::Unrecognized(text) => {
                    debug!(%text, "Unrecognized input");
                    writeln!(
                        self.output,
                        "'{text}' is not a cell. Enter 0-8, a name such as 'center', or 'quit'."
                    )?;
                }
                Input::Cell(position) => match game.play_turn(position) {
                    Ok(_) => {
                        self.render_board(game)?;
                        if Self::is_decided(game) {
                            self.render_outcome(game)?;
                            return Ok(Finish::Completed(*game.status()));
                        }
                    }
                    Err(error) => {
                        warn!(position, %error, "Input rejected");
                        writeln!(self.output, "{error}. Try again.")?;
                    }
                },
            }
        }
    }

    /// No line can be complete before some symbol has three marks, so the
    /// victory and draw queries are skipped until then.
    fn is_decided(game: &Game) -> bool {
        game.board().can_check_victory() && (game.has_victory() || game.has_draw())
    }

    fn render_players(&mut self, game: &Game) -> io::Result<()> {
        let [first, second] = game.players();
        writeln!(self.output, "{first} vs {second}")
    }

    fn render_board(&mut self, game: &Game) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", game.board())?;
        writeln!(self.output)
    }

    fn render_outcome(&mut self, game: &Game) -> io::Result<()> {
        if let Some(message) = outcome_message(game) {
            writeln!(self.output, "{message}")?;
        }
        Ok(())
    }
}
