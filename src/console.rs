//! Interactive human-vs-computer console.
//!
//! The human types moves as `<row> <col>` (1-indexed); the computer answers
//! with a rollout-evaluated move. The human plays Blue (left to right), the
//! computer Red (top to bottom).
//!
//! ## Example
//!
//! ```no_run
//! use hex_rollout::console::Console;
//! use hex_rollout::rollout::MoveEvaluator;
//! let mut console = Console::new(11, MoveEvaluator::new(), fastrand::Rng::new());
//! console.run(false)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::io::{self, BufRead, Write};

use log::info;

use crate::board::{Color, Point};
use crate::error::HexError;
use crate::game::{parse_point, str_point, Game};
use crate::rollout::MoveEvaluator;

/// Outcome of one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Both moves were played and the game goes on.
    Continue { ai_move: Point },
    HumanWon,
    AiWon { ai_move: Point },
    /// The board filled up without a winner.
    Draw,
    /// The input was rejected; the message says why.
    Invalid(String),
    Quit,
}

pub struct Console {
    game: Game,
    evaluator: MoveEvaluator,
    rng: fastrand::Rng,
    human: Color,
    finished: bool,
}

impl Console {
    pub fn new(size: usize, evaluator: MoveEvaluator, rng: fastrand::Rng) -> Self {
        Self {
            game: Game::new(size),
            evaluator,
            rng,
            human: Color::Blue,
            finished: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Handles one line typed by the human.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let line = line.trim();
        if matches!(line.to_lowercase().as_str(), "quit" | "exit") {
            return Reply::Quit;
        }
        if self.finished {
            return Reply::Invalid(HexError::GameOver.to_string());
        }

        let point = match parse_point(line) {
            Ok(p) => p,
            Err(e) => return Reply::Invalid(e.to_string()),
        };
        if let Err(e) = self.game.play(point, self.human) {
            return Reply::Invalid(e.to_string());
        }
        if self.game.has_won(self.human) {
            self.finished = true;
            info!("human wins");
            return Reply::HumanWon;
        }
        self.computer_move()
    }

    /// Lets the computer move, then reports the state of the game.
    pub fn computer_move(&mut self) -> Reply {
        if self.finished {
            return Reply::Invalid(HexError::GameOver.to_string());
        }
        if self.game.empty_count() == 0 {
            self.finished = true;
            return Reply::Draw;
        }

        let ai = self.human.opponent();
        let index = match self.evaluator.choose_move(&mut self.game, ai, &mut self.rng) {
            Ok(index) => index,
            Err(e) => return Reply::Invalid(e.to_string()),
        };
        let ai_move = self.game.board().point(index);

        if self.game.has_won(ai) {
            self.finished = true;
            info!("computer wins");
            Reply::AiWon { ai_move }
        } else if self.game.empty_count() == 0 {
            self.finished = true;
            Reply::Draw
        } else {
            Reply::Continue { ai_move }
        }
    }

    /// Runs the game on stdin/stdout.
    pub fn run(&mut self, ai_first: bool) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock(), ai_first)
    }

    /// Runs the game reading moves from `input` and writing to `output`.
    pub fn run_with<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        ai_first: bool,
    ) -> anyhow::Result<()> {
        writeln!(output, "A game of Hex")?;
        writeln!(
            output,
            "You play {} ({}), connecting left and right. The computer plays {} ({}), connecting top and bottom.",
            self.human,
            self.human.symbol(),
            self.human.opponent(),
            self.human.opponent().symbol()
        )?;
        writeln!(output, "Enter moves as '<row> <col>', or 'quit'.\n")?;

        if ai_first {
            let reply = self.computer_move();
            if self.write_reply(&mut output, reply)? {
                output.flush()?;
                return Ok(());
            }
        } else {
            write!(output, "{}\nYour move: ", self.game.board())?;
        }
        output.flush()?;

        for line in input.lines() {
            let reply = self.handle_line(&line?);
            if self.write_reply(&mut output, reply)? {
                break;
            }
            output.flush()?;
        }
        output.flush()?;
        Ok(())
    }

    /// Prints `reply`; returns true once the session is over.
    fn write_reply<W: Write>(&self, output: &mut W, reply: Reply) -> io::Result<bool> {
        let board = self.game.board();
        match reply {
            Reply::Quit => return Ok(true),
            Reply::Invalid(message) => write!(output, "{message}\nYour move: ")?,
            Reply::Continue { ai_move } => write!(
                output,
                "Computer played {}\n\n{board}\nYour move: ",
                str_point(ai_move)
            )?,
            Reply::HumanWon => writeln!(output, "{board}\nYou have won!")?,
            Reply::AiWon { ai_move } => writeln!(
                output,
                "Computer played {}\n\n{board}\nThe computer has won.",
                str_point(ai_move)
            )?,
            Reply::Draw => writeln!(output, "{board}\nThe board is full: draw.")?,
        }
        Ok(self.finished)
    }
}
