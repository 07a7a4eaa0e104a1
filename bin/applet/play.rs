use crate::{io::Io, render::Render};
use anyhow::Error as Anyhow;
use clap::Parser;
use derive_more::{Display, Error};
use lib::chess::{Promotion, Square};
use lib::game::Game;
use std::io::{stdin, stdout};
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// Plays a game of chess on the terminal.
///
/// Each line is either a square, as `e2` or as 0-based coordinates `4 1`,
/// a promotion such as `q` or `knight`, `undo`, or `quit`.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// Draw the board from Black's side.
    #[clap(short, long)]
    flip: bool,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut io = Io::new(stdout(), stdin().lock());
        let mut game = Game::new();

        io.send(Render::new(&game, self.flip))?;
        io.flush()?;

        while let Some(line) = io.recv()? {
            let command = match line.parse() {
                Ok(command) => command,
                Err(e) => {
                    warn!(%line, "{}", e);
                    io.send(e)?;
                    io.flush()?;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Click(sq) => io.send(game.submit_click(sq))?,
                Command::Promote(p) => io.send(game.resolve_promotion(p))?,
                Command::Undo => match game.undo() {
                    Some(record) => io.send(format_args!("took back {record}"))?,
                    None => io.send("nothing to take back")?,
                },
            }

            io.send(Render::new(&game, self.flip))?;
            io.flush()?;

            if game.status().is_over() {
                info!(status = %game.status(), moves = game.history().len(), "game over");
            }
        }

        Ok(())
    }
}

/// The reason why a line could not be understood.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "unrecognized command `{_0}`, expected a square, a promotion, `undo` or `quit`")]
pub struct ParseCommandError(#[error(not(source))] pub String);

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Click(Square),
    Promote(Promotion),
    Undo,
    Quit,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s.to_ascii_lowercase().as_str() {
            "undo" => return Ok(Command::Undo),
            "quit" | "stop" => return Ok(Command::Quit),
            _ => {}
        }

        if let Ok(p) = s.parse() {
            return Ok(Command::Promote(p));
        }

        if let Ok(sq) = s.to_ascii_lowercase().parse() {
            return Ok(Command::Click(sq));
        }

        let coords: Vec<_> = s.split_whitespace().map(i8::from_str).collect();
        match coords[..] {
            [Ok(x), Ok(y)] => Square::from_coords(x, y)
                .map(Command::Click)
                .ok_or_else(|| ParseCommandError(s.into())),
            _ => Err(ParseCommandError(s.into())),
        }
    }
}
