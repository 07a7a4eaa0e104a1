use lib::chess::{File, Rank, Square};
use lib::game::Game;
use lib::util::Integer;
use std::fmt;

/// A board diagram with the current selection highlighted.
///
/// The selected piece is shown in brackets, quiet destinations as `*`,
/// and captures in parentheses.
#[derive(Debug, Copy, Clone)]
pub struct Render<'a> {
    game: &'a Game,
    flip: bool,
}

impl<'a> Render<'a> {
    /// Draws the board from White's side, or from Black's if `flip`.
    pub fn new(game: &'a Game, flip: bool) -> Self {
        Render { game, flip }
    }

    fn files(&self) -> Vec<File> {
        let mut files: Vec<_> = File::iter().collect();
        if self.flip {
            files.reverse();
        }

        files
    }

    fn ranks(&self) -> Vec<Rank> {
        let mut ranks: Vec<_> = Rank::iter().collect();
        if !self.flip {
            ranks.reverse();
        }

        ranks
    }

    fn cell(&self, sq: Square) -> String {
        let glyph = match self.game.board().piece_on(sq) {
            Some(p) => p.to_string(),
            None => " ".to_string(),
        };

        match self.game.selection() {
            Some(s) if s.figure().square() == sq => format!("[{glyph}]"),
            Some(s) if s.captures().any(|c| c == sq) => format!("({glyph})"),
            Some(s) if s.quiet().any(|q| q == sq) => " * ".to_string(),
            _ => format!(" {glyph} "),
        }
    }

    fn legend(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;

        for file in self.files() {
            write!(f, "  {} ", file)?;
        }

        writeln!(f)
    }
}

impl<'a> fmt::Display for Render<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.legend(f)?;
        writeln!(f, "   +---+---+---+---+---+---+---+---+")?;

        for rank in self.ranks() {
            write!(f, " {} |", rank)?;

            for file in self.files() {
                write!(f, "{}|", self.cell(Square::new(file, rank)))?;
            }

            writeln!(f, " {}", rank)?;
            writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        }

        self.legend(f)?;

        let game = self.game;
        match game.promoting() {
            Some(sq) => write!(f, "{} to promote the pawn on {}", game.turn(), sq),
            None => write!(f, "{} to move, {}", game.turn(), game.status()),
        }
    }
}
