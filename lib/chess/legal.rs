use crate::chess::*;
use derive_more::Display;
use tracing::instrument;

/// Whether a [`Move`] may be played.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Legality {
    #[display(fmt = "legal")]
    Legal,

    /// The move leaves the mover's own king attacked.
    #[display(fmt = "leaves the king in check")]
    SelfCheck,

    /// The king castles out of, or through, an attacked square.
    #[display(fmt = "castles through an attacked square")]
    AttackedPath,
}

impl Legality {
    /// Whether this is [`Legality::Legal`].
    #[inline(always)]
    pub fn is_legal(&self) -> bool {
        *self == Legality::Legal
    }
}

impl Board {
    /// Whether the [`Move`] may be played on this board.
    ///
    /// The move is played and taken back, leaving the board as it was.
    pub fn legality(&mut self, m: Move) -> Legality {
        let side = m.figure().color();

        if m.is_castling() {
            let whence = m.whence();
            let transit = Square::new(
                match m.special() {
                    Special::CastleKingside => File::F,
                    _ => File::D,
                },
                whence.rank(),
            );

            if [whence, transit]
                .into_iter()
                .any(|sq| self.is_square_attacked(sq, !side))
            {
                return Legality::AttackedPath;
            }
        }

        let record = self.resolve(m, None);
        self.apply(&record);
        let check = self.is_check(side);
        self.undo(&record);

        if check {
            Legality::SelfCheck
        } else {
            Legality::Legal
        }
    }

    /// The legal moves of a [`Figure`] on this board.
    #[instrument(level = "trace", skip(self, figure), fields(figure = %figure.id(), square = %figure.square()))]
    pub fn legal_moves_of(&mut self, figure: Figure) -> Moves {
        let mut moves = figure.moves(self);
        moves.retain(|m| self.legality(*m).is_legal());
        moves
    }

    /// The legal moves of one side on this board.
    pub fn legal_moves(&mut self, side: Color) -> Vec<Move> {
        let mut moves = self.candidates(side);
        moves.retain(|m| self.legality(*m).is_legal());
        moves
    }

    /// Whether one side has any legal move on this board.
    pub fn has_legal_moves(&mut self, side: Color) -> bool {
        self.candidates(side)
            .into_iter()
            .any(|m| self.legality(m).is_legal())
    }

    fn candidates(&self, side: Color) -> Vec<Move> {
        self.figures_of(side).flat_map(|f| f.moves(self)).collect()
    }
}
