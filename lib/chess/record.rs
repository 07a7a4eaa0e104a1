use crate::chess::{Castles, Figure, Move, Special, Square};
use derive_more::Display;

/// A [`Move`] resolved against the board it is played on.
///
/// Besides the move itself, it carries everything needed to take it back:
/// the captured piece, the rook that castled, the promoted piece, and
/// the castling rights and en passant square as they were before the move.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "{}", "self.as_move()")]
pub struct MoveRecord {
    pub(crate) figure: Figure,
    pub(crate) whither: Square,
    pub(crate) special: Special,
    pub(crate) capture: Option<Figure>,
    pub(crate) castling: Option<(Figure, Square)>,
    pub(crate) promotion: Option<Figure>,
    pub(crate) castles: Castles,
    pub(crate) en_passant: Option<Square>,
}

impl MoveRecord {
    /// The [`Move`] this record was resolved from.
    #[inline(always)]
    pub fn as_move(&self) -> Move {
        Move::new(self.figure, self.whither, self.special)
    }

    /// The moving [`Figure`], as it stood before the move.
    #[inline(always)]
    pub fn figure(&self) -> Figure {
        self.figure
    }

    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.figure.square()
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.whither
    }

    /// The captured [`Figure`], if any, standing where it was captured.
    #[inline(always)]
    pub fn capture(&self) -> Option<Figure> {
        self.capture
    }

    /// The [`Square`] the captured piece was taken on.
    ///
    /// Differs from [`MoveRecord::whither`] for en passant captures.
    #[inline(always)]
    pub fn captured_square(&self) -> Option<Square> {
        self.capture.map(|f| f.square())
    }

    /// The castling rook as it stood before the move, and where it goes.
    #[inline(always)]
    pub fn castling(&self) -> Option<(Figure, Square)> {
        self.castling
    }

    /// The piece the pawn is promoted to.
    #[inline(always)]
    pub fn promotion(&self) -> Option<Figure> {
        self.promotion
    }

    /// The castling rights before this move.
    #[inline(always)]
    pub fn prev_castles(&self) -> Castles {
        self.castles
    }

    /// The en passant square before this move.
    #[inline(always)]
    pub fn prev_en_passant(&self) -> Option<Square> {
        self.en_passant
    }
}
