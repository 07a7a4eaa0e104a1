use crate::chess::{Figure, Role, Square};
use arrayvec::ArrayVec;
use derive_more::Display;

/// The moves available to a single [`Figure`][`crate::chess::Figure`].
pub type Moves = ArrayVec<Move, 32>;

/// What a [`Move`] intends to do besides relocating the moving piece.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Special {
    /// A quiet move.
    None,
    /// Takes the piece on the destination square.
    Capture,
    /// Takes the pawn that just skipped over the destination square.
    EnPassant,
    /// The king castles with the rook on its side.
    CastleKingside,
    /// The king castles with the rook on the queen's side.
    CastleQueenside,
}

/// A move proposed by move generation.
///
/// Moves follow the movement rules of the piece and the occupancy of the board,
/// but may still leave the mover's own king attacked.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "{}{}", "self.whence()", "self.whither")]
pub struct Move {
    figure: Figure,
    whither: Square,
    special: Special,
}

impl Move {
    pub(crate) fn new(figure: Figure, whither: Square, special: Special) -> Self {
        Move {
            figure,
            whither,
            special,
        }
    }

    /// The moving [`Figure`], as it stands before the move.
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

    /// What this move intends to do.
    #[inline(always)]
    pub fn special(&self) -> Special {
        self.special
    }

    /// Whether this move takes an enemy piece.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        matches!(self.special, Special::Capture | Special::EnPassant)
    }

    /// Whether this is a castling move.
    #[inline(always)]
    pub fn is_castling(&self) -> bool {
        matches!(
            self.special,
            Special::CastleKingside | Special::CastleQueenside
        )
    }

    /// Whether this move takes a pawn to its promotion rank.
    #[inline(always)]
    pub fn is_promotion(&self) -> bool {
        let color = self.figure.color();
        self.figure.role() == Role::Pawn
            && self.whither.rank() == color.promotion_rank()
    }
}
