use crate::chess::{Color, Piece, Role, Square};
use derive_more::{Display, From};

/// Identifies a [`Figure`] for as long as it stays on the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, From)]
#[display(fmt = "#{_0}")]
pub struct FigureId(u8);

/// A [`Piece`] placed on the board.
///
/// Two figures of the same piece are distinct entities told apart by their [`FigureId`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Figure {
    id: FigureId,
    piece: Piece,
    square: Square,
}

impl Figure {
    pub(crate) fn new(id: FigureId, piece: Piece, square: Square) -> Self {
        Figure { id, piece, square }
    }

    /// This figure's identity.
    #[inline(always)]
    pub fn id(&self) -> FigureId {
        self.id
    }

    /// This figure's [`Piece`].
    #[inline(always)]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// This figure's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.piece.role()
    }

    /// This figure's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.piece.color()
    }

    /// The [`Square`] this figure stands on.
    #[inline(always)]
    pub fn square(&self) -> Square {
        self.square
    }

    /// This figure standing on another [`Square`].
    #[inline(always)]
    pub(crate) fn on(self, square: Square) -> Self {
        Figure { square, ..self }
    }
}
