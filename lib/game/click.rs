use crate::chess::{Figure, Move, MoveRecord, Moves, Square};
use crate::game::GameStatus;
use derive_more::Display;

/// A selected [`Figure`] and its legal moves.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "`{}` on `{}`", "figure.piece()", "figure.square()")]
pub struct Selection {
    figure: Figure,
    moves: Moves,
}

impl Selection {
    pub(crate) fn new(figure: Figure, moves: Moves) -> Self {
        Selection { figure, moves }
    }

    /// The selected [`Figure`].
    #[inline(always)]
    pub fn figure(&self) -> Figure {
        self.figure
    }

    /// The legal moves of the selected figure.
    #[inline(always)]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The legal move onto the given [`Square`], if any.
    pub fn to(&self, sq: Square) -> Option<Move> {
        self.moves.iter().find(|m| m.whither() == sq).copied()
    }

    /// Destinations that capture nothing, castling included.
    pub fn quiet(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves
            .iter()
            .filter(|m| !m.is_capture())
            .map(Move::whither)
    }

    /// Destinations that capture, en passant included.
    pub fn captures(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves
            .iter()
            .filter(|m| m.is_capture())
            .map(Move::whither)
    }
}

/// The outcome of a click on the board.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash)]
pub enum Click {
    /// A piece was selected, its legal moves await a destination.
    #[display(fmt = "selected {_0}")]
    Selected(Selection),

    /// The piece clicked belongs to the side to move, but it has no legal moves.
    #[display(fmt = "the piece on `{_0}` cannot move")]
    Immobile(Square),

    #[display(fmt = "played {_0}")]
    Moved(MoveRecord),

    /// The pawn on this square awaits a promotion.
    #[display(fmt = "choose a promotion for the pawn on `{_0}`")]
    PromotionPending(Square),

    /// Nothing to select, or not a legal destination; any selection is dropped.
    #[display(fmt = "invalid move")]
    Invalid,

    #[display(fmt = "the piece belongs to the side not to move")]
    WrongTurn,

    #[display(fmt = "the game is over, {_0}")]
    GameOver(GameStatus),
}
