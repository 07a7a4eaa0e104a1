use crate::chess::{Board, Color};
use derive_more::Display;

/// The state of a game as seen by the side to move.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum GameStatus {
    #[display(fmt = "in progress")]
    InProgress,

    /// The king of this side is attacked, but it has a way out.
    #[display(fmt = "the {_0} king is in check")]
    Check(Color),

    /// The king of this side is attacked and it has no legal move.
    #[display(fmt = "the {_0} king is checkmated")]
    Checkmate(Color),

    #[display(fmt = "stalemate")]
    Stalemate,
}

impl GameStatus {
    /// The status of a game where `side` is to move.
    pub fn evaluate(board: &mut Board, side: Color) -> Self {
        match (board.is_check(side), board.has_legal_moves(side)) {
            (false, true) => GameStatus::InProgress,
            (true, true) => GameStatus::Check(side),
            (true, false) => GameStatus::Checkmate(side),
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// Whether no more moves can be played.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }

    /// The winning side, if any.
    pub fn winner(&self) -> Option<Color> {
        match *self {
            GameStatus::Checkmate(c) => Some(!c),
            _ => None,
        }
    }
}
