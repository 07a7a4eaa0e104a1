use crate::chess::*;
use std::mem;
use tracing::{debug, instrument};

mod click;
mod history;
mod status;

pub use click::*;
pub use history::*;
pub use status::*;

#[cfg(test)]
use proptest::{prelude::*, sample::{Selector, SelectorStrategy}, strategy::Map};

#[cfg(test)]
use std::ops::Range;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
enum State {
    Idle,
    Selected(Selection),
    Promoting(MoveRecord),
}

/// A game of chess driven by clicks on the board.
///
/// Every interaction is a click on a [`Square`]: the first click selects one of
/// the pieces of the side to move, the second picks its destination. A pawn that
/// reaches the last rank waits for a promotion before the turn passes.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Game {
    board: Board,
    turn: Color,
    state: State,
    history: History,
    status: GameStatus,
    legal: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Arbitrary for Game {
    type Parameters = ();
    type Strategy = Map<(Range<usize>, SelectorStrategy), fn((usize, Selector)) -> Game>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..128, any::<Selector>()).prop_map(|(plies, selector)| {
            let mut game = Game::new();

            for _ in 0..plies {
                match selector.try_select(game.legal_moves()) {
                    None => break,
                    Some(m) => {
                        if let Click::PromotionPending(_) = game.play(m) {
                            game.resolve_promotion(selector.select(Promotion::ALL));
                        }
                    }
                }
            }

            game
        })
    }
}

impl Game {
    /// A game from the standard initial position, White to move.
    pub fn new() -> Self {
        Self::with_position(Board::default(), Color::White)
    }

    /// A game from an arbitrary position.
    ///
    /// # Panics
    ///
    /// Panics if either king is missing from the board.
    pub fn with_position(board: Board, turn: Color) -> Self {
        let mut game = Game {
            board,
            turn,
            state: State::Idle,
            history: History::default(),
            status: GameStatus::InProgress,
            legal: Vec::new(),
        };

        game.refresh();
        game
    }

    /// The current board.
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The status of the game as of the last completed move.
    #[inline(always)]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The completed moves.
    #[inline(always)]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The currently selected piece and its legal moves, if any.
    pub fn selection(&self) -> Option<&Selection> {
        match &self.state {
            State::Selected(s) => Some(s),
            _ => None,
        }
    }

    /// The square of the pawn awaiting a promotion, if any.
    pub fn promoting(&self) -> Option<Square> {
        match &self.state {
            State::Promoting(r) => Some(r.whither()),
            _ => None,
        }
    }

    /// All legal moves of the side to move.
    ///
    /// Empty while a promotion is pending.
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.state {
            State::Promoting(_) => Vec::new(),
            _ => self.legal.clone(),
        }
    }

    /// The legal moves of the piece on the given [`Square`], if it belongs to the side to move.
    pub fn legal_moves_from(&self, sq: Square) -> Moves {
        match (&self.state, self.board[sq]) {
            (State::Promoting(_), _) => Moves::new(),
            (_, Some(f)) if f.color() == self.turn => {
                self.legal.iter().filter(|m| m.figure() == f).copied().collect()
            }
            _ => Moves::new(),
        }
    }

    /// Drives the game by a click on the given [`Square`].
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn))]
    pub fn submit_click(&mut self, sq: Square) -> Click {
        if self.status.is_over() {
            return Click::GameOver(self.status);
        }

        match mem::replace(&mut self.state, State::Idle) {
            State::Promoting(pending) => {
                match Promotion::from_click(self.turn, pending.whither(), sq) {
                    Some(p) => self.promote(pending, p),
                    None => {
                        let whither = pending.whither();
                        self.state = State::Promoting(pending);
                        Click::PromotionPending(whither)
                    }
                }
            }

            State::Selected(s) => match (s.to(sq), self.board[sq]) {
                (Some(m), _) => self.play(m),
                (None, Some(f)) if f.color() == self.turn && f.id() != s.figure().id() => {
                    self.select(f)
                }
                _ => Click::Invalid,
            },

            State::Idle => match self.board[sq] {
                Some(f) if f.color() == self.turn => self.select(f),
                Some(_) => Click::WrongTurn,
                None => Click::Invalid,
            },
        }
    }

    /// Completes a pending promotion.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn))]
    pub fn resolve_promotion(&mut self, promotion: Promotion) -> Click {
        match mem::replace(&mut self.state, State::Idle) {
            State::Promoting(pending) => self.promote(pending, promotion),
            state => {
                self.state = state;
                Click::Invalid
            }
        }
    }

    /// Takes back the last move, or the pending promotion.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn))]
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = match mem::replace(&mut self.state, State::Idle) {
            State::Promoting(pending) => pending,
            _ => {
                let record = self.history.pop()?;
                self.turn = !self.turn;
                record
            }
        };

        self.board.undo(&record);
        self.refresh();
        debug!(%record, "move taken back");
        Some(record)
    }

    fn select(&mut self, figure: Figure) -> Click {
        let moves = self.legal_moves_from(figure.square());

        if moves.is_empty() {
            Click::Immobile(figure.square())
        } else {
            let selection = Selection::new(figure, moves);
            self.state = State::Selected(selection.clone());
            Click::Selected(selection)
        }
    }

    fn play(&mut self, m: Move) -> Click {
        let record = self.board.resolve(m, None);
        self.board.apply(&record);

        if m.is_promotion() {
            debug!(%record, "promotion pending");
            self.state = State::Promoting(record);
            Click::PromotionPending(m.whither())
        } else {
            self.complete(record)
        }
    }

    fn promote(&mut self, pending: MoveRecord, promotion: Promotion) -> Click {
        self.board.undo(&pending);
        let record = self.board.resolve(pending.as_move(), Some(promotion));
        self.board.apply(&record);
        self.complete(record)
    }

    fn complete(&mut self, record: MoveRecord) -> Click {
        self.history.push(record);
        self.turn = !self.turn;
        self.refresh();
        self.state = State::Idle;
        debug!(%record, status = %self.status, "move played");
        Click::Moved(record)
    }

    fn refresh(&mut self) {
        self.legal = self.board.legal_moves(self.turn);
        self.status = GameStatus::evaluate(&mut self.board, self.turn);
    }
}
