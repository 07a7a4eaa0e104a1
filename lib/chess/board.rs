use super::role::{DIAGONAL, KNIGHT, OMNIDIRECTIONAL, ORTHOGONAL};
use crate::chess::*;
use crate::util::Integer;
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::ops::Index;

/// The reason why a piece could not be placed on the [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "square `{_0}` is already occupied")]
pub struct CellOccupied(#[error(not(source))] pub Square);

/// A broken [`Board`] invariant.
///
/// These never result from user input, they indicate a corrupted board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum InvariantViolation {
    #[display(fmt = "expected the {_0} king on the board")]
    MissingKing(#[error(not(source))] Color),

    #[display(fmt = "expected figure `{_0}` on square `{_1}`")]
    MissingFigure(FigureId, Square),

    #[display(fmt = "expected a {_0} rook on square `{_1}`")]
    MissingRook(Color, Square),

    #[display(fmt = "expected square `{_0}` to be empty")]
    UnexpectedFigure(#[error(not(source))] Square),
}

/// The chess board.
///
/// Owns the [`Figure`]s placed on it, the castling rights and the en passant square.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [[Option<Figure>; 8]; 8],
    castles: Castles,
    en_passant: Option<Square>,
    placed: u8,
}

impl Default for Board {
    /// The standard initial position.
    fn default() -> Self {
        use Role::*;

        let mut board = Board::empty().with_castles(Castles::all());

        for side in [Color::White, Color::Black] {
            let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
            for (f, r) in File::iter().zip(back) {
                let home = Rank::First.perspective(side);
                board.spawn(Piece::new(r, side), Square::new(f, home));
            }

            for f in File::iter() {
                board.spawn(Piece::new(Pawn, side), Square::new(f, side.pawn_rank()));
            }
        }

        board
    }
}

impl Board {
    /// A board with no pieces and no castling rights.
    pub fn empty() -> Self {
        Board {
            squares: Default::default(),
            castles: Castles::empty(),
            en_passant: None,
            placed: 0,
        }
    }

    /// A board holding the given pieces, without castling rights.
    pub fn setup<I>(pieces: I) -> Result<Self, CellOccupied>
    where
        I: IntoIterator<Item = (Piece, Square)>,
    {
        let mut board = Board::empty();
        for (p, sq) in pieces {
            board.place(p, sq)?;
        }

        Ok(board)
    }

    /// Places a new [`Figure`] on an empty square.
    pub fn place(&mut self, piece: Piece, sq: Square) -> Result<Figure, CellOccupied> {
        if self.is_empty(sq) {
            Ok(self.spawn(piece, sq))
        } else {
            Err(CellOccupied(sq))
        }
    }

    /// Replaces the castling rights.
    pub fn with_castles(mut self, castles: Castles) -> Self {
        self.castles = castles;
        self
    }

    /// Replaces the en passant square.
    pub fn with_en_passant(mut self, en_passant: Option<Square>) -> Self {
        self.en_passant = en_passant;
        self
    }

    /// The castling rights.
    #[inline(always)]
    pub fn castles(&self) -> Castles {
        self.castles
    }

    /// The square skipped over by a pawn's double step on the previous move, if any.
    #[inline(always)]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// The occupancy grid, indexed by rank then file.
    #[inline(always)]
    pub fn grid(&self) -> &[[Option<Figure>; 8]; 8] {
        &self.squares
    }

    /// An iterator over all [`Figure`]s on the board.
    #[inline(always)]
    pub fn figures(&self) -> impl Iterator<Item = Figure> + '_ {
        self.squares.iter().flatten().flatten().copied()
    }

    /// An iterator over the [`Figure`]s of one side.
    #[inline(always)]
    pub fn figures_of(&self, side: Color) -> impl Iterator<Item = Figure> + '_ {
        self.figures().filter(move |f| f.color() == side)
    }

    /// The [`Piece`] on the given [`Square`], if any.
    #[inline(always)]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self[sq].map(|f| f.piece())
    }

    /// Whether the given [`Square`] is empty.
    #[inline(always)]
    pub fn is_empty(&self, sq: Square) -> bool {
        self[sq].is_none()
    }

    /// Whether the coordinates `(x, y)` fall on the board.
    #[inline(always)]
    pub fn is_inside(&self, x: i8, y: i8) -> bool {
        Square::from_coords(x, y).is_some()
    }

    /// [`Square`] occupied by the king of the given side.
    ///
    /// # Panics
    ///
    /// Panics if that king is missing, which no sequence of moves can bring about.
    pub fn king(&self, side: Color) -> Square {
        let king = Piece::new(Role::King, side);
        match self.figures().find(|f| f.piece() == king) {
            Some(f) => f.square(),
            None => panic!("{}", InvariantViolation::MissingKing(side)),
        }
    }

    /// Whether any piece of the given [`Color`] attacks the [`Square`].
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let is = |s: Option<Square>, r: Role| {
            s.and_then(|s| self.piece_on(s)) == Some(Piece::new(r, by))
        };

        let slides = |directions: &[(i8, i8)], hits: fn(&Role) -> bool| {
            directions.iter().any(|&(df, dr)| {
                sq.ray(df, dr)
                    .find_map(|s| self[s])
                    .is_some_and(|f| f.color() == by && hits(&f.role()))
            })
        };

        slides(&ORTHOGONAL, Role::slides_orthogonally)
            || slides(&DIAGONAL, Role::slides_diagonally)
            || KNIGHT.iter().any(|&(df, dr)| is(sq.offset(df, dr), Role::Knight))
            || OMNIDIRECTIONAL.iter().any(|&(df, dr)| is(sq.offset(df, dr), Role::King))
            || [-1, 1].iter().any(|&df| is(sq.offset(df, -by.forward()), Role::Pawn))
    }

    /// Whether the king of the given side is attacked.
    #[inline(always)]
    pub fn is_check(&self, side: Color) -> bool {
        self.is_square_attacked(self.king(side), !side)
    }

    /// Resolves a [`Move`] against this board, optionally promoting the moving pawn.
    ///
    /// # Panics
    ///
    /// Panics if the move castles with a rook that is missing from its corner.
    pub fn resolve(&self, m: Move, promotion: Option<Promotion>) -> MoveRecord {
        debug_assert!(promotion.is_none() || m.is_promotion());

        let figure = m.figure();
        let side = figure.color();

        let (capture, castling) = match m.special() {
            Special::None | Special::Capture => (self[m.whither()], None),

            Special::EnPassant => {
                let victim = Square::new(m.whither().file(), m.whence().rank());
                (self[victim], None)
            }

            Special::CastleKingside => {
                let rook = self.rook(side, Square::H1.perspective(side));
                (None, Some((rook, Square::F1.perspective(side))))
            }

            Special::CastleQueenside => {
                let rook = self.rook(side, Square::A1.perspective(side));
                (None, Some((rook, Square::D1.perspective(side))))
            }
        };

        let promotion = promotion.map(|p| {
            let piece = Piece::new(p.role(), side);
            Figure::new(FigureId::from(self.placed), piece, m.whither())
        });

        MoveRecord {
            figure,
            whither: m.whither(),
            special: m.special(),
            capture,
            castling,
            promotion,
            castles: self.castles,
            en_passant: self.en_passant,
        }
    }

    /// Plays a resolved move.
    ///
    /// # Panics
    ///
    /// Panics, without modifying the board, if the record does not match the board.
    pub fn apply(&mut self, r: &MoveRecord) {
        self.verify(r.figure);

        if let Some(victim) = r.capture {
            self.verify(victim);
        }

        if r.capture.map(|v| v.square()) != Some(r.whither) {
            self.vacant(r.whither);
        }

        if let Some((rook, whither)) = r.castling {
            self.verify(rook);
            self.vacant(whither);
        }

        if let Some(victim) = r.capture {
            self.take(victim.square());
        }

        self.take(r.whence());
        self.put(r.promotion.unwrap_or(r.figure).on(r.whither));

        if let Some((rook, whither)) = r.castling {
            self.take(rook.square());
            self.put(rook.on(whither));
        }

        if r.promotion.is_some() {
            self.placed += 1;
        }

        self.castles &= !(Castles::from(r.whence()) | Castles::from(r.whither));

        self.en_passant = match r.figure.role() {
            Role::Pawn if (r.whither.rank() - r.whence().rank()).abs() == 2 => {
                r.whence().offset(0, r.figure.color().forward())
            }

            _ => None,
        };
    }

    /// Takes back a move previously played with [`Board::apply`].
    ///
    /// # Panics
    ///
    /// Panics, without modifying the board, if the record does not match the board.
    pub fn undo(&mut self, r: &MoveRecord) {
        self.verify(r.promotion.unwrap_or(r.figure).on(r.whither));
        self.vacant(r.whence());

        if let Some(victim) = r.capture.filter(|v| v.square() != r.whither) {
            self.vacant(victim.square());
        }

        if let Some((rook, whither)) = r.castling {
            self.verify(rook.on(whither));
            self.vacant(rook.square());
        }

        if let Some((rook, whither)) = r.castling {
            self.take(whither);
            self.put(rook);
        }

        self.take(r.whither);
        self.put(r.figure);

        if let Some(victim) = r.capture {
            self.put(victim);
        }

        if r.promotion.is_some() {
            self.placed -= 1;
        }

        self.castles = r.castles;
        self.en_passant = r.en_passant;
    }

    fn spawn(&mut self, piece: Piece, sq: Square) -> Figure {
        let figure = Figure::new(FigureId::from(self.placed), piece, sq);
        self.placed += 1;
        self.put(figure);
        figure
    }

    fn rook(&self, side: Color, sq: Square) -> Figure {
        match self[sq] {
            Some(f) if f.piece() == Piece::new(Role::Rook, side) => f,
            _ => panic!("{}", InvariantViolation::MissingRook(side, sq)),
        }
    }

    fn verify(&self, figure: Figure) {
        let sq = figure.square();
        if self[sq].map(|f| f.id()) != Some(figure.id()) {
            panic!("{}", InvariantViolation::MissingFigure(figure.id(), sq));
        }
    }

    fn vacant(&self, sq: Square) {
        if !self.is_empty(sq) {
            panic!("{}", InvariantViolation::UnexpectedFigure(sq));
        }
    }

    fn cell(&mut self, sq: Square) -> &mut Option<Figure> {
        &mut self.squares[sq.rank().get() as usize][sq.file().get() as usize]
    }

    fn take(&mut self, sq: Square) {
        *self.cell(sq) = None;
    }

    fn put(&mut self, figure: Figure) {
        self.vacant(figure.square());
        *self.cell(figure.square()) = Some(figure);
    }
}

/// Retrieves the [`Figure`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Figure>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.rank().get() as usize][sq.file().get() as usize]
    }
}

/// One line per rank, eighth rank first, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.squares.iter().rev().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }

            for cell in row {
                match cell {
                    Some(figure) => fmt::Display::fmt(&figure.piece(), f)?,
                    None => f.write_char('.')?,
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use proptest::{prelude::*, sample::Selector};
    use std::collections::HashSet;
    use std::panic::{self, AssertUnwindSafe};
    use test_strategy::proptest;

    #[test]
    fn default_board_is_the_standard_initial_position() {
        assert_eq!(
            Board::default().to_string(),
            [
                "rnbqkbnr", "pppppppp", "........", "........", "........", "........",
                "PPPPPPPP", "RNBQKBNR",
            ]
            .join("\n")
        );

        assert_eq!(Board::default().castles(), Castles::all());
        assert_eq!(Board::default().en_passant(), None);
    }

    #[test]
    fn kings_start_on_the_e_file() {
        assert_eq!(Board::default().king(Color::White), Square::E1);
        assert_eq!(Board::default().king(Color::Black), Square::E8);
    }

    #[proptest]
    fn every_figure_stands_where_the_grid_holds_it(g: Game) {
        let board = g.board();
        for f in board.figures() {
            assert_eq!(board[f.square()], Some(f));
        }
    }

    #[proptest]
    fn figures_are_distinct_entities(g: Game) {
        let ids: HashSet<_> = g.board().figures().map(|f| f.id()).collect();
        assert_eq!(ids.len(), g.board().figures().count());
    }

    #[proptest]
    fn there_is_exactly_one_king_per_side(g: Game, c: Color) {
        let king = Piece::new(Role::King, c);
        assert_eq!(g.board().figures().filter(|f| f.piece() == king).count(), 1);
    }

    #[proptest]
    fn placing_on_an_occupied_square_fails(p: Piece, q: Piece, sq: Square) {
        let mut board = Board::empty();
        let figure = board.place(p, sq).unwrap();
        assert_eq!(board.place(q, sq), Err(CellOccupied(sq)));
        assert_eq!(board[sq], Some(figure));
    }

    #[proptest]
    fn setup_places_every_piece(p: Piece, a: Square, q: Piece, #[filter(#a != #b)] b: Square) {
        let board = Board::setup([(p, a), (q, b)]).unwrap();
        assert_eq!(board.piece_on(a), Some(p));
        assert_eq!(board.piece_on(b), Some(q));
        assert_eq!(board.figures().count(), 2);
    }

    #[proptest]
    fn setup_fails_if_two_pieces_share_a_square(p: Piece, q: Piece, sq: Square) {
        assert_eq!(Board::setup([(p, sq), (q, sq)]), Err(CellOccupied(sq)));
    }

    #[proptest]
    fn is_inside_accepts_only_coordinates_on_the_board(
        #[strategy(-16i8..16)] x: i8,
        #[strategy(-16i8..16)] y: i8,
    ) {
        let board = Board::empty();
        assert_eq!(board.is_inside(x, y), (0..8).contains(&x) && (0..8).contains(&y));
    }

    #[test]
    #[should_panic(expected = "expected the black king on the board")]
    fn king_panics_if_missing() {
        let board = Board::setup([(Piece::WhiteKing, Square::E1)]).unwrap();
        board.king(Color::Black);
    }

    #[proptest]
    fn applying_then_undoing_a_legal_move_restores_the_board(
        g: Game,
        #[strategy(proptest::option::of(any::<Promotion>()))] p: Option<Promotion>,
        selector: Selector,
    ) {
        let moves = g.legal_moves();
        let m = selector.try_select(moves);
        prop_assume!(m.is_some());
        let m = m.unwrap();

        let before = g.board().clone();
        let record = before.resolve(m, p.filter(|_| m.is_promotion()));

        let mut board = before.clone();
        board.apply(&record);
        assert_ne!(board, before);
        board.undo(&record);
        assert_eq!(board, before);
    }

    #[proptest]
    fn legal_moves_never_leave_the_king_attacked(g: Game, selector: Selector) {
        let moves = g.legal_moves();
        let m = selector.try_select(moves);
        prop_assume!(m.is_some());
        let m = m.unwrap();

        let mut board = g.board().clone();
        board.apply(&board.resolve(m, None));
        assert!(!board.is_check(m.figure().color()));
    }

    #[proptest]
    fn castling_rights_never_grow_during_play(g: Game, selector: Selector) {
        let moves = g.legal_moves();
        let m = selector.try_select(moves);
        prop_assume!(m.is_some());
        let m = m.unwrap();

        let mut board = g.board().clone();
        let before = board.castles();
        board.apply(&board.resolve(m, None));
        assert!(before.contains(board.castles()));
    }

    #[test]
    fn en_passant_square_is_set_by_a_double_step_only() {
        let mut board = Board::default();
        let pawn = board[Square::E2].unwrap();

        let record = board.resolve(Move::new(pawn, Square::E4, Special::None), None);
        board.apply(&record);
        assert_eq!(board.en_passant(), Some(Square::E3));

        let knight = board[Square::G8].unwrap();
        board.apply(&board.resolve(Move::new(knight, Square::F6, Special::None), None));
        assert_eq!(board.en_passant(), None);
    }

    #[test]
    fn capture_removes_the_victim_and_undo_restores_it() {
        use Square::*;
        let mut board = Board::setup([
            (Piece::WhiteKing, E1),
            (Piece::BlackKing, E8),
            (Piece::WhiteRook, A1),
            (Piece::BlackKnight, A6),
        ])
        .unwrap();

        let before = board.clone();
        let rook = board[A1].unwrap();
        let knight = board[A6].unwrap();

        let record = board.resolve(Move::new(rook, A6, Special::Capture), None);
        assert_eq!(record.capture(), Some(knight));
        assert_eq!(record.captured_square(), Some(A6));

        board.apply(&record);
        assert_eq!(board[A6], Some(rook.on(A6)));
        assert_eq!(board.figures().count(), 3);

        board.undo(&record);
        assert_eq!(board, before);
    }

    #[test]
    fn castling_relocates_the_rook_and_forfeits_the_rights_of_that_side() {
        use Square::*;
        let mut board = Board::setup([
            (Piece::WhiteKing, E1),
            (Piece::WhiteRook, H1),
            (Piece::WhiteRook, A1),
            (Piece::BlackKing, E8),
        ])
        .unwrap()
        .with_castles(Castles::all());

        let king = board[E1].unwrap();
        let rook = board[H1].unwrap();
        let before = board.clone();

        let record = board.resolve(Move::new(king, G1, Special::CastleKingside), None);
        assert_eq!(record.castling(), Some((rook, F1)));

        board.apply(&record);
        assert_eq!(board.piece_on(G1), Some(Piece::WhiteKing));
        assert_eq!(board.piece_on(F1), Some(Piece::WhiteRook));
        assert_eq!(board.piece_on(H1), None);
        assert_eq!(board.castles(), Castles::side(Color::Black));

        board.undo(&record);
        assert_eq!(board, before);
    }

    #[test]
    fn moving_a_rook_forfeits_only_its_own_right() {
        use Square::*;
        let mut board = Board::setup([
            (Piece::WhiteKing, E1),
            (Piece::WhiteRook, H1),
            (Piece::WhiteRook, A1),
            (Piece::BlackKing, E8),
        ])
        .unwrap()
        .with_castles(Castles::all());

        let rook = board[A1].unwrap();
        board.apply(&board.resolve(Move::new(rook, A5, Special::None), None));
        assert_eq!(board.castles(), Castles::all() - Castles::WHITE_LONG);
    }

    #[test]
    fn capturing_a_rook_in_its_corner_forfeits_its_right() {
        use Square::*;
        let mut board = Board::setup([
            (Piece::WhiteKing, E1),
            (Piece::WhiteBishop, B7),
            (Piece::BlackRook, A8),
            (Piece::BlackKing, E8),
        ])
        .unwrap()
        .with_castles(Castles::BLACK_LONG | Castles::BLACK_SHORT);

        let bishop = board[B7].unwrap();
        board.apply(&board.resolve(Move::new(bishop, A8, Special::Capture), None));
        assert_eq!(board.castles(), Castles::BLACK_SHORT);
    }

    #[test]
    fn promotion_retires_the_pawn_and_undo_reinstates_it() {
        use Square::*;
        let mut board = Board::setup([
            (Piece::WhiteKing, E1),
            (Piece::WhitePawn, B7),
            (Piece::BlackKing, E8),
        ])
        .unwrap();

        let before = board.clone();
        let pawn = board[B7].unwrap();

        let record = board.resolve(Move::new(pawn, B8, Special::None), Some(Promotion::Queen));
        board.apply(&record);

        let queen = board[B8].unwrap();
        assert_eq!(queen.piece(), Piece::WhiteQueen);
        assert_ne!(queen.id(), pawn.id());
        assert!(board.figures().all(|f| f.id() != pawn.id()));

        board.undo(&record);
        assert_eq!(board, before);
    }

    #[test]
    fn en_passant_removes_the_pawn_beside_the_capturer() {
        use Square::*;
        let mut board = Board::setup([
            (Piece::WhiteKing, E1),
            (Piece::WhitePawn, E5),
            (Piece::BlackPawn, D5),
            (Piece::BlackKing, E8),
        ])
        .unwrap()
        .with_en_passant(Some(D6));

        let before = board.clone();
        let pawn = board[E5].unwrap();
        let victim = board[D5].unwrap();

        let record = board.resolve(Move::new(pawn, D6, Special::EnPassant), None);
        assert_eq!(record.capture(), Some(victim));

        board.apply(&record);
        assert_eq!(board.piece_on(D5), None);
        assert_eq!(board.piece_on(D6), Some(Piece::WhitePawn));

        board.undo(&record);
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "expected figure")]
    fn undo_panics_if_the_moved_figure_is_missing() {
        let mut board = Board::default();
        let pawn = board[Square::E2].unwrap();
        let record = board.resolve(Move::new(pawn, Square::E4, Special::None), None);
        board.undo(&record);
    }

    #[test]
    fn apply_leaves_the_board_untouched_if_the_record_does_not_match() {
        let mut board = Board::default();
        let pawn = board[Square::E2].unwrap();
        let record = board.resolve(Move::new(pawn, Square::E4, Special::None), None);
        board.apply(&record);

        let before = board.clone();
        let result = panic::catch_unwind(AssertUnwindSafe(|| board.apply(&record)));

        assert!(result.is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn apply_leaves_the_board_untouched_if_the_destination_is_taken() {
        use Square::*;
        let mut board = Board::setup([
            (Piece::WhiteKing, E1),
            (Piece::WhiteRook, A1),
            (Piece::BlackKing, E8),
        ])
        .unwrap();

        let rook = board[A1].unwrap();
        let record = board.resolve(Move::new(rook, A6, Special::None), None);
        board.place(Piece::BlackKnight, A6).unwrap();

        let before = board.clone();
        let result = panic::catch_unwind(AssertUnwindSafe(|| board.apply(&record)));

        assert!(result.is_err());
        assert_eq!(board, before);
        assert_eq!(board.piece_on(A1), Some(Piece::WhiteRook));
        assert_eq!(board.piece_on(A6), Some(Piece::BlackKnight));
    }

    #[test]
    #[should_panic(expected = "expected square `f1` to be empty")]
    fn apply_panics_if_the_castling_rook_has_nowhere_to_land() {
        use Square::*;
        let mut board = Board::setup([
            (Piece::WhiteKing, E1),
            (Piece::WhiteRook, H1),
            (Piece::BlackKing, E8),
        ])
        .unwrap()
        .with_castles(Castles::WHITE_SHORT);

        let king = board[E1].unwrap();
        let record = board.resolve(Move::new(king, G1, Special::CastleKingside), None);
        board.place(Piece::WhiteBishop, F1).unwrap();
        board.apply(&record);
    }

    #[test]
    fn undo_leaves_the_board_untouched_if_the_origin_is_taken() {
        use Square::*;
        let mut board = Board::default();
        let pawn = board[E2].unwrap();
        let record = board.resolve(Move::new(pawn, E4, Special::None), None);
        board.apply(&record);
        board.place(Piece::BlackKnight, E2).unwrap();

        let before = board.clone();
        let result = panic::catch_unwind(AssertUnwindSafe(|| board.undo(&record)));

        assert!(result.is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn undo_leaves_the_board_untouched_if_the_captured_square_is_taken() {
        use Square::*;
        let mut board = Board::setup([
            (Piece::WhiteKing, E1),
            (Piece::WhitePawn, E5),
            (Piece::BlackPawn, D5),
            (Piece::BlackKing, E8),
        ])
        .unwrap()
        .with_en_passant(Some(D6));

        let pawn = board[E5].unwrap();
        let record = board.resolve(Move::new(pawn, D6, Special::EnPassant), None);
        board.apply(&record);
        board.place(Piece::BlackRook, D5).unwrap();

        let before = board.clone();
        let result = panic::catch_unwind(AssertUnwindSafe(|| board.undo(&record)));

        assert!(result.is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn square_attacked_by_sliders_stops_at_the_first_blocker() {
        use Square::*;
        let board = Board::setup([
            (Piece::WhiteKing, A1),
            (Piece::BlackKing, H8),
            (Piece::WhiteRook, D1),
            (Piece::BlackPawn, D5),
            (Piece::WhiteBishop, H3),
        ])
        .unwrap();

        assert!(board.is_square_attacked(D4, Color::White));
        assert!(board.is_square_attacked(D5, Color::White));
        assert!(!board.is_square_attacked(D6, Color::White));
        assert!(board.is_square_attacked(F5, Color::White));
        assert!(board.is_square_attacked(C8, Color::White));
    }

    #[test]
    fn pawns_attack_diagonally_forward_only() {
        use Square::*;
        let board = Board::setup([
            (Piece::WhiteKing, A1),
            (Piece::BlackKing, H8),
            (Piece::WhitePawn, D4),
            (Piece::BlackPawn, D6),
        ])
        .unwrap();

        assert!(board.is_square_attacked(C5, Color::White));
        assert!(board.is_square_attacked(E5, Color::White));
        assert!(!board.is_square_attacked(D5, Color::White));
        assert!(!board.is_square_attacked(C3, Color::White));

        assert!(board.is_square_attacked(C5, Color::Black));
        assert!(board.is_square_attacked(E5, Color::Black));
        assert!(!board.is_square_attacked(C7, Color::Black));
    }

    #[test]
    fn knights_and_kings_attack_their_neighborhoods() {
        use Square::*;
        let board = Board::setup([
            (Piece::WhiteKing, A1),
            (Piece::BlackKing, H8),
            (Piece::WhiteKnight, D4),
        ])
        .unwrap();

        for sq in [C2, E2, B3, F3, B5, F5, C6, E6] {
            assert!(board.is_square_attacked(sq, Color::White));
        }

        assert!(!board.is_square_attacked(D5, Color::White));
        assert!(board.is_square_attacked(A2, Color::White));
        assert!(board.is_square_attacked(G7, Color::Black));
    }

    #[proptest]
    fn square_attacked_agrees_with_move_generation(g: Game, c: Color, selector: Selector) {
        let board = g.board();
        let sq = selector.select(board.figures_of(!c)).square();

        let capturable = board
            .figures_of(c)
            .flat_map(|f| f.moves(board))
            .any(|m| m.whither() == sq && m.special() == Special::Capture);

        assert_eq!(board.is_square_attacked(sq, c), capturable);
    }
}
