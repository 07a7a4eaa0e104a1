use crate::chess::*;
use tracing::instrument;

impl Figure {
    /// The moves this figure could make on the given board, disregarding
    /// whether they leave its own king attacked.
    #[instrument(level = "trace", skip(board))]
    pub fn moves(&self, board: &Board) -> Moves {
        let mut moves = Moves::new();

        match self.role().reach() {
            Reach::Sliding(directions) => {
                for &(df, dr) in directions {
                    for sq in self.square().ray(df, dr) {
                        match self.towards(board, sq) {
                            Some(m) => moves.push(m),
                            None => break,
                        }

                        if board[sq].is_some() {
                            break;
                        }
                    }
                }
            }

            Reach::Stepping(offsets) => {
                for &(df, dr) in offsets {
                    if let Some(sq) = self.square().offset(df, dr) {
                        moves.extend(self.towards(board, sq));
                    }
                }
            }

            Reach::Pawn => self.pawn_moves(board, &mut moves),
        }

        if self.role() == Role::King {
            self.castling_moves(board, &mut moves);
        }

        moves
    }

    /// A quiet move or a capture onto the square, unless a friendly piece stands there.
    fn towards(&self, board: &Board, sq: Square) -> Option<Move> {
        match board[sq] {
            None => Some(Move::new(*self, sq, Special::None)),
            Some(f) if f.color() != self.color() => Some(Move::new(*self, sq, Special::Capture)),
            Some(_) => None,
        }
    }

    fn pawn_moves(&self, board: &Board, moves: &mut Moves) {
        let side = self.color();
        let forward = side.forward();
        let whence = self.square();

        if let Some(one) = whence.offset(0, forward).filter(|&sq| board.is_empty(sq)) {
            moves.push(Move::new(*self, one, Special::None));

            if whence.rank() == side.pawn_rank() {
                if let Some(two) = one.offset(0, forward).filter(|&sq| board.is_empty(sq)) {
                    moves.push(Move::new(*self, two, Special::None));
                }
            }
        }

        for df in [-1, 1] {
            let Some(sq) = whence.offset(df, forward) else {
                continue;
            };

            match board[sq] {
                Some(f) if f.color() != side => moves.push(Move::new(*self, sq, Special::Capture)),
                Some(_) => {}
                None if board.en_passant() == Some(sq) => {
                    let victim = Square::new(sq.file(), whence.rank());
                    if board.piece_on(victim) == Some(Piece::new(Role::Pawn, !side)) {
                        moves.push(Move::new(*self, sq, Special::EnPassant));
                    }
                }
                None => {}
            }
        }
    }

    /// Castling moves whose rights are held and whose path is clear.
    ///
    /// Whether the king crosses attacked squares is left to the legality check.
    fn castling_moves(&self, board: &Board, moves: &mut Moves) {
        let side = self.color();
        if self.square() != Square::E1.perspective(side) {
            return;
        }

        let rook = Piece::new(Role::Rook, side);
        let castles = board.castles();

        let options: [(Option<Square>, Square, &[Square], Special); 2] = [
            (
                castles.short(side),
                Square::H1,
                &[Square::F1, Square::G1],
                Special::CastleKingside,
            ),
            (
                castles.long(side),
                Square::A1,
                &[Square::D1, Square::C1, Square::B1],
                Special::CastleQueenside,
            ),
        ];

        for (whither, corner, path, special) in options {
            let Some(whither) = whither else {
                continue;
            };

            if board.piece_on(corner.perspective(side)) == Some(rook)
                && path.iter().all(|sq| board.is_empty(sq.perspective(side)))
            {
                moves.push(Move::new(*self, whither, special));
            }
        }
    }
}
