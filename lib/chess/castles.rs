use crate::chess::{Color, Perspective, Piece, Role, Square};
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// The castling rights on a chess [`Board`][`crate::chess::Board`].
    ///
    /// Rights are only ever lost during play; undoing a move is the only way to get them back.
    #[derive(Default)]
    pub struct Castles: u8 {
        const WHITE_SHORT = 0b0001;
        const WHITE_LONG =  0b0010;
        const BLACK_SHORT = 0b0100;
        const BLACK_LONG =  0b1000;
    }
}

impl Castles {
    /// Both rights of the given side.
    #[inline(always)]
    pub fn side(side: Color) -> Self {
        match side {
            Color::White => Castles::WHITE_SHORT | Castles::WHITE_LONG,
            Color::Black => Castles::BLACK_SHORT | Castles::BLACK_LONG,
        }
    }

    /// Whether the given side has kingside castling rights.
    #[inline(always)]
    pub fn has_short(&self, side: Color) -> bool {
        self.intersects(Castles::from(Square::H1.perspective(side)))
    }

    /// Whether the given side has queenside castling rights.
    #[inline(always)]
    pub fn has_long(&self, side: Color) -> bool {
        self.intersects(Castles::from(Square::A1.perspective(side)))
    }

    /// The kingside castling square, if side has the rights.
    #[inline(always)]
    pub fn short(&self, side: Color) -> Option<Square> {
        if self.has_short(side) {
            Some(Square::G1.perspective(side))
        } else {
            None
        }
    }

    /// The queenside castling square, if side has the rights.
    #[inline(always)]
    pub fn long(&self, side: Color) -> Option<Square> {
        if self.has_long(side) {
            Some(Square::C1.perspective(side))
        } else {
            None
        }
    }
}

/// The rights that depend on the piece standing on a [`Square`].
///
/// Any move that starts or ends on one of these squares forfeits them.
impl From<Square> for Castles {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        match sq {
            Square::A1 => Castles::WHITE_LONG,
            Square::H1 => Castles::WHITE_SHORT,
            Square::E1 => Castles::side(Color::White),
            Square::A8 => Castles::BLACK_LONG,
            Square::H8 => Castles::BLACK_SHORT,
            Square::E8 => Castles::side(Color::Black),
            _ => Castles::empty(),
        }
    }
}

impl fmt::Display for Castles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }

        for side in [Color::White, Color::Black] {
            if self.has_short(side) {
                fmt::Display::fmt(&Piece::new(Role::King, side), f)?;
            }

            if self.has_long(side) {
                fmt::Display::fmt(&Piece::new(Role::Queen, side), f)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Castles {
    type Parameters = ();
    type Strategy = proptest::strategy::Map<std::ops::RangeInclusive<u8>, fn(u8) -> Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::strategy::Strategy;
        (0..=0b1111u8).prop_map(Castles::from_bits_truncate as fn(u8) -> Self)
    }
}
