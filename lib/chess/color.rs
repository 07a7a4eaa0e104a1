use crate::chess::{Perspective, Rank};
use crate::util::Integer;
use derive_more::Display;
use std::ops::Not;

/// The color of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    /// The direction pawns of this color advance along the rank axis.
    #[inline(always)]
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The [`Rank`] this color's pawns start on.
    #[inline(always)]
    pub fn pawn_rank(&self) -> Rank {
        Rank::Second.perspective(*self)
    }

    /// The [`Rank`] this color's pawns promote on.
    #[inline(always)]
    pub fn promotion_rank(&self) -> Rank {
        Rank::Eighth.perspective(*self)
    }
}

unsafe impl Integer for Color {
    type Repr = u8;
    const MIN: Self::Repr = Color::White as _;
    const MAX: Self::Repr = Color::Black as _;
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn color_implements_not_operator(c: Color) {
        assert_eq!(!!c, c);
        assert_ne!(!c, c);
    }

    #[test]
    fn white_advances_toward_the_eighth_rank() {
        assert_eq!(Color::White.forward(), 1);
        assert_eq!(Color::White.pawn_rank(), Rank::Second);
        assert_eq!(Color::White.promotion_rank(), Rank::Eighth);
    }

    #[test]
    fn black_advances_toward_the_first_rank() {
        assert_eq!(Color::Black.forward(), -1);
        assert_eq!(Color::Black.pawn_rank(), Rank::Seventh);
        assert_eq!(Color::Black.promotion_rank(), Rank::First);
    }

    #[proptest]
    fn pawns_advance_from_their_start_rank_toward_their_promotion_rank(c: Color) {
        let distance = c.promotion_rank() - c.pawn_rank();
        assert_eq!(distance, 6 * c.forward());
    }
}
