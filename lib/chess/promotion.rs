use crate::chess::{Color, Role, Square};
use derive_more::{Display, Error};
use std::str::FromStr;

/// A promotion specifier.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Promotion {
    #[display(fmt = "n")]
    Knight,
    #[display(fmt = "b")]
    Bishop,
    #[display(fmt = "r")]
    Rook,
    #[display(fmt = "q")]
    Queen,
}

impl Promotion {
    /// All promotion specifiers, in the order they are offered on the board.
    pub const ALL: [Promotion; 4] = [
        Promotion::Queen,
        Promotion::Knight,
        Promotion::Rook,
        Promotion::Bishop,
    ];

    /// The [`Role`] the pawn is promoted to.
    #[inline(always)]
    pub fn role(&self) -> Role {
        match self {
            Promotion::Knight => Role::Knight,
            Promotion::Bishop => Role::Bishop,
            Promotion::Rook => Role::Rook,
            Promotion::Queen => Role::Queen,
        }
    }

    /// The promotion offered on `clicked` to a pawn of `side` promoting on `whither`.
    ///
    /// The choices line up along the promotion file, starting on the promotion
    /// square itself and moving back toward `side`'s home rank.
    pub fn from_click(side: Color, whither: Square, clicked: Square) -> Option<Self> {
        if clicked.file() != whither.file() {
            return None;
        }

        let distance = (whither.rank() - clicked.rank()) * side.forward();
        match distance {
            0..=3 => Some(Promotion::ALL[distance as usize]),
            _ => None,
        }
    }
}

/// The reason why parsing [`Promotion`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse promotion, expected one of `q`, `r`, `b`, `n`")]
pub struct ParsePromotionError;

impl FromStr for Promotion {
    type Err = ParsePromotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &*s.trim().to_ascii_lowercase() {
            "n" | "knight" => Ok(Promotion::Knight),
            "b" | "bishop" => Ok(Promotion::Bishop),
            "r" | "rook" => Ok(Promotion::Rook),
            "q" | "queen" => Ok(Promotion::Queen),
            _ => Err(ParsePromotionError),
        }
    }
}
