use crate::util::Integer;
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

/// Rook directions.
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Bishop directions.
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Queen directions and king steps.
pub(crate) const OMNIDIRECTIONAL: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Knight jumps.
pub(crate) const KNIGHT: [(i8, i8); 8] = [
    (-1, 2),
    (1, 2),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
    (-2, -1),
    (-2, 1),
];

/// How a [`Role`] travels along its directions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reach {
    /// Walks along each direction until blocked.
    Sliding(&'static [(i8, i8)]),
    /// Tests each offset exactly once.
    Stepping(&'static [(i8, i8)]),
    /// Bespoke pawn rules.
    Pawn,
}

/// The type of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    /// How this role moves, castling aside.
    #[inline(always)]
    pub fn reach(&self) -> Reach {
        match self {
            Role::Pawn => Reach::Pawn,
            Role::Knight => Reach::Stepping(&KNIGHT),
            Role::Bishop => Reach::Sliding(&DIAGONAL),
            Role::Rook => Reach::Sliding(&ORTHOGONAL),
            Role::Queen => Reach::Sliding(&OMNIDIRECTIONAL),
            Role::King => Reach::Stepping(&OMNIDIRECTIONAL),
        }
    }

    /// Whether this role attacks along orthogonal rays.
    #[inline(always)]
    pub fn slides_orthogonally(&self) -> bool {
        matches!(self, Role::Rook | Role::Queen)
    }

    /// Whether this role attacks along diagonal rays.
    #[inline(always)]
    pub fn slides_diagonally(&self) -> bool {
        matches!(self, Role::Bishop | Role::Queen)
    }
}

unsafe impl Integer for Role {
    type Repr = u8;
    const MIN: Self::Repr = Role::Pawn as _;
    const MAX: Self::Repr = Role::King as _;
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Role::Pawn => f.write_char('p'),
            Role::Knight => f.write_char('n'),
            Role::Bishop => f.write_char('b'),
            Role::Rook => f.write_char('r'),
            Role::Queen => f.write_char('q'),
            Role::King => f.write_char('k'),
        }
    }
}

/// The reason why parsing [`Role`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse role")]
pub struct ParseRoleError;

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" => Ok(Role::Pawn),
            "n" => Ok(Role::Knight),
            "b" => Ok(Role::Bishop),
            "r" => Ok(Role::Rook),
            "q" => Ok(Role::Queen),
            "k" => Ok(Role::King),
            _ => Err(ParseRoleError),
        }
    }
}
