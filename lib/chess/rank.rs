use crate::chess::Perspective;
use crate::util::Integer;
use derive_more::{Display, Error};
use std::{fmt, ops::Sub, str::FromStr};

/// A row of the board, counted from White's side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

unsafe impl Integer for Rank {
    type Repr = i8;
    const MIN: Self::Repr = Rank::First as _;
    const MAX: Self::Repr = Rank::Eighth as _;
}

impl Rank {
    /// The digit naming this rank.
    #[inline(always)]
    pub fn digit(self) -> char {
        char::from(b'1' + self.get() as u8)
    }
}

/// The same row counted from Black's side.
impl Perspective for Rank {
    #[inline(always)]
    fn flip(&self) -> Self {
        Self::new(Self::MAX - self.get())
    }
}

/// The signed number of rows between two ranks.
impl Sub for Rank {
    type Output = i8;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.get() - rhs.get()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.digit(), f)
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse rank, expected a digit from `1` to `8`")]
pub struct ParseRankError;

impl TryFrom<char> for Rank {
    type Error = ParseRankError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '1'..='8' => Ok(Rank::new((c as u8 - b'1') as i8)),
            _ => Err(ParseRankError),
        }
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(ParseRankError),
        }
    }
}
