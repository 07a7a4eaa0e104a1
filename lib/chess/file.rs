use crate::util::Integer;
use derive_more::{Display, Error};
use std::{fmt, ops::Sub, str::FromStr};

/// A column of the board, from `a` on White's left to `h` on White's right.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

unsafe impl Integer for File {
    type Repr = i8;
    const MIN: Self::Repr = File::A as _;
    const MAX: Self::Repr = File::H as _;
}

impl File {
    /// The letter naming this file.
    #[inline(always)]
    pub fn letter(self) -> char {
        char::from(b'a' + self.get() as u8)
    }
}

/// The signed number of columns between two files.
impl Sub for File {
    type Output = i8;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.get() - rhs.get()
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.letter(), f)
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse file, expected a letter from `a` to `h`")]
pub struct ParseFileError;

impl TryFrom<char> for File {
    type Error = ParseFileError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'a'..='h' => Ok(File::new((c as u8 - b'a') as i8)),
            _ => Err(ParseFileError),
        }
    }
}

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(ParseFileError),
        }
    }
}
