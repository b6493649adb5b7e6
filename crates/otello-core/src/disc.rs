//! Player discs.

use std::fmt;
use std::ops::Not;

/// A player's disc color: Dark or Light.
///
/// Dark moves first and is printed as `x`; Light is printed as `o`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Disc {
    Dark = 0,
    Light = 1,
}

impl Disc {
    /// Total number of disc colors.
    pub const COUNT: usize = 2;

    /// Both colors in index order.
    pub const ALL: [Disc; 2] = [Disc::Dark, Disc::Light];

    /// Return the index (0 for Dark, 1 for Light).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposing color.
    #[inline]
    pub const fn opponent(self) -> Disc {
        match self {
            Disc::Dark => Disc::Light,
            Disc::Light => Disc::Dark,
        }
    }

    /// Return the notation character for this disc.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Disc::Dark => 'x',
            Disc::Light => 'o',
        }
    }

    /// Parse a notation character into a disc.
    pub const fn from_char(c: char) -> Option<Disc> {
        match c {
            'x' => Some(Disc::Dark),
            'o' => Some(Disc::Light),
            _ => None,
        }
    }
}

impl Not for Disc {
    type Output = Disc;

    #[inline]
    fn not(self) -> Disc {
        self.opponent()
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
