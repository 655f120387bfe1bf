//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of files and ranks.
pub const BOARD_LEN: i8 = 8;

/// A square on the board, represented as (file, rank).
///
/// Both coordinates are signed so that stepping off the edge stays
/// representable; check [`Square::is_on_board`] before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub i8, pub i8); // (file, rank)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(file: i8, rank: i8) -> Option<Self> {
        let sq = Square(file, rank);
        if sq.is_on_board() {
            Some(sq)
        } else {
            None
        }
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> i8 {
        self.0
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> i8 {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 >= 0 && self.0 < BOARD_LEN && self.1 >= 0 && self.1 < BOARD_LEN
    }

    /// The square `df` files and `dr` ranks away. May be off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, df: i8, dr: i8) -> Self {
        Square(self.0.saturating_add(df), self.1.saturating_add(dr))
    }

    /// Iterate over all 64 squares, file-major (a1, a2, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_LEN).flat_map(|file| (0..BOARD_LEN).map(move |rank| Square(file, rank)))
    }

    /// Array indices for an on-board square.
    #[inline]
    pub(crate) fn indices(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.0 as usize, self.1 as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (self.0 as u8 + b'a') as char, self.1 + 1)
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (i8, i8)) -> Result<Self, Self::Error> {
        if !(0..BOARD_LEN).contains(&file) {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if !(0..BOARD_LEN).contains(&rank) {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square(file, rank))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as i8,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => (b - b'1') as i8,
            _ => return Err(invalid()),
        };

        Ok(Square(file, rank))
    }
}
