use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SquareParseError;

/// A board coordinate. Row 0 is rank 8, column 0 is the a-file.
///
/// Ordering is by (row, column), so iterating a sorted set of squares walks
/// the board from a8 to h1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Constructor for coordinates known to be on the board.
    pub(crate) const fn at(row: u8, col: u8) -> Square {
        assert!(row < 8 && col < 8);
        Square { row, col }
    }

    pub(crate) fn from_index(idx: usize) -> Square {
        Square::at((idx / 8) as u8, (idx % 8) as u8)
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub(crate) fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Shift by (Δrow, Δcol). Leaving the board is a normal boundary, not an error.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = i16::from(self.row) + i16::from(d_row);
        let col = i16::from(self.col) + i16::from(d_col);
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::at(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn to_notation(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        format!("{file}{rank}")
    }

    /// All 64 squares, a8 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareParseError::Length(s.to_string()));
        };
        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareParseError::File(file));
        }
        if !('1'..='8').contains(&rank) {
            return Err(SquareParseError::Rank(rank));
        }
        let col = file as u8 - b'a';
        let row = b'8' - rank as u8;
        Ok(Square::at(row, col))
    }
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> String {
        sq.to_notation()
    }
}
