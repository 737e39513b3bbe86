//! Grid coordinates and their human-readable `"B5"` form.

use core::fmt;
use core::str::FromStr;

/// A single cell on the grid, zero-based row and column.
///
/// Equality and hashing are structural over the two indices so coordinates
/// can be used directly as set and map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    /// Create a coordinate from zero-based row and column indices.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    /// Row index as a letter from `A`, column index as a 1-based number.
    /// Rows past `'Z'` have no letter form and fall back to a zero-based
    /// `(row, col)` pair.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.row < 26 {
            write!(f, "{}{}", (b'A' + self.row as u8) as char, self.col + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Errors returned when parsing a coordinate string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateParseError {
    /// Input string was empty.
    Empty,
    /// Input had no numeric suffix after the row letter.
    TooShort,
    /// Leading character precedes `'A'` and cannot map to a row index.
    InvalidRow(char),
    /// Suffix was not a positive 1-based column number.
    InvalidColumn,
}

impl fmt::Display for CoordinateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateParseError::Empty => write!(f, "coordinate string is empty"),
            CoordinateParseError::TooShort => {
                write!(f, "coordinate string needs a row letter and a column number")
            }
            CoordinateParseError::InvalidRow(c) => write!(f, "invalid row letter '{}'", c),
            CoordinateParseError::InvalidColumn => {
                write!(f, "column must be a positive number")
            }
        }
    }
}

impl std::error::Error for CoordinateParseError {}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    /// Parse the `"B5"` form back into a coordinate. No grid-bounds
    /// checking happens here; that is the caller's concern.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let row_ch = chars.next().ok_or(CoordinateParseError::Empty)?;
        let rest = chars.as_str();
        if rest.is_empty() {
            return Err(CoordinateParseError::TooShort);
        }
        let row = (row_ch as u32)
            .checked_sub('A' as u32)
            .ok_or(CoordinateParseError::InvalidRow(row_ch))? as usize;
        let col = rest
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or(CoordinateParseError::InvalidColumn)?;
        Ok(Coordinate { row, col })
    }
}
