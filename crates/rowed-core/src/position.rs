//! Cursor position type.
//!
//! All coordinates are **0-indexed**. Row 0 is the first line of the
//! document; column 0 is the first byte of a row. Columns are byte offsets,
//! and a column equal to the row's length is the "after the last byte"
//! position used while typing.
//!
//! The status line shows positions 1-indexed; that conversion happens in
//! [`Display`](fmt::Display) and nowhere else.

use std::fmt;

/// A position in a text buffer: (row, column), both 0-indexed.
///
/// Ordered row first, then column.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Row 0, column 0.
    pub const ZERO: Self = Self { row: 0, col: 0 };

    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}:{})", self.row, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ln {}, Col {}", self.row + 1, self.col + 1)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
