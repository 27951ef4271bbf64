//! Text buffer — an ordered list of byte lines.
//!
//! A [`TextBuffer`] is a `Vec` of [`Line`]s. Each line owns its bytes and
//! never contains a line terminator. Every mutation goes through a method on
//! `TextBuffer`, so line growth and row bookkeeping happen in exactly one
//! place.
//!
//! # Design choices
//!
//! - **Bytes, not chars.** Columns are byte offsets and the buffer never
//!   decodes UTF-8. A file round-trips byte for byte whatever its encoding.
//!
//! - **Never empty.** An empty document is one empty line. Constructors
//!   enforce this and [`delete_row`](TextBuffer::delete_row) refuses to
//!   remove the last line.
//!
//! - **Out-of-range is a no-op.** Row indices past the end, columns past a
//!   line's length: every operation either clamps or does nothing. Nothing
//!   here panics on caller input.
//!
//! - **No history.** Undo is not a feature of this editor; mutations are
//!   immediate and final.

use std::fmt;
use std::iter;

// ---------------------------------------------------------------------------
// Line
// ---------------------------------------------------------------------------

/// One row of document text, without its terminator.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Line(Vec<u8>);

impl Line {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The line's bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Line {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Line {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.0))
    }
}

// ---------------------------------------------------------------------------
// TextBuffer
// ---------------------------------------------------------------------------

/// The document: rows `0..line_count()`, never fewer than one.
#[derive(Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<Line>,
}

impl TextBuffer {
    // -- Construction -------------------------------------------------------

    /// An empty document: a single empty line.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
        }
    }

    /// Build a buffer from rows. An empty iterator gives an empty document.
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Line>,
    {
        let mut lines: Vec<Line> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(Line::new());
        }
        Self { lines }
    }

    // -- Access -------------------------------------------------------------

    /// Number of rows. Always at least 1.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// True when the document is a single empty line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// The bytes of `row`, or `None` past the end.
    #[must_use]
    pub fn line(&self, row: usize) -> Option<&[u8]> {
        self.lines.get(row).map(Line::as_bytes)
    }

    /// Length of `row` in bytes; 0 for a row that doesn't exist.
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, Line::len)
    }

    /// Index of the last row.
    #[inline]
    #[must_use]
    pub fn last_row(&self) -> usize {
        self.lines.len() - 1
    }

    /// Iterate over all rows.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.lines.iter().map(Line::as_bytes)
    }

    // -- Row operations -----------------------------------------------------

    /// Insert a new row at `at`, shifting later rows down.
    ///
    /// `at == line_count()` appends. Anything larger is ignored.
    pub fn insert_row(&mut self, at: usize, content: impl Into<Line>) {
        if at <= self.lines.len() {
            self.lines.insert(at, content.into());
        }
    }

    /// Remove row `at`, shifting later rows up.
    ///
    /// Out-of-range rows are ignored. Removing the only row leaves one empty
    /// row behind.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.lines.len() {
            return;
        }
        if self.lines.len() == 1 {
            self.lines[0] = Line::new();
        } else {
            self.lines.remove(at);
        }
    }

    /// Break `row` at `col`: the row keeps bytes `..col`, a new row after
    /// it gets the rest. `col` is clamped to the row's length.
    pub fn split_row(&mut self, row: usize, col: usize) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        let col = col.min(line.len());
        let tail = line.0.split_off(col);
        self.lines.insert(row + 1, Line(tail));
    }

    /// Append `row` to the end of the previous row and remove it.
    ///
    /// Returns the column in the merged row where the two halves join, or
    /// `None` (and does nothing) when `row` is 0 or out of range.
    pub fn merge_row_up(&mut self, row: usize) -> Option<usize> {
        if row == 0 || row >= self.lines.len() {
            return None;
        }
        let moved = self.lines.remove(row);
        let prev = &mut self.lines[row - 1];
        let join = prev.len();
        prev.0.extend_from_slice(&moved.0);
        Some(join)
    }

    /// Append `bytes` to the end of `row`. Missing rows are ignored.
    pub fn append_to_row(&mut self, row: usize, bytes: &[u8]) {
        if let Some(line) = self.lines.get_mut(row) {
            line.0.extend_from_slice(bytes);
        }
    }

    // -- Character operations -----------------------------------------------

    /// Insert `byte` into `row` at `col`. A `col` past the end inserts at
    /// the end. Missing rows are ignored.
    pub fn insert_char(&mut self, row: usize, col: usize, byte: u8) {
        if let Some(line) = self.lines.get_mut(row) {
            let col = col.min(line.len());
            line.0.insert(col, byte);
        }
    }

    /// Remove the byte at `col` in `row`. No-op unless `col < len`.
    pub fn delete_char(&mut self, row: usize, col: usize) {
        if let Some(line) = self.lines.get_mut(row) {
            if col < line.len() {
                line.0.remove(col);
            }
        }
    }

    // -- Serialization ------------------------------------------------------

    /// The file contents: every row followed by `\n`.
    ///
    /// Lazy and restartable; call it again for a fresh pass.
    pub fn serialize(&self) -> impl Iterator<Item = u8> + '_ {
        self.lines
            .iter()
            .flat_map(|line| line.0.iter().copied().chain(iter::once(b'\n')))
    }

    /// Length of [`serialize`](Self::serialize)'s output: the sum of the
    /// row lengths plus one newline per row.
    #[must_use]
    pub fn serialized_len(&self) -> usize {
        self.lines.iter().map(Line::len).sum::<usize>() + self.lines.len()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.lines).finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn buf(lines: &[&str]) -> TextBuffer {
        TextBuffer::from_lines(lines.iter().copied())
    }

    fn rows(b: &TextBuffer) -> Vec<String> {
        b.lines()
            .map(|l| String::from_utf8_lossy(l).into_owned())
            .collect()
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn new_is_one_empty_line() {
        let b = TextBuffer::new();
        assert_eq!(b.line_count(), 1);
        assert_eq!(b.line(0), Some(&b""[..]));
        assert!(b.is_empty());
    }

    #[test]
    fn from_no_lines_is_one_empty_line() {
        let b = TextBuffer::from_lines(Vec::<Line>::new());
        assert_eq!(b.line_count(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn from_lines_keeps_order() {
        let b = buf(&["abc", "de", "f"]);
        assert_eq!(rows(&b), vec!["abc", "de", "f"]);
        assert!(!b.is_empty());
        assert_eq!(b.last_row(), 2);
    }

    #[test]
    fn line_len_of_missing_row_is_zero() {
        let b = buf(&["abc"]);
        assert_eq!(b.line_len(0), 3);
        assert_eq!(b.line_len(7), 0);
        assert_eq!(b.line(7), None);
    }

    // -- Rows ---------------------------------------------------------------

    #[test]
    fn insert_row_shifts_down() {
        let mut b = buf(&["a", "c"]);
        b.insert_row(1, "b");
        b.insert_row(3, "d");
        assert_eq!(rows(&b), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn insert_row_out_of_range_is_noop() {
        let mut b = buf(&["a"]);
        b.insert_row(5, "x");
        assert_eq!(rows(&b), vec!["a"]);
    }

    #[test]
    fn delete_row_shifts_up() {
        let mut b = buf(&["a", "b", "c"]);
        b.delete_row(1);
        assert_eq!(rows(&b), vec!["a", "c"]);
        b.delete_row(9);
        assert_eq!(rows(&b), vec!["a", "c"]);
    }

    #[test]
    fn delete_last_remaining_row_leaves_empty_line() {
        let mut b = buf(&["only"]);
        b.delete_row(0);
        assert_eq!(b.line_count(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn split_row_in_middle() {
        let mut b = buf(&["hello world"]);
        b.split_row(0, 5);
        assert_eq!(rows(&b), vec!["hello", " world"]);
    }

    #[test]
    fn split_row_at_end_adds_empty_row() {
        let mut b = buf(&["abc", "de"]);
        b.split_row(0, 3);
        assert_eq!(rows(&b), vec!["abc", "", "de"]);
    }

    #[test]
    fn split_row_clamps_column() {
        let mut b = buf(&["ab"]);
        b.split_row(0, 99);
        assert_eq!(rows(&b), vec!["ab", ""]);
        b.split_row(9, 0);
        assert_eq!(b.line_count(), 2);
    }

    #[test]
    fn merge_row_up_joins() {
        let mut b = buf(&["abc", "de", "f"]);
        assert_eq!(b.merge_row_up(1), Some(3));
        assert_eq!(rows(&b), vec!["abcde", "f"]);
    }

    #[test]
    fn merge_first_row_is_noop() {
        let mut b = buf(&["abc", "de"]);
        assert_eq!(b.merge_row_up(0), None);
        assert_eq!(b.merge_row_up(2), None);
        assert_eq!(rows(&b), vec!["abc", "de"]);
    }

    #[test]
    fn split_then_merge_round_trips() {
        for col in 0..=11 {
            let mut b = buf(&["hello world", "next"]);
            b.split_row(0, col);
            assert_eq!(b.merge_row_up(1), Some(col));
            assert_eq!(rows(&b), vec!["hello world", "next"], "col {col}");
        }
    }

    #[test]
    fn append_to_row() {
        let mut b = buf(&["ab"]);
        b.append_to_row(0, b"cd");
        b.append_to_row(4, b"zz");
        assert_eq!(rows(&b), vec!["abcd"]);
    }

    // -- Characters ---------------------------------------------------------

    #[test]
    fn insert_char_positions() {
        let mut b = buf(&["ac"]);
        b.insert_char(0, 1, b'b');
        b.insert_char(0, 0, b'>');
        b.insert_char(0, 4, b'<');
        assert_eq!(rows(&b), vec![">abc<"]);
    }

    #[test]
    fn insert_char_past_end_appends() {
        let mut b = buf(&["ab"]);
        b.insert_char(0, 50, b'!');
        assert_eq!(rows(&b), vec!["ab!"]);
    }

    #[test]
    fn insert_char_into_missing_row_is_noop() {
        let mut b = buf(&["ab"]);
        b.insert_char(3, 0, b'x');
        assert_eq!(rows(&b), vec!["ab"]);
    }

    #[test]
    fn delete_char_in_range_only() {
        let mut b = buf(&["abc"]);
        b.delete_char(0, 1);
        assert_eq!(rows(&b), vec!["ac"]);
        b.delete_char(0, 2);
        b.delete_char(5, 0);
        assert_eq!(rows(&b), vec!["ac"]);
    }

    #[test]
    fn non_ascii_bytes_are_kept_verbatim() {
        let mut b = TextBuffer::from_lines([Line::from(vec![0xC3, 0xA9])]);
        b.insert_char(0, 1, 0xFF);
        assert_eq!(b.line(0), Some(&[0xC3, 0xFF, 0xA9][..]));
    }

    // -- Serialization ------------------------------------------------------

    #[test]
    fn serialize_joins_with_trailing_newline() {
        let b = buf(&["abc", "", "de"]);
        let out: Vec<u8> = b.serialize().collect();
        assert_eq!(out, b"abc\n\nde\n");
        assert_eq!(out.len(), b.serialized_len());
    }

    #[test]
    fn serialize_empty_document() {
        let b = TextBuffer::new();
        assert_eq!(b.serialize().collect::<Vec<u8>>(), b"\n");
        assert_eq!(b.serialized_len(), 1);
    }

    #[test]
    fn serialize_is_restartable() {
        let b = buf(&["x", "y"]);
        let first: Vec<u8> = b.serialize().collect();
        let second: Vec<u8> = b.serialize().collect();
        assert_eq!(first, second);
    }
}
