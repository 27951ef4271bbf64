//! Viewport cursor — the cursor position and the vertical scroll offset.
//!
//! A [`ViewportCursor`] owns two coordinates that have to agree with each
//! other and with the [`TextBuffer`]:
//!
//! - the **cursor**, a buffer [`Position`] with `row < line_count` and
//!   `col <= line_len(row)`;
//! - the **offset**, the first buffer row shown at the top of the text area.
//!
//! Every cursor movement, page scroll and jump goes through this type, so the
//! clamping rules live in one place. The buffer is passed in by reference on
//! each call; the viewport never holds on to it.
//!
//! # Screen layout
//!
//! The screen has three rows of chrome (title bar, message line, status
//! line). The rest shows text:
//!
//! ```text
//! row 0            title bar
//! rows 1..=text    text rows     <- offset .. offset + text_rows
//! rows-2           message line
//! rows-1           status line
//! ```
//!
//! # Scrolling versus jumping
//!
//! Ordinary movement keeps the cursor on screen by nudging the offset
//! ([`scroll_into_view`](ViewportCursor::scroll_into_view)). Paging works
//! the other way round: the offset moves by a stride and the cursor follows
//! it, keeping its row on screen. `goto` sets the offset directly, even past
//! the end of a short document; the cursor then sits above the viewport
//! until the next movement scrolls it back.

use crate::buffer::TextBuffer;
use crate::position::Position;

/// Title bar, message line and status line.
pub const CHROME_ROWS: usize = 3;

/// Cursor plus scroll state for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportCursor {
    cursor: Position,
    offset: usize,
    screen_rows: usize,
    screen_cols: usize,
}

impl ViewportCursor {
    /// Cursor at the origin, no scroll, for a screen of the given size.
    #[must_use]
    pub const fn new(screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            cursor: Position::ZERO,
            offset: 0,
            screen_rows,
            screen_cols,
        }
    }

    // -- Accessors ----------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Position {
        self.cursor
    }

    /// First buffer row visible at the top of the text area.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    #[must_use]
    pub const fn screen_rows(&self) -> usize {
        self.screen_rows
    }

    #[inline]
    #[must_use]
    pub const fn screen_cols(&self) -> usize {
        self.screen_cols
    }

    /// Number of rows available for text, never less than 1.
    #[must_use]
    pub const fn text_rows(&self) -> usize {
        let rows = self.screen_rows.saturating_sub(CHROME_ROWS);
        if rows == 0 { 1 } else { rows }
    }

    /// Largest offset that still fills the text area: the one that shows
    /// the last page of the document.
    #[must_use]
    pub fn max_offset(&self, buf: &TextBuffer) -> usize {
        buf.line_count().saturating_sub(self.text_rows())
    }

    /// Cursor position relative to the text area: `(row - offset, col)`.
    ///
    /// `None` when the cursor row is above the viewport, which only happens
    /// after a `goto` past the end of the document.
    #[must_use]
    pub const fn screen_position(&self) -> Option<(usize, usize)> {
        match self.cursor.row.checked_sub(self.offset) {
            Some(row) => Some((row, self.cursor.col)),
            None => None,
        }
    }

    // -- Setup --------------------------------------------------------------

    /// Change the screen size and keep the cursor visible.
    pub fn resize(&mut self, screen_rows: usize, screen_cols: usize) {
        self.screen_rows = screen_rows;
        self.screen_cols = screen_cols;
        self.scroll_into_view();
    }

    /// Back to the origin with no scroll (a freshly opened document).
    pub const fn reset(&mut self) {
        self.cursor = Position::ZERO;
        self.offset = 0;
    }

    /// Move the cursor to `pos`, clamped to the buffer, and scroll to it.
    pub fn set_position(&mut self, pos: Position, buf: &TextBuffer) {
        self.cursor.row = pos.row.min(buf.last_row());
        self.cursor.col = pos.col;
        self.clamp_column_to_row(buf);
        self.scroll_into_view();
    }

    // -- Invariants ---------------------------------------------------------

    /// Pull the column back to the end of the cursor's row if it's past it.
    pub fn clamp_column_to_row(&mut self, buf: &TextBuffer) {
        self.cursor.col = self.cursor.col.min(buf.line_len(self.cursor.row));
    }

    /// Adjust the offset by the least amount that puts the cursor row in
    /// `[offset, offset + text_rows)`. The cursor itself never moves.
    pub const fn scroll_into_view(&mut self) {
        let rows = self.text_rows();
        if self.cursor.row < self.offset {
            self.offset = self.cursor.row;
        } else if self.cursor.row >= self.offset.saturating_add(rows) {
            self.offset = self.cursor.row + 1 - rows;
        }
    }

    // -- Movement -----------------------------------------------------------

    /// One byte left, wrapping to the end of the previous row.
    ///
    /// Returns `false` at the start of the document.
    pub fn move_left(&mut self, buf: &TextBuffer) -> bool {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = buf.line_len(self.cursor.row);
        } else {
            return false;
        }
        self.scroll_into_view();
        true
    }

    /// One byte right, wrapping to the start of the next row.
    ///
    /// Returns `false` at the end of the document.
    pub fn move_right(&mut self, buf: &TextBuffer) -> bool {
        if self.cursor.col < buf.line_len(self.cursor.row) {
            self.cursor.col += 1;
        } else if self.cursor.row < buf.last_row() {
            self.cursor.row += 1;
            self.cursor.col = 0;
        } else {
            return false;
        }
        self.scroll_into_view();
        true
    }

    /// One row up, column clamped to the new row.
    pub fn move_up(&mut self, buf: &TextBuffer) -> bool {
        if self.cursor.row == 0 {
            return false;
        }
        self.cursor.row -= 1;
        self.clamp_column_to_row(buf);
        self.scroll_into_view();
        true
    }

    /// One row down, column clamped to the new row.
    pub fn move_down(&mut self, buf: &TextBuffer) -> bool {
        if self.cursor.row >= buf.last_row() {
            return false;
        }
        self.cursor.row += 1;
        self.clamp_column_to_row(buf);
        self.scroll_into_view();
        true
    }

    /// Column 0 of the current row.
    pub fn line_start(&mut self) {
        self.cursor.col = 0;
        self.scroll_into_view();
    }

    /// Past the last byte of the current row.
    pub fn line_end(&mut self, buf: &TextBuffer) {
        self.cursor.col = buf.line_len(self.cursor.row);
        self.scroll_into_view();
    }

    // -- Paging -------------------------------------------------------------

    /// Scroll up by `stride` rows (stopping at the top). The cursor keeps
    /// its screen row.
    pub fn page_up(&mut self, stride: usize, buf: &TextBuffer) {
        let new_offset = self.offset.saturating_sub(stride);
        self.shift_offset(new_offset, buf);
    }

    /// Scroll down by `stride` rows, never past the last page. Does nothing
    /// when the last page is already showing.
    pub fn page_down(&mut self, stride: usize, buf: &TextBuffer) {
        let max = self.max_offset(buf);
        if self.offset < max {
            let new_offset = (self.offset + stride).min(max);
            self.shift_offset(new_offset, buf);
        }
    }

    /// Show the first page. The cursor keeps its screen row.
    pub fn scroll_to_top(&mut self, buf: &TextBuffer) {
        self.shift_offset(0, buf);
    }

    /// Show the last page. The cursor keeps its screen row.
    pub fn scroll_to_bottom(&mut self, buf: &TextBuffer) {
        let max = self.max_offset(buf);
        self.shift_offset(max, buf);
    }

    /// Put 1-based `line` at the top of the viewport and the cursor at
    /// column 0 of the first text row.
    ///
    /// The offset is taken as given even past the end of the document; the
    /// cursor row is clamped to the last row.
    pub fn goto_line(&mut self, line: usize, buf: &TextBuffer) {
        self.offset = line.saturating_sub(1);
        self.cursor.row = self.offset.min(buf.last_row());
        self.cursor.col = 0;
    }

    /// Move the offset and carry the cursor with it, keeping its screen row.
    fn shift_offset(&mut self, new_offset: usize, buf: &TextBuffer) {
        let screen_row = self.cursor.row.saturating_sub(self.offset);
        self.offset = new_offset;
        self.cursor.row = new_offset.saturating_add(screen_row).min(buf.last_row());
        self.clamp_column_to_row(buf);
        self.scroll_into_view();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
