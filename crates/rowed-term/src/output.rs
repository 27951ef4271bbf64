// SPDX-License-Identifier: MIT
//
// Output buffering.
//
// Every frame is assembled in memory and written with a single `write()`
// syscall. Hundreds of small writes per frame (cursor moves, colour changes,
// text runs) would otherwise reach the terminal piecemeal and show up as
// flicker while the screen repaints.

use std::io::{self, Write};

/// A byte buffer that accumulates ANSI output for a single `write()` syscall.
///
/// Default capacity: 16 KB — enough for most frames without reallocation.
pub struct OutputBuffer {
    buf: Vec<u8>,
}

const DEFAULT_CAPACITY: usize = 16_384;

impl OutputBuffer {
    /// Create an empty buffer with default capacity (16 KB).
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Number of bytes accumulated.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The accumulated bytes (for testing and debugging).
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Append raw text bytes.
    #[inline]
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append `n` copies of `byte` (padding for bars and gutters).
    pub fn pad(&mut self, byte: u8, n: usize) {
        self.buf.resize(self.buf.len() + n, byte);
    }

    /// Clear the buffer for reuse (keeps allocated capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Write accumulated output to an arbitrary writer and clear the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        if !self.buf.is_empty() {
            w.write_all(&self.buf)?;
            w.flush()?;
            self.buf.clear();
        }
        Ok(())
    }
}

impl Write for OutputBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // Real flushing happens in flush_to().
        Ok(())
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi;

    #[test]
    fn new_is_empty() {
        let out = OutputBuffer::new();
        assert!(out.is_empty());
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn push_and_pad() {
        let mut out = OutputBuffer::new();
        out.push_bytes(b"ab");
        out.pad(b' ', 3);
        assert_eq!(out.as_bytes(), b"ab   ");
    }

    #[test]
    fn pad_zero_is_noop() {
        let mut out = OutputBuffer::new();
        out.pad(b'~', 0);
        assert!(out.is_empty());
    }

    #[test]
    fn ansi_functions_write_into_buffer() {
        let mut out = OutputBuffer::new();
        ansi::cursor_home(&mut out).unwrap();
        ansi::clear_line(&mut out).unwrap();
        assert_eq!(out.as_bytes(), b"\x1b[H\x1b[K");
    }

    #[test]
    fn flush_to_drains() {
        let mut out = OutputBuffer::new();
        out.push_bytes(b"frame");
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"frame");
        assert!(out.is_empty());
    }

    #[test]
    fn flush_to_empty_writes_nothing() {
        let mut out = OutputBuffer::new();
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut out = OutputBuffer::new();
        out.push_bytes(&[b'x'; 100]);
        let cap = out.buf.capacity();
        out.clear();
        assert!(out.is_empty());
        assert_eq!(out.buf.capacity(), cap);
    }
}
