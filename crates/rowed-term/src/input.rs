// SPDX-License-Identifier: MIT
//
// Key decoder.
//
// Turns raw stdin bytes into logical keys. The terminal sends most keys as
// a single byte; the navigation and editing keys arrive as short escape
// sequences:
//
//   ESC [ <digit> ~     Home, End, Delete, PageUp, PageDown  (VT style)
//   ESC [ <letter>      arrows, Home, End                    (xterm style)
//   ESC O <letter>      arrows, Home, End                    (application cursor mode)
//
// # Design
//
// Decoding is a table lookup keyed on the continuation bytes: `tilde_key`
// for the digit form, `letter_key` for the letter forms. Everything else a
// terminal might send after ESC resolves to a bare Escape. The decoder never
// waits indefinitely: each byte is read through a `ByteSource`, whose
// timeout turns "the rest of the sequence never came" into a plain Escape
// keypress.
//
// No bytes are buffered between calls. An unrecognized sequence may leave
// its trailing bytes unread; they decode as ordinary characters on the next
// call, which is the fail-soft behaviour we want.

use std::io;

use crate::reader::ByteSource;

// ─── Key ─────────────────────────────────────────────────────────────────────

/// The escape byte (0x1B).
pub const ESC: u8 = 0x1B;

/// The byte a terminal sends for the Backspace key in raw mode (DEL).
pub const BACKSPACE: u8 = 0x7F;

/// The byte a terminal sends for Return/Enter in raw mode (`\r`, since
/// ICRNL is off).
pub const RETURN: u8 = b'\r';

/// The byte produced by Ctrl + `key`: the key with its top three bits
/// cleared, e.g. `ctrl(b'q') == 0x11`.
#[inline]
#[must_use]
pub const fn ctrl(key: u8) -> u8 {
    key & 0x1F
}

/// A decoded logical key.
///
/// Single-byte input is reported verbatim as [`Char`](Key::Char), including
/// Return, Backspace and control combinations; the caller decides what each
/// byte means. Multi-byte sequences get their own variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A literal byte.
    Char(u8),
    // ── From escape sequences ──────────────────────────────────
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Delete,
    PageUp,
    PageDown,
}

impl Key {
    /// Shorthand for the key produced by Ctrl + `key`.
    #[inline]
    #[must_use]
    pub const fn ctrl(key: u8) -> Self {
        Self::Char(ctrl(key))
    }

    /// True for bytes that belong in document text: Tab, everything from
    /// space upwards except DEL. Bytes >= 0x80 count, so UTF-8 input is
    /// inserted byte by byte.
    #[must_use]
    pub const fn is_printable(self) -> bool {
        match self {
            Self::Char(b) => b == b'\t' || (b >= 0x20 && b != BACKSPACE),
            _ => false,
        }
    }
}

// ─── Decoding ────────────────────────────────────────────────────────────────

/// Read and decode one key.
///
/// Returns `Ok(None)` when no byte arrived within the source's timeout; the
/// caller should simply try again (after redrawing, if it likes).
///
/// # Errors
///
/// Propagates real I/O errors from the source.
pub fn read_key(src: &mut impl ByteSource) -> io::Result<Option<Key>> {
    let Some(first) = src.read_byte()? else {
        return Ok(None);
    };

    if first != ESC {
        return Ok(Some(Key::Char(first)));
    }

    decode_escape(src).map(Some)
}

/// Decode what follows an ESC byte.
///
/// Two continuation bytes are required; if either is missing the ESC was a
/// standalone keypress.
fn decode_escape(src: &mut impl ByteSource) -> io::Result<Key> {
    let Some(prefix) = src.read_byte()? else {
        return Ok(Key::Escape);
    };
    let Some(code) = src.read_byte()? else {
        return Ok(Key::Escape);
    };

    let key = match (prefix, code) {
        (b'[', b'0'..=b'9') => match src.read_byte()? {
            Some(b'~') => tilde_key(code),
            _ => None,
        },
        (b'[' | b'O', _) => letter_key(code),
        _ => None,
    };

    Ok(key.unwrap_or(Key::Escape))
}

/// `ESC [ <digit> ~` — VT-style editing keys.
const fn tilde_key(digit: u8) -> Option<Key> {
    match digit {
        b'1' | b'7' => Some(Key::Home),
        b'3' => Some(Key::Delete),
        b'4' | b'8' => Some(Key::End),
        b'5' => Some(Key::PageUp),
        b'6' => Some(Key::PageDown),
        _ => None,
    }
}

/// `ESC [ <letter>` / `ESC O <letter>` — cursor keys.
const fn letter_key(letter: u8) -> Option<Key> {
    match letter {
        b'A' => Some(Key::Up),
        b'B' => Some(Key::Down),
        b'C' => Some(Key::Right),
        b'D' => Some(Key::Left),
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        _ => None,
    }
}

// ─── KeyDecoder ──────────────────────────────────────────────────────────────

/// A [`ByteSource`] paired with the decoder.
///
/// Convenience for the control loop: owns the source and hands out one key
/// per call.
#[derive(Debug)]
pub struct KeyDecoder<S> {
    source: S,
}

impl<S: ByteSource> KeyDecoder<S> {
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Decode the next key, or `None` if the source timed out.
    ///
    /// # Errors
    ///
    /// Propagates real I/O errors from the source.
    pub fn next_key(&mut self) -> io::Result<Option<Key>> {
        read_key(&mut self.source)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
