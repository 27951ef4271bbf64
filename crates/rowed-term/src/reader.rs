// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Byte sources for the key decoder.
//
// The editor reads stdin one byte at a time with a short timeout. A read
// that times out is not an error: it yields `Ok(None)` and the control loop
// gets a chance to redraw before trying again. The same timeout resolves the
// lone-ESC ambiguity in the decoder: if the bytes after an ESC don't arrive
// in time, the ESC was a keypress.
//
// The timeout is implemented with `poll()` on stdin's file descriptor rather
// than termios VTIME, so it works the same whether or not raw mode is active.
//
// `&[u8]` and `VecDeque<u8>` implement `ByteSource` too. An exhausted slice
// behaves exactly like a timed-out terminal, which is what lets the decoder
// be tested without a terminal.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Default wait for a byte before reporting "nothing yet".
///
/// Matches a termios `VTIME` of 1 (a tenth of a second): long enough for an
/// escape sequence's bytes to arrive together, short enough that a bare
/// Escape feels immediate.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(100);

/// A source of single bytes with bounded-wait semantics.
pub trait ByteSource {
    /// Read one byte.
    ///
    /// Returns `Ok(None)` if no byte arrived within the source's timeout.
    ///
    /// # Errors
    ///
    /// Returns an error only for real I/O failures, never for a timeout.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

impl ByteSource for &[u8] {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.split_first().map(|(&first, rest)| {
            *self = rest;
            first
        }))
    }
}

impl ByteSource for VecDeque<u8> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.pop_front())
    }
}

// ─── StdinSource ─────────────────────────────────────────────────────────────

/// Reads terminal input from stdin, one byte per call, with a timeout.
#[derive(Debug, Clone, Copy)]
pub struct StdinSource {
    timeout: Duration,
}

impl StdinSource {
    /// A stdin source with the [`DEFAULT_TIMEOUT`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// A stdin source that waits at most `timeout` per byte.
    #[must_use]
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// The per-byte timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Timeout in whole milliseconds, saturated to `poll()`'s `c_int`.
    #[cfg(unix)]
    fn timeout_ms(&self) -> libc::c_int {
        libc::c_int::try_from(self.timeout.as_millis()).unwrap_or(libc::c_int::MAX)
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let fd = libc::STDIN_FILENO;

        // Wait for readability, bounded by the timeout.
        let ready = unsafe {
            let mut pfd = libc::pollfd {
                fd,
                events: libc::POLLIN,
                revents: 0,
            };
            libc::poll(&raw mut pfd, 1, self.timeout_ms())
        };

        if ready == 0 {
            return Ok(None);
        }
        if ready < 0 {
            let err = io::Error::last_os_error();
            // A signal (e.g. SIGWINCH) interrupted the wait: same as a timeout.
            if err.kind() == io::ErrorKind::Interrupted {
                return Ok(None);
            }
            return Err(err);
        }

        let mut byte = 0u8;
        let n = unsafe { libc::read(fd, (&raw mut byte).cast(), 1) };

        match n {
            1 => Ok(Some(byte)),
            0 => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed")),
            _ => {
                let err = io::Error::last_os_error();
                if matches!(
                    err.kind(),
                    io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
                ) {
                    Ok(None)
                } else {
                    Err(err)
                }
            }
        }
    }
}

/// Non-unix fallback using a blocking read with no timeout.
#[cfg(not(unix))]
impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        use std::io::Read;

        let mut byte = [0u8; 1];
        match io::stdin().lock().read(&mut byte)? {
            0 => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed")),
            _ => Ok(Some(byte[0])),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
