// SPDX-License-Identifier: MIT
//
// rowed-term — terminal layer for rowed.
//
// Raw mode and the alternate screen, a timeout-aware byte reader, the key
// decoder that turns escape sequences into logical keys, and the ANSI
// vocabulary the renderer writes into a single per-frame buffer.
//
// Direct termios and escape sequences, no TUI framework in between.

pub mod ansi;
pub mod input;
pub mod output;
pub mod reader;
pub mod style;
pub mod terminal;
