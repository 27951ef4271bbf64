//! The two editing modes.
//!
//! | Mode    | Cursor shape | Keys do                                   |
//! |---------|--------------|-------------------------------------------|
//! | Insert  | Bar          | edit the document, move the cursor        |
//! | Command | Underline    | build a command line, submitted by Return |
//!
//! Escape toggles between them. Which key does what in each mode lives in
//! [`editor`](crate::editor); this is just the state.

use std::fmt;

use rowed_term::ansi::CursorShape;

/// The current editing mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Keys insert text. The mode every document opens in.
    #[default]
    Insert,
    /// Keys build a command line at the bottom of the screen.
    Command,
}

impl Mode {
    /// Name for logs and the status line.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Command => "COMMAND",
        }
    }

    #[must_use]
    pub const fn cursor_shape(self) -> CursorShape {
        match self {
            Self::Insert => CursorShape::SteadyBar,
            Self::Command => CursorShape::SteadyUnderline,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_insert() {
        assert_eq!(Mode::default(), Mode::Insert);
    }

    #[test]
    fn display_names() {
        assert_eq!(Mode::Insert.to_string(), "INSERT");
        assert_eq!(Mode::Command.to_string(), "COMMAND");
    }

    #[test]
    fn cursor_shapes() {
        assert_eq!(Mode::Insert.cursor_shape(), CursorShape::SteadyBar);
        assert_eq!(Mode::Command.cursor_shape(), CursorShape::SteadyUnderline);
    }
}
