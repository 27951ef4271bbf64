//! Command mode — the command line at the bottom of the screen.
//!
//! Escape in insert mode opens the command line. Typed bytes accumulate in a
//! [`CommandLine`]; Return submits it, and the submitted text is parsed into
//! a [`Command`] for the editor to run.
//!
//! # Commands
//!
//! | Verb (aliases)         | Argument           | Effect                               |
//! |------------------------|--------------------|--------------------------------------|
//! | `open`, `edit`         | path (required)    | replace the document with a file     |
//! | `close`, `new`, `create` |                  | replace the document with an empty one |
//! | `rename`, `name`       | name (required)    | change where the document saves to   |
//! | `save`                 | name (optional)    | rename if given, then write the file |
//! | `exit`, `quit`, `leave`|                    | quit                                 |
//! | `start` / `end`        |                    | cursor to start / end of its row     |
//! | `up` / `down`          |                    | scroll a page up / down              |
//! | `top` / `bottom`       |                    | scroll to the first / last page      |
//! | `goto`                 | line (required)    | put a line at the top of the screen  |
//! | `help`                 |                    | show the help document (read-only)   |
//! | `move`, `mv`           | position (required)| not implemented yet                  |
//!
//! # Parsing
//!
//! The line splits on whitespace. The first word is the verb, looked up
//! case-sensitively in [`VERBS`]; the second word, if any, is the argument.
//! Anything after that is ignored.

use std::path::PathBuf;

use crate::error::{EditorError, Result};

// ---------------------------------------------------------------------------
// Verb table
// ---------------------------------------------------------------------------

/// What a command word selects, before its argument is looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Open,
    Close,
    Rename,
    Save,
    Exit,
    Start,
    End,
    Up,
    Down,
    Top,
    Bottom,
    Goto,
    Help,
    Move,
}

/// Every accepted command word.
pub const VERBS: &[(&str, Verb)] = &[
    ("open", Verb::Open),
    ("edit", Verb::Open),
    ("close", Verb::Close),
    ("new", Verb::Close),
    ("create", Verb::Close),
    ("rename", Verb::Rename),
    ("name", Verb::Rename),
    ("save", Verb::Save),
    ("exit", Verb::Exit),
    ("quit", Verb::Exit),
    ("leave", Verb::Exit),
    ("start", Verb::Start),
    ("end", Verb::End),
    ("up", Verb::Up),
    ("down", Verb::Down),
    ("top", Verb::Top),
    ("bottom", Verb::Bottom),
    ("goto", Verb::Goto),
    ("help", Verb::Help),
    ("move", Verb::Move),
    ("mv", Verb::Move),
];

impl Verb {
    /// Look up a command word.
    #[must_use]
    pub fn lookup(word: &str) -> Option<Self> {
        VERBS
            .iter()
            .find(|(name, _)| *name == word)
            .map(|&(_, verb)| verb)
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(PathBuf),
    Close,
    Rename(PathBuf),
    Save(Option<PathBuf>),
    Exit,
    Start,
    End,
    Up,
    Down,
    Top,
    Bottom,
    /// 1-based line number, at least 1.
    Goto(usize),
    Help,
    Move(String),
}

/// What running a command produced.
#[derive(Debug)]
pub enum CommandResult {
    /// Success, with an optional status message.
    Ok(Option<String>),
    /// Failure; the error's text becomes the status message.
    Err(EditorError),
    /// Exit the editor.
    Quit,
}

/// Parse a submitted command line.
///
/// # Errors
///
/// [`EditorError::UnknownCommand`] for a blank line or an unknown verb, one
/// of the `Missing*` variants when a required argument is absent, and
/// [`EditorError::InvalidLineNumber`] for a `goto` argument that isn't a
/// positive integer.
pub fn parse_command(input: &str) -> Result<Command> {
    let mut words = input.split_whitespace();
    let verb = words
        .next()
        .and_then(Verb::lookup)
        .ok_or(EditorError::UnknownCommand)?;
    let arg = words.next();

    let cmd = match verb {
        Verb::Open => Command::Open(arg.ok_or(EditorError::MissingPath)?.into()),
        Verb::Close => Command::Close,
        Verb::Rename => Command::Rename(arg.ok_or(EditorError::MissingName)?.into()),
        Verb::Save => Command::Save(arg.map(PathBuf::from)),
        Verb::Exit => Command::Exit,
        Verb::Start => Command::Start,
        Verb::End => Command::End,
        Verb::Up => Command::Up,
        Verb::Down => Command::Down,
        Verb::Top => Command::Top,
        Verb::Bottom => Command::Bottom,
        Verb::Goto => {
            let arg = arg.ok_or(EditorError::MissingLineNumber)?;
            match arg.parse::<usize>() {
                Ok(line) if line >= 1 => Command::Goto(line),
                _ => return Err(EditorError::InvalidLineNumber),
            }
        }
        Verb::Help => Command::Help,
        Verb::Move => Command::Move(arg.ok_or(EditorError::MissingPosition)?.to_string()),
    };

    Ok(cmd)
}

// ---------------------------------------------------------------------------
// CommandLine
// ---------------------------------------------------------------------------

/// The text being typed in command mode, plus the last submitted line.
///
/// Input only grows or shrinks at the end, so the edit position is always
/// `len()`.
#[derive(Debug, Clone, Default)]
pub struct CommandLine {
    input: Vec<u8>,
    last: Vec<u8>,
}

impl CommandLine {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            input: Vec::new(),
            last: Vec::new(),
        }
    }

    /// The text typed so far.
    #[inline]
    #[must_use]
    pub fn input(&self) -> &[u8] {
        &self.input
    }

    /// The most recently submitted line.
    #[inline]
    #[must_use]
    pub fn last(&self) -> &[u8] {
        &self.last
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn push(&mut self, byte: u8) {
        self.input.push(byte);
    }

    /// Remove the last byte. Returns `false` if there was nothing to remove.
    pub fn backspace(&mut self) -> bool {
        self.input.pop().is_some()
    }

    /// Replace the input with the last submitted line.
    pub fn recall(&mut self) {
        self.input.clone_from(&self.last);
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// Take the input as the submitted line: it becomes [`last`](Self::last)
    /// and the input is cleared.
    ///
    /// A blank line is discarded and returns `None`; `last` is left alone.
    pub fn submit(&mut self) -> Option<String> {
        let line = std::mem::take(&mut self.input);
        if line.iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        let text = String::from_utf8_lossy(&line).into_owned();
        self.last = line;
        Some(text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
