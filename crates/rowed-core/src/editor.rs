//! Editor state and the two-mode key handler.
//!
//! [`Editor`] owns everything the control loop mutates: the document, the
//! viewport cursor, the mode, the command line and the status message. The
//! loop hands it one decoded [`Key`] at a time through
//! [`handle_key`](Editor::handle_key) and reads the result back for
//! drawing. Nothing here touches the terminal.
//!
//! # Key handling
//!
//! Insert mode edits the document and moves the cursor. Command mode
//! builds a line in the [`CommandLine`]; Return parses it and runs the
//! [`Command`]. Escape switches between the two. Ctrl+Q quits and Ctrl+S
//! saves in either mode.
//!
//! Entering command mode remembers the cursor. Escape puts it back, and so
//! does every navigation command before it applies its own movement, so
//! `up`, `top`, `end` and friends act on the position the user left.
//!
//! # Status messages
//!
//! Every keypress starts by clearing the previous message. Commands set a
//! new one on success ("Success: File saved.") or failure (the
//! [`EditorError`]'s text, flagged as an error for the renderer).

use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

use rowed_term::input::{ctrl, Key, BACKSPACE, RETURN};

use crate::buffer::TextBuffer;
use crate::command::{parse_command, Command, CommandLine, CommandResult};
use crate::error::{EditorError, Result};
use crate::file;
use crate::mode::Mode;
use crate::options::Options;
use crate::position::Position;
use crate::view::ViewportCursor;

/// The document shown by the `help` command.
const HELP_TEXT: &str = include_str!("help.txt");

const CTRL_B: u8 = ctrl(b'b');
const CTRL_Q: u8 = ctrl(b'q');
const CTRL_S: u8 = ctrl(b's');
const CTRL_T: u8 = ctrl(b't');

/// What the control loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// A one-shot message for the message line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

// ---------------------------------------------------------------------------
// Editor
// ---------------------------------------------------------------------------

pub struct Editor {
    buffer: TextBuffer,
    view: ViewportCursor,
    mode: Mode,
    cmdline: CommandLine,

    /// Cursor at the moment command mode was entered.
    saved_cursor: Position,

    /// Cleared at the start of every keypress.
    message: Option<StatusMessage>,

    /// Save target. `None` until the document is named or first saved.
    path: Option<PathBuf>,

    /// Set for the help document; edits and saves are refused.
    read_only: bool,

    options: Options,
}

impl Editor {
    /// An empty, unnamed document on a screen of the given size.
    #[must_use]
    pub fn new(options: Options, screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            buffer: TextBuffer::new(),
            view: ViewportCursor::new(screen_rows, screen_cols),
            mode: Mode::Insert,
            cmdline: CommandLine::new(),
            saved_cursor: Position::ZERO,
            message: None,
            path: None,
            read_only: false,
            options,
        }
    }

    /// Open `path` for editing at startup.
    ///
    /// A path that doesn't exist yet gives an empty document that will be
    /// saved there.
    ///
    /// # Errors
    ///
    /// Any I/O error other than `NotFound` while reading the file.
    pub fn with_file(
        path: &Path,
        options: Options,
        screen_rows: usize,
        screen_cols: usize,
    ) -> io::Result<Self> {
        let mut editor = Self::new(options, screen_rows, screen_cols);
        match file::load(path) {
            Ok(buffer) => {
                log::info!("opened {} ({} lines)", path.display(), buffer.line_count());
                editor.buffer = buffer;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("{} does not exist yet, starting empty", path.display());
            }
            Err(e) => return Err(e),
        }
        editor.path = Some(path.to_path_buf());
        Ok(editor)
    }

    // -- State for the renderer ---------------------------------------------

    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    #[inline]
    #[must_use]
    pub const fn view(&self) -> &ViewportCursor {
        &self.view
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The command line being typed (empty outside command mode).
    #[inline]
    #[must_use]
    pub fn command_input(&self) -> &[u8] {
        self.cmdline.input()
    }

    #[inline]
    #[must_use]
    pub const fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    #[inline]
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Text for the title bar.
    #[must_use]
    pub fn title(&self) -> Cow<'_, str> {
        match &self.path {
            Some(path) => path.to_string_lossy(),
            None if self.read_only => Cow::Borrowed("[Help]"),
            None => Cow::Borrowed("[Unnamed Buffer]"),
        }
    }

    /// Change the screen size.
    pub fn resize(&mut self, screen_rows: usize, screen_cols: usize) {
        self.view.resize(screen_rows, screen_cols);
    }

    // -- Messages -----------------------------------------------------------

    fn set_message(&mut self, text: impl Into<String>) {
        self.message = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    fn set_error(&mut self, err: &EditorError) {
        self.message = Some(StatusMessage {
            text: err.to_string(),
            is_error: true,
        });
    }

    // -- Key dispatch -------------------------------------------------------

    /// Handle one key and report whether to keep running.
    pub fn handle_key(&mut self, key: Key) -> Action {
        self.message = None;
        match self.mode {
            Mode::Insert => self.handle_insert(key),
            Mode::Command => self.handle_command(key),
        }
    }

    fn handle_insert(&mut self, key: Key) -> Action {
        match key {
            Key::Escape => self.enter_command_mode(),
            Key::Char(CTRL_Q) => return Action::Quit,
            Key::Char(CTRL_S) => self.save_key(),
            Key::Char(CTRL_T) => self.view.scroll_to_top(&self.buffer),
            Key::Char(CTRL_B) => self.view.scroll_to_bottom(&self.buffer),

            Key::Char(RETURN) => {
                if self.check_writable() {
                    self.insert_newline();
                }
            }
            Key::Char(BACKSPACE) => {
                if self.check_writable() {
                    self.delete_backward();
                }
            }
            Key::Delete => {
                if self.check_writable() && self.view.move_right(&self.buffer) {
                    self.delete_backward();
                }
            }

            Key::Left => {
                self.view.move_left(&self.buffer);
            }
            Key::Right => {
                self.view.move_right(&self.buffer);
            }
            Key::Up => {
                self.view.move_up(&self.buffer);
            }
            Key::Down => {
                self.view.move_down(&self.buffer);
            }
            Key::Home => self.view.line_start(),
            Key::End => self.view.line_end(&self.buffer),
            Key::PageUp => self.view.page_up(self.options.page_stride, &self.buffer),
            Key::PageDown => self.view.page_down(self.options.page_stride, &self.buffer),

            Key::Char(byte) if key.is_printable() => {
                if self.check_writable() {
                    self.insert_byte(byte);
                }
            }

            Key::Char(_) => {}
        }

        Action::Continue
    }

    fn handle_command(&mut self, key: Key) -> Action {
        match key {
            Key::Escape => {
                self.restore_cursor();
                self.enter_insert_mode();
            }
            Key::Char(CTRL_Q) => return Action::Quit,
            Key::Char(CTRL_S) => self.save_key(),
            Key::Char(RETURN) => return self.submit_command(),
            Key::Char(BACKSPACE) => {
                self.cmdline.backspace();
            }
            Key::Up => self.cmdline.recall(),
            Key::Down => self.cmdline.clear(),
            Key::Char(byte) if key.is_printable() => self.cmdline.push(byte),
            _ => {}
        }

        Action::Continue
    }

    // -- Mode transitions ---------------------------------------------------

    fn enter_command_mode(&mut self) {
        self.saved_cursor = self.view.cursor();
        self.cmdline.clear();
        self.mode = Mode::Command;
        log::debug!("mode -> {}", self.mode);
    }

    fn enter_insert_mode(&mut self) {
        self.cmdline.clear();
        if self.mode != Mode::Insert {
            self.mode = Mode::Insert;
            log::debug!("mode -> {}", self.mode);
        }
    }

    fn restore_cursor(&mut self) {
        self.view.set_position(self.saved_cursor, &self.buffer);
    }

    // -- Editing ------------------------------------------------------------

    /// Refuse edits to a read-only document, with a message.
    fn check_writable(&mut self) -> bool {
        if self.read_only {
            self.set_error(&EditorError::ReadOnly);
            return false;
        }
        true
    }

    fn insert_byte(&mut self, byte: u8) {
        let pos = self.view.cursor();
        self.buffer.insert_char(pos.row, pos.col, byte);
        self.view
            .set_position(Position::new(pos.row, pos.col + 1), &self.buffer);
    }

    fn insert_newline(&mut self) {
        let pos = self.view.cursor();
        self.buffer.split_row(pos.row, pos.col);
        self.view
            .set_position(Position::new(pos.row + 1, 0), &self.buffer);
    }

    /// Backspace: delete before the cursor, or join with the row above.
    fn delete_backward(&mut self) {
        let pos = self.view.cursor();
        if pos.col > 0 {
            self.buffer.delete_char(pos.row, pos.col - 1);
            self.view
                .set_position(Position::new(pos.row, pos.col - 1), &self.buffer);
        } else if let Some(join) = self.buffer.merge_row_up(pos.row) {
            self.view
                .set_position(Position::new(pos.row - 1, join), &self.buffer);
        }
    }

    // -- Commands -----------------------------------------------------------

    fn submit_command(&mut self) -> Action {
        let Some(line) = self.cmdline.submit() else {
            return Action::Continue;
        };
        log::debug!("command: {line}");

        let result = match parse_command(&line) {
            Ok(cmd) => self.run_command(cmd),
            Err(e) => CommandResult::Err(e),
        };

        match result {
            CommandResult::Ok(Some(msg)) => {
                self.set_message(msg);
                Action::Continue
            }
            CommandResult::Ok(None) => Action::Continue,
            CommandResult::Err(e) => {
                log::log!(e.log_level(), "command {line:?} failed: {e}");
                self.set_error(&e);
                Action::Continue
            }
            CommandResult::Quit => Action::Quit,
        }
    }

    fn run_command(&mut self, cmd: Command) -> CommandResult {
        match cmd {
            Command::Open(path) => self.cmd_open(path),
            Command::Close => {
                self.replace_document(TextBuffer::new(), None, false);
                CommandResult::Ok(Some("Success: File closed.".to_string()))
            }
            Command::Rename(name) => {
                log::info!("renamed to {}", name.display());
                self.path = Some(name);
                CommandResult::Ok(Some("Success: File renamed.".to_string()))
            }
            Command::Save(name) => match self.save(name) {
                Ok(msg) => CommandResult::Ok(Some(msg.to_string())),
                Err(e) => CommandResult::Err(e),
            },
            Command::Exit => CommandResult::Quit,
            Command::Help => {
                self.replace_document(TextBuffer::from_lines(HELP_TEXT.lines()), None, true);
                CommandResult::Ok(None)
            }
            Command::Move(_) => CommandResult::Err(EditorError::Unsupported),
            nav => {
                self.restore_cursor();
                self.navigate(&nav);
                self.enter_insert_mode();
                CommandResult::Ok(None)
            }
        }
    }

    /// Cursor and scroll commands.
    fn navigate(&mut self, cmd: &Command) {
        let stride = self.options.page_stride;
        match *cmd {
            Command::Start => self.view.line_start(),
            Command::End => self.view.line_end(&self.buffer),
            Command::Up => self.view.page_up(stride, &self.buffer),
            Command::Down => self.view.page_down(stride, &self.buffer),
            Command::Top => self.view.scroll_to_top(&self.buffer),
            Command::Bottom => self.view.scroll_to_bottom(&self.buffer),
            Command::Goto(line) => self.view.goto_line(line, &self.buffer),
            _ => {}
        }
    }

    fn cmd_open(&mut self, path: PathBuf) -> CommandResult {
        match file::load(&path) {
            Ok(buffer) => {
                log::info!("opened {} ({} lines)", path.display(), buffer.line_count());
                self.replace_document(buffer, Some(path), false);
                CommandResult::Ok(Some("Success: New file opened.".to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                CommandResult::Err(EditorError::FileNotFound(path))
            }
            Err(e) => CommandResult::Err(e.into()),
        }
    }

    /// Swap in a new document and start editing it from the top.
    fn replace_document(&mut self, buffer: TextBuffer, path: Option<PathBuf>, read_only: bool) {
        self.buffer = buffer;
        self.path = path;
        self.read_only = read_only;
        self.view.reset();
        self.saved_cursor = Position::ZERO;
        self.enter_insert_mode();
    }

    /// Ctrl+S in either mode.
    fn save_key(&mut self) {
        match self.save(None) {
            Ok(msg) => self.set_message(msg),
            Err(e) => {
                log::log!(e.log_level(), "save failed: {e}");
                self.set_error(&e);
            }
        }
    }

    /// Write the document, renaming it first if `name` is given. Unnamed
    /// documents are saved under the default name.
    fn save(&mut self, name: Option<PathBuf>) -> Result<&'static str> {
        if self.read_only {
            return Err(EditorError::ReadOnly);
        }

        let renamed = name.is_some();
        if let Some(name) = name {
            self.path = Some(name);
        }
        let path = self
            .path
            .get_or_insert_with(|| self.options.default_name.clone());

        let written = file::save(path, &self.buffer)?;
        log::info!("saved {} ({written} bytes)", path.display());

        Ok(if renamed {
            "Success: File renamed and saved."
        } else {
            "Success: File saved."
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
