//! # rowed-core — Editor core for rowed
//!
//! Everything the editor does short of talking to the terminal:
//!
//! - **[`position`]** — `Position` (row, col), 0-indexed byte columns
//! - **[`buffer`]** — `TextBuffer`, an ordered list of byte rows
//! - **[`view`]** — `ViewportCursor`: cursor, scroll offset, screen size
//! - **[`mode`]** — the two modes, `Insert` and `Command`
//! - **[`command`]** — command-line input, verbs and parsing
//! - **[`editor`]** — `Editor`, the key handler tying it all together
//! - **[`file`]** — loading and saving documents
//! - **[`options`]** — tunables read from the environment
//! - **[`error`]** — `EditorError`, the messages users see

pub mod buffer;
pub mod command;
pub mod editor;
pub mod error;
pub mod file;
pub mod mode;
pub mod options;
pub mod position;
pub mod view;
