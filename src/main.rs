// SPDX-License-Identifier: MIT
//
// rowed — a small two-mode terminal text editor.
//
// This is the main binary that wires together the two crates:
//
//   rowed-term → raw mode, alternate screen, byte reader, key decoding
//   rowed-core → text buffer, viewport, modes, commands, file I/O
//
// The control loop is single-threaded. Each iteration draws a frame, waits
// (with a short timeout) for one key, and hands it to the editor:
//
//   stdin → StdinSource → KeyDecoder → Editor::handle_key → state mutation
//   render::draw_frame → OutputBuffer → one write to stdout
//
// A timeout with no key just redraws.

mod logging;
mod render;

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use rowed_core::editor::{Action, Editor};
use rowed_core::options::Options;
use rowed_term::input::KeyDecoder;
use rowed_term::output::OutputBuffer;
use rowed_term::reader::{ByteSource, StdinSource};
use rowed_term::terminal::Terminal;

use logging::LogConfig;

// ─── Control loop ───────────────────────────────────────────────────────────

/// Draw, read a key, dispatch; until the editor says quit.
///
/// # Errors
///
/// Any I/O error from reading input or writing a frame.
fn run<S: ByteSource>(
    editor: &mut Editor,
    keys: &mut KeyDecoder<S>,
    screen: &mut impl Write,
) -> io::Result<()> {
    let mut out = OutputBuffer::new();
    loop {
        render::draw_frame(&mut out, editor)?;
        out.flush_to(screen)?;

        let Some(key) = keys.next_key()? else {
            continue;
        };
        if editor.handle_key(key) == Action::Quit {
            log::info!("quit");
            return Ok(());
        }
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    if let Err(e) = logging::init(&LogConfig::from_env()) {
        eprintln!("rowed: logging disabled: {e}");
    }

    let options = Options::from_env();
    let timeout = options.key_timeout;
    let mut terminal = Terminal::new();
    let size = terminal.size();
    let (rows, cols) = (usize::from(size.rows), usize::from(size.cols));

    let mut editor = match env::args_os().nth(1) {
        Some(arg) => {
            let path = Path::new(&arg);
            Editor::with_file(path, options, rows, cols).unwrap_or_else(|e| {
                eprintln!("rowed: {}: {e}", path.display());
                process::exit(1);
            })
        }
        None => Editor::new(options, rows, cols),
    };

    if let Err(e) = terminal.enter() {
        eprintln!("rowed: failed to initialize terminal: {e}");
        process::exit(1);
    }

    let mut keys = KeyDecoder::new(StdinSource::with_timeout(timeout));
    let result = run(&mut editor, &mut keys, &mut io::stdout());

    if let Err(e) = terminal.leave() {
        log::error!("failed to restore terminal: {e}");
    }

    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("rowed: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rowed_term::input::{ctrl, Key};
    use std::collections::VecDeque;
    use std::fs;

    fn editor() -> Editor {
        Editor::new(Options::default(), 10, 60)
    }

    /// Keys for `run`, always ending in Ctrl+Q so the loop stops.
    fn script(bytes: &[u8]) -> KeyDecoder<VecDeque<u8>> {
        let mut keys: VecDeque<u8> = bytes.iter().copied().collect();
        keys.push_back(ctrl(b'q'));
        KeyDecoder::new(keys)
    }

    fn rows(ed: &Editor) -> Vec<String> {
        ed.buffer()
            .lines()
            .map(|l| String::from_utf8_lossy(l).into_owned())
            .collect()
    }

    #[test]
    fn quit_ends_the_loop() {
        let mut ed = editor();
        let mut screen = Vec::new();
        run(&mut ed, &mut script(b"hi"), &mut screen).unwrap();
        assert_eq!(rows(&ed), vec!["hi"]);
        assert!(!screen.is_empty());
    }

    #[test]
    fn quit_before_end_of_script_leaves_rest_unread() {
        let mut ed = editor();
        let mut screen = Vec::new();
        run(&mut ed, &mut script(b"a\x11b"), &mut screen).unwrap();
        assert_eq!(rows(&ed), vec!["a"]);
    }

    #[test]
    fn one_frame_per_key() {
        let mut ed = editor();
        let mut screen = Vec::new();
        run(&mut ed, &mut script(b"ab"), &mut screen).unwrap();
        let frames = screen.windows(6).filter(|w| *w == b"\x1b[?25l").count();
        assert_eq!(frames, 3);
    }

    #[test]
    fn escape_sequences_reach_the_editor() {
        let mut ed = editor();
        let mut screen = Vec::new();
        // "ac", Left, "b", Home, Delete.
        run(&mut ed, &mut script(b"ac\x1b[Db\x1b[H\x1b[3~"), &mut screen).unwrap();
        assert_eq!(rows(&ed), vec!["bc"]);
    }

    #[test]
    fn command_mode_exit() {
        let mut ed = editor();
        ed.handle_key(Key::Char(b'x'));
        ed.handle_key(Key::Escape);
        let mut screen = Vec::new();
        run(&mut ed, &mut script(b"exit\r"), &mut screen).unwrap();
        assert_eq!(rows(&ed), vec!["x"]);
        assert!(screen.windows(4).any(|w| w == b"exit"));
    }

    #[test]
    fn edit_and_save_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.txt");
        fs::write(&path, "abc\nde\nf\n").unwrap();

        let mut ed = Editor::with_file(&path, Options::default(), 10, 60).unwrap();
        let mut screen = Vec::new();
        // End, Return, "X", Ctrl+S.
        run(&mut ed, &mut script(b"\x1b[F\rX\x13"), &mut screen).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"abc\nX\nde\nf\n");
    }
}
