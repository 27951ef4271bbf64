// SPDX-License-Identifier: MIT
//
// Frame rendering.
//
// Each frame is drawn from scratch into one OutputBuffer and written with a
// single syscall. Layout, top to bottom:
//
//   ┌──────────────────────────────────────────┐
//   │ title bar (blue): file name              │  row 0
//   ├──────────────────────────────────────────┤
//   │ text rows with line-number gutter        │  rows - 3
//   │ ~  (past the end of the document)        │
//   ├──────────────────────────────────────────┤
//   │ message line (magenta, red for errors)   │  1 row
//   ├──────────────────────────────────────────┤
//   │ command text / hint       N lines  Ln .. │  1 row (blue)
//   └──────────────────────────────────────────┘
//
// Text is written byte for byte so screen columns match buffer columns.
// Control bytes (tabs included) are drawn as a single placeholder cell for
// the same reason.

use std::io;

use rowed_core::editor::Editor;
use rowed_core::mode::Mode;
use rowed_term::ansi;
use rowed_term::output::OutputBuffer;
use rowed_term::style::{Attr, Color, Style};

const TITLE_STYLE: Style = Style::PLAIN.fg(Color::WHITE).bg(Color::BLUE);
const STATUS_STYLE: Style = Style::PLAIN.fg(Color::WHITE).bg(Color::BLUE);
const MESSAGE_STYLE: Style = Style::PLAIN.fg(Color::WHITE).bg(Color::MAGENTA);
const ERROR_STYLE: Style = Style::PLAIN
    .fg(Color::WHITE)
    .bg(Color::RED)
    .attrs(Attr::BOLD);
const TILDE_STYLE: Style = Style::PLAIN.fg(Color::CYAN);
const GUTTER_STYLE: Style = Style::PLAIN.attrs(Attr::DIM);

/// Shown on the status line when no command is being typed.
pub const HELP_HINT: &str = "Type 'help' in command mode (ESC) if you need help.";

/// Width of the line-number gutter: enough digits for the highest line
/// number plus one separator space.
#[must_use]
pub fn gutter_width(line_count: usize) -> usize {
    // At least 1, so ilog10 doesn't panic on 0.
    let n = line_count.max(1);
    n.ilog10() as usize + 2
}

/// Right-hand side of the status line.
#[must_use]
pub fn position_info(editor: &Editor) -> String {
    let view = editor.view();
    format!(
        "{} lines  {}  Scl {}",
        editor.buffer().line_count(),
        view.cursor(),
        view.offset()
    )
}

/// Draw a complete frame into `out`.
///
/// # Errors
///
/// Only if writing into `out` fails, which an `OutputBuffer` never does.
pub fn draw_frame(out: &mut OutputBuffer, editor: &Editor) -> io::Result<()> {
    let view = editor.view();
    let cols = view.screen_cols();

    ansi::cursor_hide(out)?;
    ansi::cursor_home(out)?;

    draw_bar(out, editor.title().as_bytes(), b"", cols, TITLE_STYLE)?;
    out.push_bytes(b"\r\n");

    let gutter = draw_text_rows(out, editor)?;

    match editor.message() {
        Some(msg) => {
            let style = if msg.is_error { ERROR_STYLE } else { MESSAGE_STYLE };
            draw_bar(out, msg.text.as_bytes(), b"", cols, style)?;
        }
        None => ansi::clear_line(out)?,
    }
    out.push_bytes(b"\r\n");

    // Last row: no trailing newline, or the terminal would scroll.
    let command = editor.command_input();
    let left = if editor.mode() == Mode::Command && !command.is_empty() {
        command
    } else {
        HELP_HINT.as_bytes()
    };
    draw_bar(out, left, position_info(editor).as_bytes(), cols, STATUS_STYLE)?;

    place_cursor(out, editor, gutter)
}

/// The document rows between the title bar and the message line. Returns
/// the gutter width used.
fn draw_text_rows(out: &mut OutputBuffer, editor: &Editor) -> io::Result<usize> {
    let buf = editor.buffer();
    let view = editor.view();
    let cols = view.screen_cols();
    let gutter = gutter_width(buf.line_count());

    for screen_row in 0..view.text_rows() {
        // A goto near usize::MAX leaves an offset with no rows below it.
        let row = view.offset().checked_add(screen_row);
        match row.and_then(|r| buf.line(r).map(|line| (r, line))) {
            Some((row, line)) => {
                let number = format!("{:>width$} ", row.saturating_add(1), width = gutter - 1);
                let number = &number.as_bytes()[..number.len().min(cols)];
                ansi::style(out, GUTTER_STYLE)?;
                out.push_bytes(number);
                ansi::reset(out)?;

                let room = cols.saturating_sub(gutter);
                for &b in &line[..line.len().min(room)] {
                    out.push_bytes(&[display_byte(b)]);
                }
            }
            None => {
                ansi::style(out, TILDE_STYLE)?;
                out.push_bytes(b"~");
                ansi::reset(out)?;
            }
        }
        ansi::clear_line(out)?;
        out.push_bytes(b"\r\n");
    }

    Ok(gutter)
}

/// A full-width coloured bar: `left` at the start, `right` flush against
/// the right edge. `left` is cut short rather than overlap `right`.
fn draw_bar(
    out: &mut OutputBuffer,
    left: &[u8],
    right: &[u8],
    cols: usize,
    style: Style,
) -> io::Result<()> {
    let right = &right[..right.len().min(cols)];
    let right_start = cols - right.len();
    let left = &left[..left.len().min(right_start)];

    ansi::style(out, style)?;
    for &b in left {
        out.push_bytes(&[display_byte(b)]);
    }
    out.pad(b' ', right_start - left.len());
    out.push_bytes(right);
    ansi::clear_line(out)?;
    ansi::reset(out)
}

/// Put the terminal cursor where the user is typing and set its shape.
fn place_cursor(out: &mut OutputBuffer, editor: &Editor, gutter: usize) -> io::Result<()> {
    let view = editor.view();
    let cols = view.screen_cols();
    let last_col = cols.saturating_sub(1);

    let target = match editor.mode() {
        Mode::Command => Some((
            editor.command_input().len().min(last_col),
            view.screen_rows().saturating_sub(1),
        )),
        // Off-screen after a goto past the end: leave the cursor hidden.
        Mode::Insert => view
            .screen_position()
            .filter(|&(row, _)| row < view.text_rows())
            .map(|(row, col)| ((gutter + col).min(last_col), row + 1)),
    };

    ansi::set_cursor_shape(out, editor.mode().cursor_shape())?;
    if let Some((x, y)) = target {
        ansi::cursor_to(out, to_u16(x), to_u16(y))?;
        ansi::cursor_show(out)?;
    }
    Ok(())
}

/// Printable ASCII and high bytes pass through; control bytes become a
/// placeholder.
const fn display_byte(b: u8) -> u8 {
    match b {
        b'\t' => b' ',
        0..0x20 | 0x7F => b'?',
        _ => b,
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
