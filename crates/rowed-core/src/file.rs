//! Loading and saving documents.
//!
//! The on-disk format is plain bytes: rows joined by `\n`, with a `\n` after
//! the last row. Loading strips every trailing `\r` and `\n` from each line,
//! so CRLF files load cleanly (and save back as LF).
//!
//! Saving writes a temporary file next to the target and renames it into
//! place, so the old contents survive any failure along the way.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::buffer::{Line, TextBuffer};

/// Read `path` into a new buffer.
///
/// An empty file gives an empty document (one empty row).
///
/// # Errors
///
/// Returns any error from opening or reading the file; `NotFound` when it
/// doesn't exist.
pub fn load(path: &Path) -> io::Result<TextBuffer> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    let mut raw = Vec::new();

    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        let end = raw
            .iter()
            .rposition(|&b| b != b'\n' && b != b'\r')
            .map_or(0, |i| i + 1);
        lines.push(Line::from(&raw[..end]));
    }

    Ok(TextBuffer::from_lines(lines))
}

/// Write the serialized buffer to `path`, replacing any existing file.
///
/// The bytes go to a temporary file in the same directory, which is synced
/// and then renamed over `path`. An existing file's permissions carry over.
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns any error from creating, writing or renaming the temporary
/// file. `path` is untouched in that case.
pub fn save(path: &Path, buf: &TextBuffer) -> io::Result<usize> {
    let mut bytes = Vec::with_capacity(buf.serialized_len());
    bytes.extend(buf.serialize());

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    if let Some(meta) = fs::metadata(path).ok().filter(fs::Metadata::is_file) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(bytes.len())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
