// SPDX-License-Identifier: MIT
//
// Log setup.
//
// The terminal belongs to the editor while it runs, so log records never go
// to stdout or stderr. They go to the file named by ROWED_LOG, or nowhere.

use std::env;
use std::io;
use std::path::PathBuf;

use log::LevelFilter;

pub const LOG_FILE_VAR: &str = "ROWED_LOG";
pub const LOG_LEVEL_VAR: &str = "ROWED_LOG_LEVEL";

/// Where to log and how much.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `None` disables logging entirely.
    pub path: Option<PathBuf>,
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            level: LevelFilter::Info,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from `ROWED_LOG` and `ROWED_LOG_LEVEL` as returned by `lookup`.
    /// An unknown level name falls back to `info`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = lookup(LOG_FILE_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let level = lookup(LOG_LEVEL_VAR)
            .and_then(|l| l.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);
        Self { path, level }
    }
}

/// Install the global logger. Returns `false` when logging is disabled.
///
/// # Errors
///
/// Fails if the log file can't be opened for appending, or a logger is
/// already installed.
pub fn init(config: &LogConfig) -> io::Result<bool> {
    let Some(path) = &config.path else {
        return Ok(false);
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ));
        })
        .level(config.level)
        .chain(fern::log_file(path)?)
        .apply()
        .map_err(|e| io::Error::other(e.to_string()))?;

    log::info!("logging to {} at {}", path.display(), config.level);
    Ok(true)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
