//! Editor options.
//!
//! A handful of tunables with fixed defaults, overridable from the
//! environment:
//!
//! | Variable               | Field           | Default   |
//! |------------------------|-----------------|-----------|
//! | `ROWED_PAGE_STRIDE`    | `page_stride`   | 5         |
//! | `ROWED_DEFAULT_NAME`   | `default_name`  | `unnamed` |
//! | `ROWED_KEY_TIMEOUT_MS` | `key_timeout`   | 100 ms    |
//!
//! Unparseable or out-of-range values are ignored with a warning in the log.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const PAGE_STRIDE_VAR: &str = "ROWED_PAGE_STRIDE";
pub const DEFAULT_NAME_VAR: &str = "ROWED_DEFAULT_NAME";
pub const KEY_TIMEOUT_VAR: &str = "ROWED_KEY_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Rows scrolled by PageUp/PageDown and the `up`/`down` commands.
    pub page_stride: usize,
    /// Save target for a document that has never been named.
    pub default_name: PathBuf,
    /// How long the key reader waits for a byte before giving up.
    pub key_timeout: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            page_stride: 5,
            default_name: PathBuf::from("unnamed"),
            key_timeout: Duration::from_millis(100),
        }
    }
}

impl Options {
    /// Defaults, overridden by the `ROWED_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut opts = Self::default();

        if let Some(raw) = lookup(PAGE_STRIDE_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => opts.page_stride = n,
                _ => log::warn!("ignoring {PAGE_STRIDE_VAR}={raw:?}: expected a positive integer"),
            }
        }

        if let Some(raw) = lookup(DEFAULT_NAME_VAR) {
            if raw.trim().is_empty() {
                log::warn!("ignoring empty {DEFAULT_NAME_VAR}");
            } else {
                opts.default_name = PathBuf::from(raw);
            }
        }

        if let Some(raw) = lookup(KEY_TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => opts.key_timeout = Duration::from_millis(ms),
                _ => log::warn!("ignoring {KEY_TIMEOUT_VAR}={raw:?}: expected milliseconds > 0"),
            }
        }

        opts
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
