//! Runtime settings assembled from command-line flags.
//!
//! Nothing here is persisted; every launch starts from the flags it was
//! given and the defaults below.

use crate::ticker::{tick_duration, DEFAULT_TICK_MS};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default number of background glyphs
pub const DEFAULT_GLYPHS: usize = 100;

/// Accepted tick range in milliseconds
pub const MIN_TICK_MS: u64 = 10;
pub const MAX_TICK_MS: u64 = 1000;

/// Upper bound on background glyphs
pub const MAX_GLYPHS: usize = 1000;

const LOG_DIR_NAME: &str = "matrix-todo";
const LOG_FILE_NAME: &str = "matrix-todo.log";

/// Errors raised while validating settings
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick interval must be between {min} and {max} ms, got {value}")]
    TickOutOfRange { value: u64, min: u64, max: u64 },

    #[error("glyph count must be at most {max}, got {value}")]
    TooManyGlyphs { value: usize, max: usize },
}

/// Validated widget settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub tick: Duration,
    /// Zero when the backdrop is disabled
    pub glyphs: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick: tick_duration(DEFAULT_TICK_MS),
            glyphs: DEFAULT_GLYPHS,
        }
    }
}

impl AppConfig {
    pub fn new(tick_ms: u64, glyphs: usize, rain: bool) -> Result<Self, ConfigError> {
        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&tick_ms) {
            return Err(ConfigError::TickOutOfRange {
                value: tick_ms,
                min: MIN_TICK_MS,
                max: MAX_TICK_MS,
            });
        }
        if glyphs > MAX_GLYPHS {
            return Err(ConfigError::TooManyGlyphs {
                value: glyphs,
                max: MAX_GLYPHS,
            });
        }

        Ok(Self {
            tick: tick_duration(tick_ms),
            glyphs: if rain { glyphs } else { 0 },
        })
    }
}

/// Log file location: the platform cache dir, or the temp dir when there is none
pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join(LOG_DIR_NAME))
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_FILE_NAME)
}
