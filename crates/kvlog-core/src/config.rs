//! Configuration types for kvlog.
//!
//! [`LogConfig::load`] layers an optional user TOML file over the built-in
//! defaults. [`LogConfig::defaults`] returns the same defaults without
//! touching the filesystem (useful in tests).

use crate::types::Level;
use serde::Deserialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[log]
level      = "error"
timestamps = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub log: LogSection,
}

/// `[log]` section of the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct LogSection {
    #[serde(default = "default_level")]
    pub level: Level,
    #[serde(default = "default_timestamps")]
    pub timestamps: bool,
}

fn default_level() -> Level {
    Level::Error
}
fn default_timestamps() -> bool {
    true
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: default_level(),
            timestamps: default_timestamps(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl LogConfig {
    /// Load from `path` (if it exists), layered on top of the built-in
    /// defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
