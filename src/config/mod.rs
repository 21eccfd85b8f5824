//! Server configuration loading and defaults.
//!
//! Configuration comes from a single YAML file. Lookup order:
//! 1. The path given with `--config` (must exist and parse)
//! 2. `<config_dir>/warren/warren.yml` when present
//! 3. Built-in defaults rooted under the local data directory
//!
//! # Example
//!
//! ```
//! use warren::config::ServerConfig;
//!
//! let config = ServerConfig::default();
//! assert_eq!(config.display.min_rows, 24);
//! assert_eq!(config.display.min_cols, 80);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WarrenError};
use crate::term::DisplayRequirements;

/// Top-level server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Root of the sharded per-player playground tree.
    pub playground_root: PathBuf,

    /// Shared template directory seeded into every new playground.
    pub template_dir: PathBuf,

    /// Persistent player database location.
    pub database: PathBuf,

    /// Required display geometry.
    pub display: DisplayConfig,
}

/// Display geometry requirements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub min_rows: u16,
    pub min_cols: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let req = DisplayRequirements::default();
        Self {
            min_rows: req.min_rows,
            min_cols: req.min_cols,
        }
    }
}

impl DisplayConfig {
    /// Requirements handed to the terminal guard.
    pub fn requirements(&self) -> DisplayRequirements {
        DisplayRequirements {
            min_rows: self.min_rows,
            min_cols: self.min_cols,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        let data = data_root();
        Self {
            playground_root: data.join("userdata"),
            template_dir: data.join("misc"),
            database: data.join("warren.db"),
            display: DisplayConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration, preferring `explicit` when given.
    ///
    /// An explicit path that cannot be read or parsed is an error; the
    /// default location is optional and silently falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path().filter(|p| p.exists()),
        };

        match path {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| WarrenError::ConfigParseError {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let config = serde_yaml::from_str(&content).map_err(|err| WarrenError::ConfigParseError {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Default config file location: `<config_dir>/warren/warren.yml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("warren").join("warren.yml"))
    }
}

fn data_root() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("warren")
}
