//! JSON-file-backed player store.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WarrenError};

use super::Database;

/// On-disk shape of the store: player records keyed by name.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    players: serde_json::Map<String, serde_json::Value>,
}

/// Minimal player store kept in a single JSON file.
#[derive(Debug, Default)]
pub struct FileDatabase {
    open_path: Option<PathBuf>,
}

impl FileDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the currently open store, if any.
    pub fn path(&self) -> Option<&Path> {
        self.open_path.as_deref()
    }
}

impl Database for FileDatabase {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn init(&mut self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| WarrenError::Database {
                path: path.to_path_buf(),
                message: format!("create parent directory: {err}"),
            })?;
        }
        let empty = serde_json::to_string_pretty(&StoreFile::default()).map_err(|err| {
            WarrenError::Database {
                path: path.to_path_buf(),
                message: format!("serialize empty store: {err}"),
            }
        })?;
        fs::write(path, empty).map_err(|err| WarrenError::Database {
            path: path.to_path_buf(),
            message: format!("write store: {err}"),
        })?;
        debug!(path = %path.display(), "player store initialized");
        Ok(())
    }

    fn open(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|err| WarrenError::Database {
            path: path.to_path_buf(),
            message: format!("read store: {err}"),
        })?;
        serde_json::from_str::<StoreFile>(&content).map_err(|err| WarrenError::Database {
            path: path.to_path_buf(),
            message: format!("parse store: {err}"),
        })?;
        self.open_path = Some(path.to_path_buf());
        debug!(path = %path.display(), "player store opened");
        Ok(())
    }
}
