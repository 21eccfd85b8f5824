//! Player database collaborator.
//!
//! The bootstrap layer only sequences the database calls: check for the
//! store, initialize it when absent, then open it, once at process start
//! before any session work. The store's internals live behind the
//! [`Database`] trait; [`FileDatabase`] is the minimal implementation the
//! server binary ships with.

mod file;

pub use file::FileDatabase;

use std::path::Path;

use tracing::info;

use crate::error::Result;

/// Interface onto the persistent player store.
pub trait Database {
    /// Whether a store already exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create an empty store at `path`.
    fn init(&mut self, path: &Path) -> Result<()>;

    /// Open the store at `path` for the life of the process.
    fn open(&mut self, path: &Path) -> Result<()>;
}

/// Initialize the store when absent, then open it.
pub fn bootstrap<D: Database>(db: &mut D, path: &Path) -> Result<()> {
    if !db.exists(path) {
        info!(path = %path.display(), "player database absent, initializing");
        db.init(path)?;
    }
    db.open(path)
}
