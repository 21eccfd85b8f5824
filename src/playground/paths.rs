//! Playground path construction.
//!
//! Pure path building for the sharded playground layout. The shard level is
//! the first character of the player name, bounding directory fan-out under
//! the root. Construction never touches the filesystem and never truncates:
//! a path that would exceed [`MAX_PATH_BYTES`] is rejected outright, since a
//! silently shortened path could name a different, existing directory.

use std::path::{Path, PathBuf};

use crate::error::{Result, WarrenError};

/// Maximum supported path length in bytes.
///
/// Matches `PATH_MAX` on the platforms the server targets.
pub const MAX_PATH_BYTES: usize = 4096;

/// Shard directory for a player: `root/<first-char-of-name>`.
pub fn shard_dir(root: &Path, name: &str) -> Result<PathBuf> {
    let key = shard_key(name)?;
    bounded(root.join(key))
}

/// Home directory for a player: `root/<first-char-of-name>/<name>`.
pub fn home_dir(root: &Path, name: &str) -> Result<PathBuf> {
    let key = shard_key(name)?;
    bounded(root.join(key).join(name))
}

/// First character of the player name, as the shard key.
fn shard_key(name: &str) -> Result<String> {
    name.chars()
        .next()
        .map(String::from)
        .ok_or(WarrenError::InvalidName)
}

fn bounded(path: PathBuf) -> Result<PathBuf> {
    let length = path.as_os_str().len();
    if length > MAX_PATH_BYTES {
        return Err(WarrenError::PathTooLong {
            path,
            length,
            limit: MAX_PATH_BYTES,
        });
    }
    Ok(path)
}
