//! Idempotent playground directory provisioning.

use std::fs::DirBuilder;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Result, WarrenError};

use super::paths;
use super::templates::seed_templates;

#[cfg(unix)]
use std::os::unix::fs::DirBuilderExt;

/// Permission bits for player directories: owner-only access.
#[cfg(unix)]
const PLAYGROUND_MODE: u32 = 0o700;

/// Create the two-level playground for `name` and seed it with templates.
///
/// Safe to call for an already-provisioned player: existing directories are
/// left alone and existing per-player files are never truncated (though
/// re-seeding appends template bytes again). Template seeding is
/// best-effort; a missing or partially unreadable template directory leaves
/// the playground usable and is only logged.
pub fn provision(root: &Path, template_dir: &Path, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(WarrenError::InvalidName);
    }

    let shard = paths::shard_dir(root, name)?;
    let home = paths::home_dir(root, name)?;

    create_restricted(&shard).map_err(|err| WarrenError::ProvisionFailed {
        name: name.to_string(),
        message: format!("create {}: {err}", shard.display()),
    })?;
    create_restricted(&home).map_err(|err| WarrenError::ProvisionFailed {
        name: name.to_string(),
        message: format!("create {}: {err}", home.display()),
    })?;

    if !home.is_dir() {
        return Err(WarrenError::ProvisionFailed {
            name: name.to_string(),
            message: format!("{} is not accessible after creation", home.display()),
        });
    }
    debug!(player = name, home = %home.display(), "playground directories ready");

    match seed_templates(template_dir, &home) {
        Ok(outcome) => {
            if !outcome.is_complete() {
                warn!(
                    player = name,
                    skipped = outcome.skipped.len(),
                    "some templates could not be seeded"
                );
            }
            info!(
                player = name,
                seeded = outcome.seeded.len(),
                "playground provisioned"
            );
        }
        Err(err) => {
            warn!(player = name, error = %err, "template seeding unavailable, playground left unseeded");
        }
    }

    Ok(())
}

/// Create a directory with owner-only permissions, tolerating existing ones.
///
/// Recursive creation also covers a missing playground root on first use.
fn create_restricted(dir: &Path) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(PLAYGROUND_MODE);
    builder.create(dir)
}
