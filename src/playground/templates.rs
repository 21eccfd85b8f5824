//! Template seeding into player playgrounds.
//!
//! Every non-hidden regular file in the shared template directory maps to a
//! hidden file of the same base name inside the playground: template `rc`
//! becomes `<home>/.rc`. Seeding appends, never truncates, so a returning
//! player's edits survive. Per-file failures are logged and skipped; one
//! unreadable template must not block the rest.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, WarrenError};

/// Outcome of one seeding pass over a template directory.
#[derive(Debug, Default)]
pub struct SeedOutcome {
    /// Template names whose bytes reached the playground.
    pub seeded: Vec<String>,
    /// Template names skipped after an open or copy failure.
    pub skipped: Vec<String>,
}

impl SeedOutcome {
    /// True when every template present at call time was seeded.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Seed `dest_dir` with one copy of every template in `template_dir`.
///
/// Guarantees that after a successful call every template present at call
/// time has a corresponding hidden file in `dest_dir`. Calling it twice is
/// safe at the existence level but appends the template bytes again; the
/// caller decides whether re-seeding an already-provisioned playground is
/// worth the duplication.
///
/// Fails with [`WarrenError::TemplateDirUnavailable`] only when the template
/// directory itself cannot be listed.
pub fn seed_templates(template_dir: &Path, dest_dir: &Path) -> Result<SeedOutcome> {
    let entries =
        std::fs::read_dir(template_dir).map_err(|source| WarrenError::TemplateDirUnavailable {
            path: template_dir.to_path_buf(),
            source,
        })?;

    let mut outcome = SeedOutcome::default();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "unreadable template directory entry, skipping");
                continue;
            }
        };

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!(entry = %file_name.to_string_lossy(), "template name is not UTF-8, skipping");
            outcome.skipped.push(file_name.to_string_lossy().into_owned());
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        match entry.file_type() {
            Ok(kind) if kind.is_file() => {}
            _ => continue,
        }

        let dest = dest_dir.join(format!(".{name}"));
        match append_copy(&entry.path(), &dest) {
            Ok(bytes) => {
                debug!(template = name, bytes, "seeded template");
                outcome.seeded.push(name.to_string());
            }
            Err(err) => {
                warn!(template = name, error = %err, "failed to seed template, skipping");
                outcome.skipped.push(name.to_string());
            }
        }
    }

    Ok(outcome)
}

/// Append the full contents of `src` to `dest`, creating `dest` if missing.
///
/// Existing bytes in `dest` are never truncated or overwritten. Handles are
/// scoped to this one copy; both close when the function returns.
fn append_copy(src: &Path, dest: &Path) -> io::Result<u64> {
    let mut reader = BufReader::new(File::open(src)?);
    let mut writer = BufWriter::new(
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(dest)?,
    );
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(bytes)
}
