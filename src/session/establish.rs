//! Session establishment for provisioned players.

use std::path::Path;

use tracing::debug;

use crate::error::{Result, WarrenError};
use crate::playground;

use super::record::Session;

/// Establish a session for `name` under the playground root.
///
/// The player must already be provisioned: a missing home directory fails
/// with [`WarrenError::NoSuchPlayground`] and leaves no session state
/// behind. Callers provision first-time players before retrying.
pub fn establish(root: &Path, name: &str) -> Result<Session> {
    if name.is_empty() {
        return Err(WarrenError::InvalidName);
    }

    let home = playground::home_dir(root, name)?;
    if !home.is_dir() {
        debug!(player = name, home = %home.display(), "no playground on disk");
        return Err(WarrenError::NoSuchPlayground {
            name: name.to_string(),
        });
    }

    let mut session = Session::new(name, home);
    let home_entry = format!("HOME={}", session.home().display());
    session.push_env(home_entry);
    debug!(player = name, "session established");
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn establishes_for_provisioned_player() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("userdata");
        fs::create_dir_all(root.join("m/mira")).unwrap();

        let session = establish(&root, "mira").unwrap();

        assert_eq!(session.name(), "mira");
        assert_eq!(session.home(), root.join("m/mira"));
        assert!(!session.is_logged());
    }

    #[test]
    fn home_matches_path_builder() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("userdata");
        fs::create_dir_all(root.join("m/mira")).unwrap();

        let session = establish(&root, "mira").unwrap();

        assert_eq!(
            session.home(),
            playground::home_dir(&root, "mira").unwrap()
        );
    }

    #[test]
    fn unprovisioned_player_is_rejected() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("userdata");

        let err = establish(&root, "ghost").unwrap_err();

        assert!(matches!(
            err,
            WarrenError::NoSuchPlayground { ref name } if name == "ghost"
        ));
    }

    #[test]
    fn empty_name_is_rejected() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            establish(temp.path(), ""),
            Err(WarrenError::InvalidName)
        ));
    }

    #[test]
    fn session_env_exposes_playground_home() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("userdata");
        fs::create_dir_all(root.join("m/mira")).unwrap();

        let session = establish(&root, "mira").unwrap();

        let expected = format!("HOME={}", root.join("m/mira").display());
        assert!(session.env().contains(&expected));
    }
}
