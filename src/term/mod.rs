//! Terminal environment management.
//!
//! The server owns the terminal as a single resource: acquired once at
//! startup, validated against the game's required display geometry, and
//! restored on every exit path including fatal ones.
//!
//! - [`ScreenBackend`] - trait over the concrete terminal library, so the
//!   guard can be exercised with a mock in tests
//! - [`CrosstermScreen`] - the real backend
//! - [`ScreenGuard`] - RAII acquisition with guaranteed teardown
//! - [`MockScreen`] - recording backend for tests

pub mod backend;
pub mod guard;
pub mod mock;

pub use backend::{CrosstermScreen, ScreenBackend};
pub use guard::ScreenGuard;
pub use mock::MockScreen;

/// Minimum display geometry the game layout needs.
///
/// Checked once at startup; later resizes are not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRequirements {
    pub min_rows: u16,
    pub min_cols: u16,
}

impl Default for DisplayRequirements {
    /// The classic full-screen game layout: 24 rows by 80 columns.
    fn default() -> Self {
        Self {
            min_rows: 24,
            min_cols: 80,
        }
    }
}
