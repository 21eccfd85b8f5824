//! Owned terminal state with guaranteed teardown.

use tracing::{debug, warn};

use crate::error::{Result, WarrenError};

use super::backend::ScreenBackend;
use super::DisplayRequirements;

/// Exclusive owner of the terminal display state.
///
/// Acquiring the guard switches the terminal into game mode; dropping it
/// (or calling [`ScreenGuard::teardown`]) restores normal mode. Leaving the
/// terminal raw on any exit path, fatal ones included, is a correctness
/// bug, so restoration is tied to the guard's lifetime rather than to any
/// particular control flow.
pub struct ScreenGuard<B: ScreenBackend> {
    backend: B,
    color: bool,
    active: bool,
}

impl<B: ScreenBackend> ScreenGuard<B> {
    /// Acquire the terminal, enabling color when the backend supports it.
    pub fn acquire(mut backend: B) -> Result<Self> {
        backend.acquire()?;
        let color = backend.supports_color();
        debug!(color, "terminal acquired");
        Ok(Self {
            backend,
            color,
            active: true,
        })
    }

    /// Check the current dimensions against `req`.
    ///
    /// Insufficient geometry is fatal: the terminal is fully restored to
    /// normal mode *before* the error is reported, and the guard is inert
    /// afterwards. A backend that cannot report its size at all is treated
    /// the same way.
    pub fn validate_size(&mut self, req: DisplayRequirements) -> Result<()> {
        let (rows, cols) = match self.backend.dimensions() {
            Ok(dims) => dims,
            Err(err) => {
                self.teardown();
                return Err(err);
            }
        };
        if rows < req.min_rows || cols < req.min_cols {
            self.teardown();
            return Err(WarrenError::DisplayTooSmall {
                rows,
                cols,
                min_rows: req.min_rows,
                min_cols: req.min_cols,
            });
        }
        debug!(rows, cols, "display size validated");
        Ok(())
    }

    /// Whether color output was enabled at acquisition.
    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Whether the guard still owns a live terminal state.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Restore the terminal to normal mode.
    ///
    /// Idempotent. Restoration failures are logged, not escalated: at this
    /// point the process is on its way out and has nothing better to do.
    pub fn teardown(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Err(err) = self.backend.release() {
            warn!(error = %err, "terminal restore failed");
        }
    }
}

impl<B: ScreenBackend> Drop for ScreenGuard<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::mock::{MockScreen, ScreenEvent};

    #[test]
    fn acquire_switches_backend_into_game_mode() {
        let screen = MockScreen::new(30, 100);
        let log = screen.log();

        let guard = ScreenGuard::acquire(screen).unwrap();

        assert!(guard.is_active());
        assert_eq!(log.events(), vec![ScreenEvent::Acquired]);
    }

    #[test]
    fn sufficient_display_passes_validation() {
        let screen = MockScreen::new(24, 80);
        let mut guard = ScreenGuard::acquire(screen).unwrap();

        guard
            .validate_size(DisplayRequirements::default())
            .unwrap();

        assert!(guard.is_active());
    }

    #[test]
    fn too_small_display_restores_terminal_before_failing() {
        let screen = MockScreen::new(20, 70);
        let log = screen.log();
        let mut guard = ScreenGuard::acquire(screen).unwrap();

        let err = guard
            .validate_size(DisplayRequirements::default())
            .unwrap_err();

        assert!(matches!(
            err,
            WarrenError::DisplayTooSmall {
                rows: 20,
                cols: 70,
                min_rows: 24,
                min_cols: 80
            }
        ));
        assert!(!guard.is_active());
        assert_eq!(
            log.events(),
            vec![ScreenEvent::Acquired, ScreenEvent::Released]
        );
    }

    #[test]
    fn narrow_display_fails_even_with_enough_rows() {
        let screen = MockScreen::new(50, 79);
        let mut guard = ScreenGuard::acquire(screen).unwrap();

        let err = guard
            .validate_size(DisplayRequirements::default())
            .unwrap_err();

        assert!(err.is_fatal());
        assert!(!guard.is_active());
    }

    #[test]
    fn drop_restores_terminal() {
        let screen = MockScreen::new(30, 100);
        let log = screen.log();

        {
            let _guard = ScreenGuard::acquire(screen).unwrap();
        }

        assert_eq!(
            log.events(),
            vec![ScreenEvent::Acquired, ScreenEvent::Released]
        );
    }

    #[test]
    fn teardown_is_idempotent() {
        let screen = MockScreen::new(30, 100);
        let log = screen.log();
        let mut guard = ScreenGuard::acquire(screen).unwrap();

        guard.teardown();
        guard.teardown();
        drop(guard);

        assert_eq!(
            log.events(),
            vec![ScreenEvent::Acquired, ScreenEvent::Released]
        );
    }

    #[test]
    fn failed_acquisition_reports_terminal_error() {
        let screen = MockScreen::new(30, 100).failing_acquire();

        let err = ScreenGuard::acquire(screen).unwrap_err();

        assert!(matches!(err, WarrenError::Terminal { .. }));
    }

    #[test]
    fn color_support_is_recorded_at_acquisition() {
        let screen = MockScreen::new(30, 100).with_color(true);
        let guard = ScreenGuard::acquire(screen).unwrap();
        assert!(guard.color_enabled());

        let screen = MockScreen::new(30, 100).with_color(false);
        let guard = ScreenGuard::acquire(screen).unwrap();
        assert!(!guard.color_enabled());
    }
}
