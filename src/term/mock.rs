//! Mock terminal backend for tests.
//!
//! Records acquire/release transitions so tests can assert the guard
//! restored the terminal, and in what order relative to reported errors.

use std::sync::{Arc, Mutex};

use crate::error::{Result, WarrenError};

use super::backend::ScreenBackend;

/// A state transition observed by the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    Acquired,
    Released,
}

/// Shared handle onto a mock's event record.
///
/// Stays valid after the guard has consumed (and possibly dropped) the
/// backend itself.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<ScreenEvent>>>,
}

impl EventLog {
    fn push(&self, event: ScreenEvent) {
        self.events.lock().expect("event log poisoned").push(event);
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<ScreenEvent> {
        self.events.lock().expect("event log poisoned").clone()
    }
}

/// Mock terminal with configurable geometry and failure modes.
#[derive(Debug)]
pub struct MockScreen {
    rows: u16,
    cols: u16,
    color: bool,
    fail_acquire: bool,
    fail_release: bool,
    log: EventLog,
}

impl MockScreen {
    /// Create a mock reporting the given `(rows, cols)` geometry.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            color: true,
            fail_acquire: false,
            fail_release: false,
            log: EventLog::default(),
        }
    }

    /// Configure reported color support.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Make `acquire` fail.
    pub fn failing_acquire(mut self) -> Self {
        self.fail_acquire = true;
        self
    }

    /// Make `release` fail.
    pub fn failing_release(mut self) -> Self {
        self.fail_release = true;
        self
    }

    /// Handle onto the event record; clone it out before handing the mock
    /// to a guard.
    pub fn log(&self) -> EventLog {
        self.log.clone()
    }
}

impl ScreenBackend for MockScreen {
    fn acquire(&mut self) -> Result<()> {
        if self.fail_acquire {
            return Err(WarrenError::Terminal {
                message: "mock acquire failure".into(),
            });
        }
        self.log.push(ScreenEvent::Acquired);
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        if self.fail_release {
            return Err(WarrenError::Terminal {
                message: "mock release failure".into(),
            });
        }
        self.log.push(ScreenEvent::Released);
        Ok(())
    }

    fn dimensions(&self) -> Result<(u16, u16)> {
        Ok((self.rows, self.cols))
    }

    fn supports_color(&self) -> bool {
        self.color
    }
}
