//! Player session tracking.
//!
//! A [`Session`] identifies the currently connected player and their
//! playground location for the duration of one connection. It is passed
//! explicitly through the call chain rather than held in process-wide
//! state, so the bootstrap layer stays testable and a future server could
//! hold several at once.

mod establish;
mod record;

pub use establish::establish;
pub use record::Session;
