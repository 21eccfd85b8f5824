//! Warren - bootstrap layer for a terminal multi-player game server.
//!
//! Warren brings a player connection from first contact to a ready session:
//! it checks and opens the persistent player database, acquires and
//! validates the terminal display, provisions a per-player playground
//! directory on first contact, and establishes the in-memory session the
//! gameplay layer runs against.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Server configuration loading and defaults
//! - [`db`] - Player database bootstrap sequencing
//! - [`error`] - Error types and result aliases
//! - [`playground`] - Sharded playground provisioning and template seeding
//! - [`session`] - Per-connection session records and establishment
//! - [`term`] - Terminal acquisition, validation, and guaranteed teardown
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use warren::playground;
//!
//! // Playgrounds live in a two-level sharded layout under the root.
//! let home = playground::home_dir(Path::new("/srv/userdata"), "mira").unwrap();
//! assert_eq!(home, Path::new("/srv/userdata/m/mira"));
//! ```
//!
//! For the full bootstrap sequence, see [`cli::connect_player`] and the
//! integration tests.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod playground;
pub mod session;
pub mod term;

pub use error::{Result, WarrenError};
