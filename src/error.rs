//! Error types for warren operations.
//!
//! This module defines [`WarrenError`], the primary error type used throughout
//! the server, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `WarrenError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `WarrenError::Other`) for unexpected errors
//! - Recoverable filesystem errors are logged where they occur and returned
//!   up as results; only genuinely unrecoverable conditions (display too
//!   small, terminal acquisition failure) terminate the process

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for warren operations.
#[derive(Debug, Error)]
pub enum WarrenError {
    /// Empty player identifier; caller error, always recoverable.
    #[error("Invalid player name: must not be empty")]
    InvalidName,

    /// Constructed path exceeds the supported maximum length.
    #[error("Path too long ({length} bytes, limit {limit}): {path}")]
    PathTooLong {
        path: PathBuf,
        length: usize,
        limit: usize,
    },

    /// The shared template directory could not be opened for listing.
    #[error("Template directory unavailable: {path}")]
    TemplateDirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Playground directory creation or verification failed.
    #[error("Failed to provision playground for '{name}': {message}")]
    ProvisionFailed { name: String, message: String },

    /// Session requested for a player who was never provisioned.
    #[error("No playground exists for player '{name}'")]
    NoSuchPlayground { name: String },

    /// The terminal is smaller than the game's required display size.
    #[error("Display too small: {rows}x{cols}, need at least {min_rows}x{min_cols}")]
    DisplayTooSmall {
        rows: u16,
        cols: u16,
        min_rows: u16,
        min_cols: u16,
    },

    /// Terminal acquisition or restoration failed.
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    /// Database bootstrap failed.
    #[error("Database error at {path}: {message}")]
    Database { path: PathBuf, message: String },

    /// Failed to parse the server configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WarrenError {
    /// Whether this error must terminate the process.
    ///
    /// Fatal errors still require terminal teardown before exit.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            WarrenError::DisplayTooSmall { .. } | WarrenError::Terminal { .. }
        )
    }
}

/// Result type alias for warren operations.
pub type Result<T> = std::result::Result<T, WarrenError>;
