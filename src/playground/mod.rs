//! Player playground provisioning.
//!
//! A playground is a player's private, persistent directory for save data
//! and per-player configuration. Playgrounds live in a two-level sharded
//! layout under a configured root: `<root>/<first-char>/<name>`. First
//! contact provisions the directory tree and seeds it with a copy of every
//! shared template file; returning players keep whatever they have written.
//!
//! - [`paths`] - path construction for shard and home directories
//! - [`templates`] - best-effort template seeding
//! - [`provision`] - idempotent directory provisioning

pub mod paths;
pub mod provision;
pub mod templates;

pub use paths::{home_dir, shard_dir, MAX_PATH_BYTES};
pub use provision::provision;
pub use templates::{seed_templates, SeedOutcome};
