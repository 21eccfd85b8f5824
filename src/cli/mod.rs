//! Command-line interface for warren.
//!
//! - [`args`] - argument definitions using clap derive macros
//! - [`commands`] - command implementations and dispatch

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ConnectArgs, ProvisionArgs};
pub use commands::{connect_player, CommandDispatcher, CommandResult};
