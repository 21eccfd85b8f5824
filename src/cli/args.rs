//! CLI argument definitions.
//!
//! All arguments are defined with clap's derive macros. The main entry
//! point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Warren - terminal multi-player game server.
#[derive(Debug, Parser)]
#[command(name = "warren")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides the default warren.yml lookup)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Connect a player: provision on first contact, then start a session
    Connect(ConnectArgs),

    /// Provision a player's playground without starting a session
    Provision(ProvisionArgs),
}

/// Arguments for the `connect` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ConnectArgs {
    /// Player name
    pub name: String,
}

/// Arguments for the `provision` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ProvisionArgs {
    /// Player name
    pub name: String,
}
