//! Command implementations and dispatch.

use console::style;
use tracing::info;

use crate::config::ServerConfig;
use crate::db::{self, FileDatabase};
use crate::error::{Result, WarrenError};
use crate::playground;
use crate::session::{self, Session};
use crate::term::{CrosstermScreen, ScreenBackend, ScreenGuard};

use super::args::{Cli, Commands, ConnectArgs, ProvisionArgs};

/// Result of executing a command.
#[derive(Debug)]
pub struct CommandResult {
    pub exit_code: i32,
}

impl CommandResult {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }
}

/// Routes CLI subcommands to their implementations.
pub struct CommandDispatcher {
    config: ServerConfig,
    quiet: bool,
}

impl CommandDispatcher {
    pub fn new(config: ServerConfig, quiet: bool) -> Self {
        Self { config, quiet }
    }

    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Commands::Connect(args) => self.connect(args),
            Commands::Provision(args) => self.provision(args),
        }
    }

    /// Full per-connection bootstrap: database, terminal, session.
    fn connect(&self, args: &ConnectArgs) -> Result<CommandResult> {
        let mut database = FileDatabase::new();
        db::bootstrap(&mut database, &self.config.database)?;

        let session = connect_player(&self.config, CrosstermScreen::new(), &args.name)?;

        if !self.quiet {
            println!(
                "{}",
                style(format!(
                    "Session ready for '{}' at {}",
                    session.name(),
                    session.home().display()
                ))
                .green()
            );
        }
        Ok(CommandResult::ok())
    }

    /// Provision a playground without touching the terminal or database.
    fn provision(&self, args: &ProvisionArgs) -> Result<CommandResult> {
        playground::provision(
            &self.config.playground_root,
            &self.config.template_dir,
            &args.name,
        )?;

        let home = playground::home_dir(&self.config.playground_root, &args.name)?;
        if !self.quiet {
            println!(
                "{}",
                style(format!(
                    "Provisioned playground for '{}' at {}",
                    args.name,
                    home.display()
                ))
                .green()
            );
        }
        Ok(CommandResult::ok())
    }
}

/// Bring up the terminal, validate its geometry, and establish a session,
/// provisioning first-time players along the way.
///
/// The terminal guard spans the whole sequence; any failure path restores
/// the terminal before the error propagates. The gameplay layer takes over
/// from the returned session; the terminal is handed back to it separately,
/// so this function releases the guard before returning.
pub fn connect_player<B: ScreenBackend>(
    config: &ServerConfig,
    backend: B,
    name: &str,
) -> Result<Session> {
    let mut guard = ScreenGuard::acquire(backend)?;
    guard.validate_size(config.display.requirements())?;

    let session = match session::establish(&config.playground_root, name) {
        Err(WarrenError::NoSuchPlayground { .. }) => {
            info!(player = name, "first contact, provisioning playground");
            playground::provision(&config.playground_root, &config.template_dir, name)?;
            session::establish(&config.playground_root, name)?
        }
        other => other?,
    };

    guard.teardown();
    Ok(session)
}
