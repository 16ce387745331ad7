//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI operations

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::{FkgitError, Result};
use crate::registry::{RepositorySearch, SearchClient};
use crate::runner::Orchestrator;
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::{FkgitTheme, UserInterface};

use super::query::QueryCommand;
use super::remove::RemoveCommand;
use super::sync::SyncCommand;

/// Trait for command implementations.
///
/// Each CLI operation implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI operations to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher with resolved settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Dispatch against the real system: spawned processes and the HTTP search API.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut runner = SystemRunner::new(&self.settings.elevate_command);
        if ui.output_mode().shows_command_output() {
            runner = runner.with_echo(FkgitTheme::detect());
        }
        let search = SearchClient::new(
            &self.settings.api_url,
            self.settings.github_token.clone(),
            self.settings.search_timeout,
        )?;
        self.dispatch_with(cli, &runner, &search, ui)
    }

    /// Dispatch with explicit collaborators.
    pub fn dispatch_with(
        &self,
        cli: &Cli,
        runner: &dyn CommandRunner,
        search: &dyn RepositorySearch,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let orchestrator = Orchestrator::new(&self.settings, runner, search);

        match &cli.command {
            Some(Commands::Sync(args)) => {
                let cmd = SyncCommand::new(&orchestrator, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Remove(args)) => {
                let cmd = RemoveCommand::new(&orchestrator, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Query(_)) => {
                let cmd = QueryCommand::new(&orchestrator);
                cmd.execute(ui)
            }
            None => Err(FkgitError::Usage {
                message: "No operation specified".to_string(),
            }),
        }
    }
}
