//! The seam every external process goes through.

use std::path::Path;

use super::command::{execute, CommandLine, CommandOptions, CommandResult};
use super::platform::is_elevated;
use crate::error::Result;
use crate::ui::FkgitTheme;

/// Runs external commands.
///
/// Workflows never spawn processes directly; they hold a `&dyn CommandRunner`
/// so tests can substitute [`RecordingRunner`](super::RecordingRunner).
pub trait CommandRunner {
    /// Run a command to completion and report how it went.
    ///
    /// A non-zero exit is `Ok` with `success == false`; only a failure to
    /// spawn is an `Err`.
    fn run(&self, command: &CommandLine, options: &CommandOptions) -> Result<CommandResult>;

    /// Run a command and turn a non-zero exit into an error.
    fn run_checked(&self, command: &CommandLine, options: &CommandOptions) -> Result<CommandResult> {
        self.run(command, options)?.into_checked(command)
    }

    /// Run a command silently and report whether it succeeded.
    fn check(&self, command: &CommandLine, cwd: Option<&Path>) -> bool {
        let options = CommandOptions {
            cwd: cwd.map(Path::to_path_buf),
            ..CommandOptions::quiet()
        };
        self.run(command, &options)
            .map(|r| r.success)
            .unwrap_or(false)
    }
}

/// Spawns real processes.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    elevate_with: Option<String>,
    echo: Option<FkgitTheme>,
}

impl SystemRunner {
    /// Create a runner that prefixes privileged commands with `elevate_command`.
    ///
    /// When the process already runs as root the prefix is dropped.
    pub fn new(elevate_command: &str) -> Self {
        let elevate_with = if is_elevated() || elevate_command.trim().is_empty() {
            None
        } else {
            Some(elevate_command.to_string())
        };
        Self {
            elevate_with,
            echo: None,
        }
    }

    /// Print each visible command to stderr, styled with `theme`, before it runs.
    ///
    /// Silent probes (captured output) are never echoed.
    pub fn with_echo(mut self, theme: FkgitTheme) -> Self {
        self.echo = Some(theme);
        self
    }

    /// The prefix used for privileged commands, if any.
    pub fn elevate_with(&self) -> Option<&str> {
        self.elevate_with.as_deref()
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandLine, options: &CommandOptions) -> Result<CommandResult> {
        let resolved = match (&self.elevate_with, options.elevate) {
            (Some(prefix), true) => command.elevated_with(prefix),
            _ => command.clone(),
        };
        if let Some(theme) = self.echo.as_ref().filter(|_| !options.capture_stdout) {
            eprintln!("{}", theme.format_command(&resolved.to_string()));
        }
        tracing::debug!(
            "Running `{}` in {:?}",
            resolved,
            options.cwd.as_deref().unwrap_or(Path::new("."))
        );
        execute(&resolved, options)
    }
}
