//! `-Q`: list installed packages.

use crate::error::Result;
use crate::runner::Orchestrator;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The query command implementation.
pub struct QueryCommand<'a> {
    orchestrator: &'a Orchestrator<'a>,
}

impl<'a> QueryCommand<'a> {
    /// Create a new query command.
    pub fn new(orchestrator: &'a Orchestrator<'a>) -> Self {
        Self { orchestrator }
    }
}

impl Command for QueryCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.orchestrator.list_installed(ui)?;
        Ok(CommandResult::success())
    }
}
