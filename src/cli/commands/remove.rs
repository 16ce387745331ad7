//! `-R`: remove an installed package.

use crate::cli::args::RemoveArgs;
use crate::error::Result;
use crate::runner::Orchestrator;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The remove command implementation.
pub struct RemoveCommand<'a> {
    orchestrator: &'a Orchestrator<'a>,
    args: RemoveArgs,
}

impl<'a> RemoveCommand<'a> {
    /// Create a new remove command.
    pub fn new(orchestrator: &'a Orchestrator<'a>, args: RemoveArgs) -> Self {
        Self { orchestrator, args }
    }
}

impl Command for RemoveCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let name = self.args.name.trim();
        if self.orchestrator.remove(name, ui)?.is_none() {
            ui.warning(&format!("{} is not installed", name));
        }
        Ok(CommandResult::success())
    }
}
