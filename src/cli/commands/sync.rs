//! `-S`: install, search (`-Ss`) and upgrade (`-Su`).

use crate::cli::args::SyncArgs;
use crate::error::{FkgitError, Result};
use crate::runner::{InstallOptions, InstallOutcome, Orchestrator};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The sync command implementation.
pub struct SyncCommand<'a> {
    orchestrator: &'a Orchestrator<'a>,
    args: SyncArgs,
}

impl<'a> SyncCommand<'a> {
    /// Create a new sync command.
    pub fn new(orchestrator: &'a Orchestrator<'a>, args: SyncArgs) -> Self {
        Self { orchestrator, args }
    }

    fn target(&self) -> Option<&str> {
        self.args
            .target
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    fn install_options(&self) -> InstallOptions {
        InstallOptions {
            noconfirm: self.args.noconfirm,
            auto: self.args.auto,
            pick: self.args.pick,
        }
    }
}

impl Command for SyncCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.search {
            let query = self.target().ok_or_else(|| FkgitError::Usage {
                message: "Usage: fkgit -Ss <query>".to_string(),
            })?;
            self.orchestrator.search(query, ui)?;
            return Ok(CommandResult::success());
        }

        if self.args.sysupgrade {
            let updated = self.orchestrator.update_all(ui)?;
            if !updated.is_empty() {
                ui.success(&format!("Updated {} package(s)", updated.len()));
            }
            if self.target().is_none() {
                return Ok(CommandResult::success());
            }
        }

        let target = self.target().ok_or_else(|| FkgitError::Usage {
            message: "Usage: fkgit -S <owner/name | query>".to_string(),
        })?;

        match self
            .orchestrator
            .install(target, &self.install_options(), ui)?
        {
            InstallOutcome::Installed { name, path, .. } => {
                ui.success(&format!("Installed {} in {}", name, path.display()));
            }
            outcome => tracing::debug!("Install ended early: {:?}", outcome),
        }

        Ok(CommandResult::success())
    }
}
