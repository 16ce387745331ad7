//! `-R`: uninstall and delete a package.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;
use crate::shell::{CommandLine, CommandOptions};
use crate::ui::UserInterface;

use super::Orchestrator;

/// How far the uninstall got before the directory was deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UninstallOutcome {
    /// `make uninstall` succeeded.
    Uninstalled,
    /// `make uninstall` failed, `make remove` succeeded.
    Removed,
    /// Neither target worked; only the directory was deleted.
    NotUninstalled,
}

/// Make targets tried in order, each paired with its outcome.
const UNINSTALL_TARGETS: [(&str, UninstallOutcome); 2] = [
    ("uninstall", UninstallOutcome::Uninstalled),
    ("remove", UninstallOutcome::Removed),
];

impl Orchestrator<'_> {
    /// Remove the package called `name`.
    ///
    /// Returns `None` when nothing by that name is installed.
    pub fn remove(
        &self,
        name: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<Option<UninstallOutcome>> {
        if !self.install_root().is_installed(name)? {
            tracing::debug!("{} is not installed", name);
            return Ok(None);
        }
        let repo_path = self.install_root().package_path(name)?;

        let outcome = self.uninstall(&repo_path);
        if outcome == UninstallOutcome::NotUninstalled {
            ui.warning(&format!(
                "Could not run make uninstall for {}; deleting files only",
                name
            ));
        }

        self.delete_tree(&repo_path)?;
        ui.success(&format!("Removed {}", name));
        Ok(Some(outcome))
    }

    fn uninstall(&self, repo_path: &Path) -> UninstallOutcome {
        let options = CommandOptions::in_dir(repo_path).elevated();

        for (target, outcome) in UNINSTALL_TARGETS {
            let command = CommandLine::new("make").arg(target);
            let ok = self
                .runner
                .run(&command, &options)
                .map(|r| r.success)
                .unwrap_or(false);
            if ok {
                return outcome;
            }
            tracing::debug!("make {} failed in {}", target, repo_path.display());
        }

        UninstallOutcome::NotUninstalled
    }

    /// Delete the repository, escalating to `rm -rf` when permission is denied.
    fn delete_tree(&self, repo_path: &Path) -> Result<()> {
        match fs::remove_dir_all(repo_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                tracing::info!(
                    "Permission denied deleting {}, retrying elevated",
                    repo_path.display()
                );
                let rm = CommandLine::new("rm")
                    .arg("-rf")
                    .arg(repo_path.to_string_lossy());
                self.runner
                    .run_checked(&rm, &CommandOptions::default().elevated())?;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
