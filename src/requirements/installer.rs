//! Best-effort installation of README-declared dependencies.

use std::path::Path;

use crate::detection::PackageManager;
use crate::error::Result;
use crate::shell::{CommandOptions, CommandRunner};

use super::readme::dependencies_from_readme;

/// What happened to each declared dependency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyReport {
    /// Dependencies whose install command succeeded.
    pub installed: Vec<String>,
    /// Dependencies whose install command failed or could not be spawned.
    pub failed: Vec<String>,
}

impl DependencyReport {
    /// True when nothing was attempted.
    pub fn is_empty(&self) -> bool {
        self.installed.is_empty() && self.failed.is_empty()
    }

    /// True when no dependency failed (test-only helper).
    #[cfg(test)]
    fn all_installed(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Install each dependency in turn, recording failures and carrying on.
pub fn install_dependencies(
    pm: PackageManager,
    dependencies: &[String],
    runner: &dyn CommandRunner,
) -> DependencyReport {
    let mut report = DependencyReport::default();

    for dep in dependencies {
        let command = pm.install_command(dep);
        let ok = runner
            .run(&command, &CommandOptions::default().elevated())
            .map(|r| r.success)
            .unwrap_or(false);

        if ok {
            report.installed.push(dep.clone());
        } else {
            tracing::warn!("Failed to install dependency: {}", dep);
            report.failed.push(dep.clone());
        }
    }

    report
}

/// Parse the repository README and install what it declares.
///
/// Only an unreadable README is an error; a missing one installs nothing.
pub fn install_readme_dependencies(
    pm: PackageManager,
    repo_path: &Path,
    runner: &dyn CommandRunner,
) -> Result<DependencyReport> {
    let dependencies = dependencies_from_readme(repo_path)?;
    Ok(install_dependencies(pm, &dependencies, runner))
}
