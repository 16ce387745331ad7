//! Build dispatch.

use std::path::Path;

use crate::error::{FkgitError, Result};
use crate::shell::{CommandOptions, CommandRunner};

use super::system::BuildSystem;

/// Detect the repository's build system and run its steps in the repository root.
///
/// Returns the build system that ran. A missing marker is
/// [`FkgitError::BuildSystemNotDetected`]; a failing step aborts the rest.
pub fn build_and_install(repo_path: &Path, runner: &dyn CommandRunner) -> Result<BuildSystem> {
    let build_system =
        BuildSystem::detect(repo_path).ok_or_else(|| FkgitError::BuildSystemNotDetected {
            path: repo_path.to_path_buf(),
        })?;

    tracing::info!(
        "Building {} with {}",
        repo_path.display(),
        build_system
    );

    for step in build_system.steps() {
        let mut options = CommandOptions::in_dir(repo_path);
        options.elevate = step.elevated;
        runner.run_checked(&step.command, &options)?;
    }

    Ok(build_system)
}
