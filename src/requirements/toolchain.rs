//! Base development toolchain per package manager.

use crate::detection::PackageManager;
use crate::error::Result;
use crate::shell::{CommandLine, CommandOptions, CommandRunner};

/// What a package manager calls its "development tools" bundle.
pub fn toolchain_package(pm: PackageManager) -> &'static str {
    match pm {
        PackageManager::Apt => "build-essential",
        PackageManager::Pacman => "base-devel",
        PackageManager::Dnf => "@development-tools",
        PackageManager::Zypper => "patterns-devel-base-devel_basis",
        PackageManager::Emerge => "@world",
    }
}

/// Command that succeeds when the toolchain is already installed.
pub fn toolchain_check(pm: PackageManager) -> CommandLine {
    let package = toolchain_package(pm);
    match pm {
        PackageManager::Apt => CommandLine::new("dpkg").arg("-s").arg(package),
        PackageManager::Pacman => CommandLine::new("pacman").arg("-Q").arg(package),
        PackageManager::Dnf | PackageManager::Zypper => {
            CommandLine::new("rpm").arg("-q").arg(package)
        }
        PackageManager::Emerge => CommandLine::new("emerge").arg("--info").arg(package),
    }
}

/// Outcome of [`ensure_base_toolchain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolchainStatus {
    AlreadyInstalled,
    Installed,
}

/// Install the toolchain unless the check command says it is present.
///
/// A failed install is fatal.
pub fn ensure_base_toolchain(
    pm: PackageManager,
    runner: &dyn CommandRunner,
) -> Result<ToolchainStatus> {
    if runner.check(&toolchain_check(pm), None) {
        tracing::debug!("{} already installed", toolchain_package(pm));
        return Ok(ToolchainStatus::AlreadyInstalled);
    }

    let install = pm.install_command(toolchain_package(pm));
    tracing::info!("Installing base toolchain via {}", pm);
    runner.run_checked(&install, &CommandOptions::default().elevated())?;
    Ok(ToolchainStatus::Installed)
}
