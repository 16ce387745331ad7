//! Native package manager detection.

use std::fmt;

use crate::shell::{CommandLine, CommandRunner};

/// A native package manager fkgit knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Apt,
    Pacman,
    Dnf,
    Zypper,
    Emerge,
}

impl PackageManager {
    /// All managers in probe priority order.
    pub const ALL: [PackageManager; 5] = [
        PackageManager::Apt,
        PackageManager::Pacman,
        PackageManager::Dnf,
        PackageManager::Zypper,
        PackageManager::Emerge,
    ];

    /// The executable whose presence identifies this manager.
    pub fn executable(&self) -> &'static str {
        match self {
            Self::Apt => "apt",
            Self::Pacman => "pacman",
            Self::Dnf => "dnf",
            Self::Zypper => "zypper",
            Self::Emerge => "emerge",
        }
    }

    /// Command installing `package` non-interactively. Needs elevation.
    pub fn install_command(&self, package: &str) -> CommandLine {
        let base = match self {
            Self::Apt => "apt-get install -y",
            Self::Pacman => "pacman -S --noconfirm",
            Self::Dnf => "dnf install -y",
            Self::Zypper => "zypper install -y",
            Self::Emerge => "emerge --ask n",
        };
        CommandLine::parse(base).arg(package)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}

/// Probes the host for a supported package manager.
pub struct PackageManagerDetector;

impl PackageManagerDetector {
    /// Return the first manager whose executable is on `PATH`.
    pub fn detect(runner: &dyn CommandRunner) -> Option<PackageManager> {
        let found = PackageManager::ALL.into_iter().find(|pm| {
            runner.check(&CommandLine::new("which").arg(pm.executable()), None)
        });

        match found {
            Some(pm) => tracing::debug!("Detected package manager: {}", pm),
            None => tracing::debug!("No supported package manager found"),
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::RecordingRunner;

    #[test]
    fn detects_nothing_when_no_manager_present() {
        let runner = RecordingRunner::new();
        assert_eq!(PackageManagerDetector::detect(&runner), None);
        assert_eq!(runner.commands().len(), PackageManager::ALL.len());
    }

    #[test]
    fn each_manager_is_detected_alone() {
        for pm in PackageManager::ALL {
            let runner = RecordingRunner::new().with_available(&[pm.executable()]);
            assert_eq!(PackageManagerDetector::detect(&runner), Some(pm));
        }
    }

    #[test]
    fn first_in_priority_order_wins() {
        let runner = RecordingRunner::new().with_available(&["zypper", "pacman", "emerge"]);
        assert_eq!(
            PackageManagerDetector::detect(&runner),
            Some(PackageManager::Pacman)
        );
    }

    #[test]
    fn probing_stops_at_first_match() {
        let runner = RecordingRunner::new().with_available(&["apt", "dnf"]);
        PackageManagerDetector::detect(&runner);
        assert_eq!(runner.commands(), vec!["which apt".to_string()]);
    }

    #[test]
    fn install_commands_per_manager() {
        let cases = [
            (PackageManager::Apt, "apt-get install -y zlib"),
            (PackageManager::Pacman, "pacman -S --noconfirm zlib"),
            (PackageManager::Dnf, "dnf install -y zlib"),
            (PackageManager::Zypper, "zypper install -y zlib"),
            (PackageManager::Emerge, "emerge --ask n zlib"),
        ];
        for (pm, expected) in cases {
            assert_eq!(pm.install_command("zlib").to_string(), expected);
        }
    }

    #[test]
    fn display_is_executable_name() {
        assert_eq!(PackageManager::Zypper.to_string(), "zypper");
    }
}
