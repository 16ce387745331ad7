//! Build systems recognised by their marker file.

use std::fmt;
use std::path::Path;

use crate::detection::file_exists;
use crate::shell::CommandLine;

/// A build system identified by a file in the repository root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildSystem {
    Make,
    CMake,
    Npm,
    Cargo,
}

/// One command in a build sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStep {
    pub command: CommandLine,
    pub elevated: bool,
}

impl BuildStep {
    fn plain(command: &str) -> Self {
        Self {
            command: CommandLine::parse(command),
            elevated: false,
        }
    }

    fn privileged(command: &str) -> Self {
        Self {
            command: CommandLine::parse(command),
            elevated: true,
        }
    }
}

impl BuildSystem {
    /// Detection priority order.
    pub const ALL: [BuildSystem; 4] = [
        BuildSystem::Make,
        BuildSystem::CMake,
        BuildSystem::Npm,
        BuildSystem::Cargo,
    ];

    /// The file whose presence selects this build system.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Make => "Makefile",
            Self::CMake => "CMakeLists.txt",
            Self::Npm => "package.json",
            Self::Cargo => "Cargo.toml",
        }
    }

    /// First build system whose marker exists in `repo_path`.
    pub fn detect(repo_path: &Path) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|bs| file_exists(repo_path, bs.marker()))
    }

    /// Commands to run, in order. Any failure aborts the rest.
    pub fn steps(&self) -> Vec<BuildStep> {
        match self {
            Self::Make => vec![
                BuildStep::plain("make"),
                BuildStep::privileged("make install"),
            ],
            Self::CMake => vec![
                BuildStep::plain("cmake ."),
                BuildStep::plain("make"),
                BuildStep::privileged("make install"),
            ],
            Self::Npm => vec![BuildStep::plain("npm install")],
            Self::Cargo => vec![BuildStep::plain("cargo build --release")],
        }
    }
}

impl fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Make => "make",
            Self::CMake => "cmake",
            Self::Npm => "npm",
            Self::Cargo => "cargo",
        };
        f.write_str(name)
    }
}
