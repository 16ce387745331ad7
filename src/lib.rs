//! fkgit - install software straight from GitHub repositories.
//!
//! fkgit searches GitHub, clones a repository into a local install root,
//! installs a base toolchain and README-declared dependencies with the host's
//! package manager, and runs the repository's own build system. Installed
//! packages can be rebuilt in bulk or removed again.
//!
//! # Modules
//!
//! - [`build`] - Build-system detection and dispatch
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file loading and resolution
//! - [`detection`] - Package-manager and marker-file detection
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Install root, git fetching and repository search
//! - [`requirements`] - Base toolchain and README dependency installation
//! - [`runner`] - Install, search, update and remove workflows
//! - [`shell`] - External command execution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use fkgit::requirements::parse_dependencies;
//!
//! let readme = "# tool\n\nDependencies:\nlibssl zlib\n\nUsage: tool --help\n";
//! assert_eq!(parse_dependencies(readme), vec!["libssl", "zlib"]);
//! ```
//!
//! For end-to-end CLI behavior, see the integration tests.

pub mod build;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod registry;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{FkgitError, Result};
