//! Error types for fkgit operations.
//!
//! This module defines [`FkgitError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FkgitError` for failures that end a workflow and need a distinct
//!   message or exit code
//! - Use `anyhow::Error` (via `FkgitError::Other`) for unexpected errors
//! - Best-effort steps (dependency installs, uninstall fallbacks) never
//!   produce an error; they return a report instead

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fkgit operations.
#[derive(Debug, Error)]
pub enum FkgitError {
    /// Settings file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Missing or malformed command-line input.
    #[error("{message}")]
    Usage { message: String },

    /// A prompt could not be answered because stdin was closed.
    #[error("No answer to \"{question}\" (stdin closed)")]
    PromptClosed { question: String },

    /// A package name that cannot be used as an install directory.
    #[error("Invalid package name: '{name}'")]
    InvalidPackageName { name: String },

    /// External command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// No known build marker in the repository root.
    #[error("Could not detect build system in {}", path.display())]
    BuildSystemNotDetected { path: PathBuf },

    /// The search endpoint answered with a non-success status.
    #[error("Failed to search repositories (HTTP {status})")]
    SearchFailed { status: u16 },

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FkgitError {
    /// Process exit status for this error.
    ///
    /// A failed external command hands its own exit code through so that
    /// `fkgit -Suy` reports what the failing build or pull reported.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::CommandFailed {
                code: Some(code), ..
            } if (1..=255).contains(code) => *code as u8,
            _ => 1,
        }
    }
}

/// Result type alias for fkgit operations.
pub type Result<T> = std::result::Result<T, FkgitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = FkgitError::ConfigNotFound {
            path: PathBuf::from("/etc/fkgit.yml"),
        };
        assert!(err.to_string().contains("/etc/fkgit.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = FkgitError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn usage_error_is_message_only() {
        let err = FkgitError::Usage {
            message: "Usage: fkgit -S <repository>".into(),
        };
        assert_eq!(err.to_string(), "Usage: fkgit -S <repository>");
    }

    #[test]
    fn invalid_package_name_displays_name() {
        let err = FkgitError::InvalidPackageName { name: "..".into() };
        assert!(err.to_string().contains("'..'"));
    }

    #[test]
    fn prompt_closed_displays_question() {
        let err = FkgitError::PromptClosed {
            question: "Install repository r?".into(),
        };
        assert!(err.to_string().contains("Install repository r?"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = FkgitError::CommandFailed {
            command: "git pull".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("git pull"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn build_system_not_detected_displays_path() {
        let err = FkgitError::BuildSystemNotDetected {
            path: PathBuf::from("/home/u/.fkgit/thing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("Could not detect build system"));
        assert!(msg.contains("/home/u/.fkgit/thing"));
    }

    #[test]
    fn search_failed_displays_status() {
        let err = FkgitError::SearchFailed { status: 403 };
        let msg = err.to_string();
        assert!(msg.contains("Failed to search repositories"));
        assert!(msg.contains("403"));
    }

    #[test]
    fn exit_code_passes_through_command_code() {
        let err = FkgitError::CommandFailed {
            command: "make".into(),
            code: Some(2),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_defaults_to_one() {
        let killed = FkgitError::CommandFailed {
            command: "make".into(),
            code: None,
        };
        assert_eq!(killed.exit_code(), 1);

        let out_of_range = FkgitError::CommandFailed {
            command: "make".into(),
            code: Some(300),
        };
        assert_eq!(out_of_range.exit_code(), 1);

        assert_eq!(FkgitError::SearchFailed { status: 500 }.exit_code(), 1);
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FkgitError = io_err.into();
        assert!(matches!(err, FkgitError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(FkgitError::Usage {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
