//! Settings file schema and resolved settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::registry::DEFAULT_API_URL;

/// Default base URL for `owner/name` references.
pub const DEFAULT_CLONE_BASE_URL: &str = "https://github.com";

/// Default command used for privileged steps.
pub const DEFAULT_ELEVATE_COMMAND: &str = "sudo";

/// Settings as written in `config.yml`. Every field is optional.
///
/// ```yaml
/// install_root: /opt/fkgit
/// elevate_command: doas
/// readme_dependencies: false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    /// Directory holding installed repositories.
    pub install_root: Option<PathBuf>,

    /// Repository search endpoint.
    pub api_url: Option<String>,

    /// Prefix for clone URLs built from `owner/name`.
    pub clone_base_url: Option<String>,

    /// Command that runs privileged steps (empty string disables elevation).
    pub elevate_command: Option<String>,

    /// Install packages named in the README's dependency section.
    pub readme_dependencies: Option<bool>,

    /// Token sent to the search endpoint.
    pub github_token: Option<String>,

    /// Search request timeout; unset waits indefinitely.
    pub search_timeout_secs: Option<u64>,
}

/// Fully resolved settings handed to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub install_root: PathBuf,
    pub api_url: String,
    pub clone_base_url: String,
    pub elevate_command: String,
    pub readme_dependencies: bool,
    pub github_token: Option<String>,
    pub search_timeout: Option<Duration>,
}

/// `~/.fkgit`, or `./.fkgit` when there is no home directory.
pub fn default_install_root() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(".fkgit")
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(SettingsFile::default(), None, None)
    }
}

impl Settings {
    /// Apply defaults and overrides to a settings file.
    ///
    /// `root_override` (from `--root` / `FKGIT_ROOT`) beats the file;
    /// `env_token` (from `GITHUB_TOKEN`) only fills a missing token.
    pub fn resolve(
        file: SettingsFile,
        root_override: Option<PathBuf>,
        env_token: Option<String>,
    ) -> Self {
        Self {
            install_root: root_override
                .or(file.install_root)
                .unwrap_or_else(default_install_root),
            api_url: file.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            clone_base_url: file
                .clone_base_url
                .unwrap_or_else(|| DEFAULT_CLONE_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            elevate_command: file
                .elevate_command
                .unwrap_or_else(|| DEFAULT_ELEVATE_COMMAND.to_string()),
            readme_dependencies: file.readme_dependencies.unwrap_or(true),
            github_token: file
                .github_token
                .or(env_token)
                .filter(|t| !t.trim().is_empty()),
            search_timeout: file.search_timeout_secs.map(Duration::from_secs),
        }
    }

    /// Clone URL for an `owner/name` reference.
    pub fn clone_url(&self, owner: &str, name: &str) -> String {
        format!("{}/{}/{}.git", self.clone_base_url, owner, name)
    }
}
