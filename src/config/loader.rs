//! Settings file discovery and loading.

use crate::config::schema::{Settings, SettingsFile};
use crate::error::{FkgitError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// `<config dir>/fkgit/config.yml` (e.g. `~/.config/fkgit/config.yml`).
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("fkgit").join("config.yml"))
}

/// Load a single settings file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_settings_file(path: &Path) -> Result<SettingsFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FkgitError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FkgitError::Io(e)
        }
    })?;

    parse_settings(&content, path)
}

/// Parse YAML content into a settings file. Empty content means all defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<SettingsFile> {
    if content.trim().is_empty() {
        return Ok(SettingsFile::default());
    }
    serde_yaml::from_str(content).map_err(|e| FkgitError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and resolve settings.
///
/// An explicit `config_override` must exist. Otherwise the default path is
/// used when present, and built-in defaults when not.
pub fn load_settings(
    config_override: Option<&Path>,
    root_override: Option<PathBuf>,
) -> Result<Settings> {
    let file = match config_override {
        Some(path) => load_settings_file(path)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                load_settings_file(&path)?
            }
            None => SettingsFile::default(),
        },
    };

    let env_token = std::env::var("GITHUB_TOKEN").ok();
    Ok(Settings::resolve(file, root_override, env_token))
}
