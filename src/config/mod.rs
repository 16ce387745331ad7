//! Settings loading.
//!
//! Settings come from an optional YAML file, then command-line and
//! environment overrides. See [`Settings::resolve`] for precedence.

pub mod loader;
pub mod schema;

pub use loader::{default_config_path, load_settings, load_settings_file, parse_settings};
pub use schema::{
    default_install_root, Settings, SettingsFile, DEFAULT_CLONE_BASE_URL, DEFAULT_ELEVATE_COMMAND,
};
