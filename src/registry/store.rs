//! The install root: one directory per installed repository.
//!
//! Nothing else is persisted. A package is installed exactly when its
//! directory exists.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FkgitError, Result};

/// Reject names that would escape or alias the install root.
pub fn validate_name(name: &str) -> Result<()> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if bad {
        return Err(FkgitError::InvalidPackageName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Directory holding every installed repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRoot {
    path: PathBuf,
}

impl InstallRoot {
    /// Wrap an install root path. Nothing is created yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The root directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the root directory if missing.
    pub fn ensure(&self) -> Result<()> {
        fs::create_dir_all(&self.path)?;
        Ok(())
    }

    /// Where the package called `name` lives.
    pub fn package_path(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.path.join(name))
    }

    /// Whether `name` is installed. Only directories count as packages.
    pub fn is_installed(&self, name: &str) -> Result<bool> {
        Ok(self.package_path(name)?.is_dir())
    }

    /// Names of all installed packages, sorted.
    ///
    /// Plain files in the root are ignored. A missing root means nothing is
    /// installed.
    pub fn installed(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
