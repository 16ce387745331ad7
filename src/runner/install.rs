//! `-S`: install by `owner/name` or by search.

use std::path::PathBuf;

use crate::build::BuildSystem;
use crate::error::{FkgitError, Result};
use crate::registry::{validate_name, FetchOutcome};
use crate::requirements::install_readme_dependencies;
use crate::ui::{Prompt, UserInterface};

use super::Orchestrator;

/// Flags that shape an install.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallOptions {
    /// Skip the confirmation prompt.
    pub noconfirm: bool,
    /// Unattended: take the first search result and skip confirmation.
    pub auto: bool,
    /// 1-based search result to install. Wins over `auto`.
    pub pick: Option<usize>,
}

impl InstallOptions {
    fn skips_confirmation(&self) -> bool {
        self.noconfirm || self.auto
    }
}

/// How an install ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The repository was fetched (or already present) and built.
    Installed {
        name: String,
        path: PathBuf,
        build_system: BuildSystem,
        cloned: bool,
    },
    /// The user answered no at the confirmation prompt.
    Declined { name: String },
    /// The search came back empty.
    NoResults,
    /// The chosen number was not a listed result.
    InvalidSelection { input: String },
}

impl Orchestrator<'_> {
    /// Install `target`: a direct `owner/name` reference if it contains a
    /// slash, otherwise a search query.
    pub fn install(
        &self,
        target: &str,
        options: &InstallOptions,
        ui: &mut dyn UserInterface,
    ) -> Result<InstallOutcome> {
        let target = target.trim();
        if target.is_empty() {
            return Err(FkgitError::Usage {
                message: "Usage: fkgit -S <owner/name | query>".to_string(),
            });
        }

        if target.contains('/') {
            self.install_reference(target, options, ui)
        } else {
            self.install_from_search(target, options, ui)
        }
    }

    /// Install `owner/name` straight from the clone base URL.
    pub fn install_reference(
        &self,
        reference: &str,
        options: &InstallOptions,
        ui: &mut dyn UserInterface,
    ) -> Result<InstallOutcome> {
        let (owner, name) = reference
            .split_once('/')
            .ok_or_else(|| FkgitError::InvalidPackageName {
                name: reference.to_string(),
            })?;
        if owner.is_empty() {
            return Err(FkgitError::InvalidPackageName {
                name: reference.to_string(),
            });
        }
        validate_name(name)?;

        let url = self.settings.clone_url(owner, name);
        self.confirm_and_install(name, &url, options, ui)
    }

    /// Search for `query`, list the candidates, pick one and install it.
    pub fn install_from_search(
        &self,
        query: &str,
        options: &InstallOptions,
        ui: &mut dyn UserInterface,
    ) -> Result<InstallOutcome> {
        let results = self.run_search(query, ui)?;
        if results.is_empty() {
            return Ok(InstallOutcome::NoResults);
        }

        ui.message("Found repositories:");
        for (i, result) in results.iter().enumerate() {
            ui.message(&result.listing(i + 1));
        }

        let (index, input) = match options.pick {
            Some(number) => (number.checked_sub(1), number.to_string()),
            None if options.auto => (Some(0), "1".to_string()),
            None => {
                let answer = ui.prompt(&Prompt::input(
                    "selection",
                    "Enter the number of the repository to install",
                    Some("1"),
                ))?;
                let input = answer.as_string().trim().to_string();
                (parse_selection(&input), input)
            }
        };

        let Some(selected) = index.and_then(|i| results.get(i)) else {
            tracing::debug!("Selection {:?} is not in 1..={}", input, results.len());
            return Ok(InstallOutcome::InvalidSelection { input });
        };

        validate_name(&selected.name)?;
        self.confirm_and_install(&selected.name, &selected.clone_url, options, ui)
    }

    fn confirm_and_install(
        &self,
        name: &str,
        url: &str,
        options: &InstallOptions,
        ui: &mut dyn UserInterface,
    ) -> Result<InstallOutcome> {
        if !options.skips_confirmation() {
            let question = format!("Install repository {}?", name);
            let answer = ui.prompt(&Prompt::confirm("install", &question, true))?;
            if answer.as_bool() != Some(true) {
                return Ok(InstallOutcome::Declined {
                    name: name.to_string(),
                });
            }
        }

        ui.show_header(&format!("Installing {}", name));

        let outcome = self.fetcher.fetch(url, name, self.runner)?;
        let cloned = matches!(outcome, FetchOutcome::Cloned(_));
        if cloned {
            ui.success(&format!("Cloned {}", url));
        } else {
            ui.success(&format!("{} is already present, rebuilding", name));
        }
        let path = outcome.into_path();

        if let Some(pm) = self.prepare_host(ui)? {
            if self.settings.readme_dependencies {
                let report = install_readme_dependencies(pm, &path, self.runner)?;
                if report.is_empty() {
                    tracing::debug!("{} declares no README dependencies", name);
                }
                for dep in &report.failed {
                    ui.warning(&format!("Failed to install dependency: {}", dep));
                }
                if !report.installed.is_empty() {
                    ui.success(&format!(
                        "Installed dependencies: {}",
                        report.installed.join(", ")
                    ));
                }
            }
        }

        let build_system = self.build(name, &path, ui)?;

        Ok(InstallOutcome::Installed {
            name: name.to_string(),
            path,
            build_system,
            cloned,
        })
    }
}

/// Turn typed input into a 0-based index. Empty input means the first result.
fn parse_selection(input: &str) -> Option<usize> {
    if input.is_empty() {
        return Some(0);
    }
    input.parse::<usize>().ok()?.checked_sub(1)
}
