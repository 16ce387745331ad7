//! Install, search, update and remove workflows.
//!
//! Every workflow is a straight line of steps with early exits. The
//! [`Orchestrator`] owns nothing global: settings, the command runner and
//! the search backend are handed in at construction, and the UI is passed
//! to each workflow call.

pub mod install;
pub mod remove;
pub mod search;
pub mod upgrade;

pub use install::{InstallOptions, InstallOutcome};
pub use remove::UninstallOutcome;

use std::path::Path;

use crate::build::{build_and_install, BuildSystem};
use crate::config::Settings;
use crate::detection::{PackageManager, PackageManagerDetector};
use crate::error::Result;
use crate::registry::{GitFetcher, InstallRoot, RepositorySearch, SearchResult};
use crate::requirements::{ensure_base_toolchain, ToolchainStatus};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// Composes fetching, provisioning and building into user workflows.
pub struct Orchestrator<'a> {
    settings: &'a Settings,
    runner: &'a dyn CommandRunner,
    search: &'a dyn RepositorySearch,
    fetcher: GitFetcher,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator over the given collaborators.
    pub fn new(
        settings: &'a Settings,
        runner: &'a dyn CommandRunner,
        search: &'a dyn RepositorySearch,
    ) -> Self {
        Self {
            settings,
            runner,
            search,
            fetcher: GitFetcher::new(InstallRoot::new(settings.install_root.clone())),
        }
    }

    /// The install root.
    pub fn install_root(&self) -> &InstallRoot {
        self.fetcher.root()
    }

    /// Names of installed packages, printed one per line.
    pub fn list_installed(&self, ui: &mut dyn UserInterface) -> Result<Vec<String>> {
        let names = self.install_root().installed()?;
        for name in &names {
            ui.message(name);
        }
        Ok(names)
    }

    /// Run a search behind a spinner.
    fn run_search(&self, query: &str, ui: &mut dyn UserInterface) -> Result<Vec<SearchResult>> {
        let mut spinner = ui.start_spinner(&format!("Searching for {}...", query));
        match self.search.search(query) {
            Ok(results) => {
                spinner.finish_clear();
                tracing::debug!("{} results for {:?}", results.len(), query);
                Ok(results)
            }
            Err(e) => {
                spinner.finish_error("Search failed");
                Err(e)
            }
        }
    }

    /// Detect the package manager and make sure the base toolchain is present.
    ///
    /// Returns `None` when no supported manager exists; provisioning is then
    /// skipped and the build runs with whatever is on the host.
    fn prepare_host(&self, ui: &mut dyn UserInterface) -> Result<Option<PackageManager>> {
        let Some(pm) = PackageManagerDetector::detect(self.runner) else {
            tracing::info!("No supported package manager found; skipping dependencies");
            return Ok(None);
        };

        if ensure_base_toolchain(pm, self.runner)? == ToolchainStatus::Installed {
            ui.success(&format!("Installed base toolchain via {}", pm));
        }
        Ok(Some(pm))
    }

    /// Build an installed repository and report it.
    fn build(&self, name: &str, repo_path: &Path, ui: &mut dyn UserInterface) -> Result<BuildSystem> {
        let build_system = build_and_install(repo_path, self.runner)?;
        ui.success(&format!("Built {} with {}", name, build_system));
        Ok(build_system)
    }
}
