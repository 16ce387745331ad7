//! `-Suy`: pull and rebuild everything installed.

use crate::error::Result;
use crate::ui::UserInterface;

use super::Orchestrator;

impl Orchestrator<'_> {
    /// Pull and rebuild every installed repository in name order.
    ///
    /// The toolchain is checked once before the first pull. The first
    /// failing pull or build stops the run. Returns the names that were
    /// updated.
    pub fn update_all(&self, ui: &mut dyn UserInterface) -> Result<Vec<String>> {
        let names = self.install_root().installed()?;
        if names.is_empty() {
            tracing::info!(
                "Nothing installed under {}",
                self.install_root().path().display()
            );
            return Ok(names);
        }

        self.prepare_host(ui)?;

        ui.show_header(&format!("Updating {} package(s)", names.len()));
        for name in &names {
            let repo_path = self.install_root().package_path(name)?;
            tracing::debug!("Updating {}", repo_path.display());

            self.fetcher.pull(&repo_path, self.runner)?;
            self.build(name, &repo_path, ui)?;
        }

        Ok(names)
    }
}
