//! `-Ss`: search and list.

use crate::error::Result;
use crate::registry::SearchResult;
use crate::ui::UserInterface;

use super::Orchestrator;

impl Orchestrator<'_> {
    /// Print numbered candidates for `query`. Nothing is printed for zero hits.
    pub fn search(&self, query: &str, ui: &mut dyn UserInterface) -> Result<Vec<SearchResult>> {
        let results = self.run_search(query, ui)?;
        if !results.is_empty() {
            ui.message("Found repositories:");
            for (i, result) in results.iter().enumerate() {
                ui.message(&result.listing(i + 1));
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::error::FkgitError;
    use crate::shell::RecordingRunner;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn lists_results_with_header() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(temp.path());
        let runner = RecordingRunner::new();
        let mut search = StaticSearch::with(&["BurntSushi/ripgrep", "someone/rg-wrapper"]);
        search.results[1].description = None;
        let orchestrator = Orchestrator::new(&settings, &runner, &search);
        let mut ui = MockUI::new();

        let results = orchestrator.search("ripgrep", &mut ui).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(
            ui.messages(),
            &[
                "Found repositories:",
                "1: BurntSushi/ripgrep - about ripgrep",
                "2: someone/rg-wrapper",
            ]
        );
        assert!(runner.commands().is_empty());
    }

    #[test]
    fn zero_results_print_nothing() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(temp.path());
        let runner = RecordingRunner::new();
        let search = StaticSearch::default();
        let orchestrator = Orchestrator::new(&settings, &runner, &search);
        let mut ui = MockUI::new();

        let results = orchestrator.search("foo", &mut ui).unwrap();

        assert!(results.is_empty());
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn search_failure_propagates() {
        let temp = TempDir::new().unwrap();
        let settings = settings_in(temp.path());
        let runner = RecordingRunner::new();
        let search = StaticSearch {
            fail_with: Some(422),
            ..Default::default()
        };
        let orchestrator = Orchestrator::new(&settings, &runner, &search);
        let mut ui = MockUI::new();

        let err = orchestrator.search("foo", &mut ui).unwrap_err();

        assert!(matches!(err, FkgitError::SearchFailed { status: 422 }));
        assert_eq!(err.exit_code(), 1);
        assert!(ui.messages().is_empty());
    }
}
