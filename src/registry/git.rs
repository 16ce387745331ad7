//! Cloning and updating repositories with the `git` CLI.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shell::{CommandLine, CommandOptions, CommandRunner};

use super::store::InstallRoot;

/// Result of [`GitFetcher::fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A fresh clone was made.
    Cloned(PathBuf),
    /// The directory already existed; nothing was fetched.
    AlreadyPresent(PathBuf),
}

impl FetchOutcome {
    /// Local path of the repository.
    pub fn path(&self) -> &Path {
        match self {
            Self::Cloned(p) | Self::AlreadyPresent(p) => p,
        }
    }

    /// Consume into the local path.
    pub fn into_path(self) -> PathBuf {
        match self {
            Self::Cloned(p) | Self::AlreadyPresent(p) => p,
        }
    }
}

/// Clones repositories into the install root.
pub struct GitFetcher {
    root: InstallRoot,
}

impl GitFetcher {
    /// Create a fetcher for the given install root.
    pub fn new(root: InstallRoot) -> Self {
        Self { root }
    }

    /// The install root.
    pub fn root(&self) -> &InstallRoot {
        &self.root
    }

    /// Clone `url` into `<root>/<name>` unless that directory exists.
    ///
    /// An existing directory is never refreshed here; updates go through
    /// [`GitFetcher::pull`]. A failed clone is fatal.
    pub fn fetch(&self, url: &str, name: &str, runner: &dyn CommandRunner) -> Result<FetchOutcome> {
        let repo_path = self.root.package_path(name)?;

        if repo_path.exists() {
            tracing::debug!("{} already present, skipping clone", repo_path.display());
            return Ok(FetchOutcome::AlreadyPresent(repo_path));
        }

        self.root.ensure()?;

        let clone = CommandLine::new("git")
            .arg("clone")
            .arg(url)
            .arg(repo_path.to_string_lossy());
        runner.run_checked(&clone, &CommandOptions::default())?;

        Ok(FetchOutcome::Cloned(repo_path))
    }

    /// Pull the latest changes for an installed repository.
    pub fn pull(&self, repo_path: &Path, runner: &dyn CommandRunner) -> Result<()> {
        let pull = CommandLine::new("git").arg("pull");
        runner.run_checked(&pull, &CommandOptions::in_dir(repo_path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FkgitError;
    use crate::shell::RecordingRunner;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn clones_into_root_by_name() {
        let temp = TempDir::new().unwrap();
        let fetcher = GitFetcher::new(InstallRoot::new(temp.path().join("root")));
        let runner = RecordingRunner::new();

        let outcome = fetcher
            .fetch("https://github.com/octocat/Hello-World.git", "Hello-World", &runner)
            .unwrap();

        let expected = temp.path().join("root").join("Hello-World");
        assert_eq!(outcome, FetchOutcome::Cloned(expected.clone()));
        assert_eq!(
            runner.commands(),
            vec![format!(
                "git clone https://github.com/octocat/Hello-World.git {}",
                expected.display()
            )]
        );
        assert!(temp.path().join("root").is_dir());
    }

    #[test]
    fn existing_directory_is_not_cloned_again() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("tool")).unwrap();
        let fetcher = GitFetcher::new(InstallRoot::new(temp.path()));
        let runner = RecordingRunner::new();

        let outcome = fetcher.fetch("https://x/tool.git", "tool", &runner).unwrap();

        assert_eq!(outcome, FetchOutcome::AlreadyPresent(temp.path().join("tool")));
        assert!(runner.commands().is_empty());
    }

    #[test]
    fn failed_clone_is_fatal() {
        let temp = TempDir::new().unwrap();
        let fetcher = GitFetcher::new(InstallRoot::new(temp.path()));
        let mut runner = RecordingRunner::new();
        let dest = temp.path().join("tool");
        runner.fail(
            &format!("git clone https://x/tool.git {}", dest.display()),
            128,
        );

        let err = fetcher
            .fetch("https://x/tool.git", "tool", &runner)
            .unwrap_err();
        assert_eq!(err.exit_code(), 128);
    }

    #[test]
    fn invalid_name_is_rejected_before_cloning() {
        let temp = TempDir::new().unwrap();
        let fetcher = GitFetcher::new(InstallRoot::new(temp.path()));
        let runner = RecordingRunner::new();

        let err = fetcher.fetch("https://x/y.git", "..", &runner).unwrap_err();
        assert!(matches!(err, FkgitError::InvalidPackageName { .. }));
        assert!(runner.commands().is_empty());
    }

    #[test]
    fn pull_runs_in_repository() {
        let temp = TempDir::new().unwrap();
        let fetcher = GitFetcher::new(InstallRoot::new(temp.path()));
        let runner = RecordingRunner::new();
        let repo = temp.path().join("tool");

        fetcher.pull(&repo, &runner).unwrap();

        let invocations = runner.invocations();
        assert_eq!(invocations[0].command, "git pull");
        assert_eq!(invocations[0].cwd.as_deref(), Some(repo.as_path()));
    }

    #[test]
    fn outcome_path_accessors() {
        let cloned = FetchOutcome::Cloned(PathBuf::from("/r/a"));
        assert_eq!(cloned.path(), Path::new("/r/a"));
        let present = FetchOutcome::AlreadyPresent(PathBuf::from("/r/b"));
        assert_eq!(present.into_path(), PathBuf::from("/r/b"));
    }

    /// Clone a real local repository through the system runner.
    #[test]
    fn clones_local_repository_with_git() {
        use crate::shell::SystemRunner;

        if !crate::shell::execute_check(&CommandLine::parse("git --version"), None) {
            return;
        }

        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source");
        fs::create_dir(&source).unwrap();
        let init = CommandLine::parse("git init --quiet");
        assert!(crate::shell::execute_check(&init, Some(&source)));

        let fetcher = GitFetcher::new(InstallRoot::new(temp.path().join("root")));
        let runner = SystemRunner::new("");
        let outcome = fetcher
            .fetch(&source.to_string_lossy(), "source", &runner)
            .unwrap();

        assert!(matches!(outcome, FetchOutcome::Cloned(_)));
        assert!(outcome.path().join(".git").exists());
    }
}
