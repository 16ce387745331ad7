//! Dependency names declared in a project's README.
//!
//! A section starts at `Dependencies:` or `Requirements:` (any case) and runs
//! to the next blank line. Every word inside it is taken as a package name,
//! so prose in that section turns into bogus names; callers that care can
//! switch the step off with the `readme_dependencies` setting.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::detection::first_existing;
use crate::error::Result;

/// README file names tried in order.
pub const README_NAMES: [&str; 4] = ["README.md", "README", "README.txt", "readme.md"];

fn section_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)(Dependencies|Requirements):\s*(.*?)\n\n").expect("valid regex")
    })
}

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w+\b").expect("valid regex"))
}

/// Extract dependency names from README text.
pub fn parse_dependencies(content: &str) -> Vec<String> {
    let Some(section) = section_regex()
        .captures(content)
        .and_then(|caps| caps.get(2))
    else {
        return Vec::new();
    };

    word_regex()
        .find_iter(section.as_str())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Locate the README in a repository root.
pub fn find_readme(repo_path: &Path) -> Option<PathBuf> {
    first_existing(repo_path, &README_NAMES)
}

/// Read and parse the repository's README.
///
/// A missing README yields no dependencies.
pub fn dependencies_from_readme(repo_path: &Path) -> Result<Vec<String>> {
    let Some(readme) = find_readme(repo_path) else {
        tracing::debug!("No README in {}", repo_path.display());
        return Ok(Vec::new());
    };

    let bytes = fs::read(&readme)?;
    let content = String::from_utf8_lossy(&bytes);
    let deps = parse_dependencies(&content);
    tracing::debug!("{} declares {} dependencies", readme.display(), deps.len());
    Ok(deps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn requirements_section_followed_by_blank_line() {
        let content = "# tool\n\nRequirements: gcc make libfoo\n\nUsage: run it\n";
        assert_eq!(parse_dependencies(content), vec!["gcc", "make", "libfoo"]);
    }

    #[test]
    fn heading_is_case_insensitive() {
        let content = "DEPENDENCIES: zlib\n\n";
        assert_eq!(parse_dependencies(content), vec!["zlib"]);
    }

    #[test]
    fn list_after_heading_spans_lines() {
        let content = "## Dependencies:\n\n- libx11\n- libxft\n\n## Build\n\nmake\n";
        assert_eq!(parse_dependencies(content), vec!["libx11", "libxft"]);
    }

    #[test]
    fn punctuation_splits_tokens() {
        let content = "Requirements: libpng-dev, zlib1g\n\n";
        assert_eq!(parse_dependencies(content), vec!["libpng", "dev", "zlib1g"]);
    }

    #[test]
    fn prose_is_tokenised_verbatim() {
        let content = "Requirements: you need a compiler\n\n";
        assert_eq!(
            parse_dependencies(content),
            vec!["you", "need", "a", "compiler"]
        );
    }

    #[test]
    fn no_section_yields_nothing() {
        assert!(parse_dependencies("# tool\n\nJust run make.\n\n").is_empty());
    }

    #[test]
    fn section_without_terminating_blank_line_yields_nothing() {
        assert!(parse_dependencies("Requirements: gcc make").is_empty());
    }

    #[test]
    fn first_matching_section_wins() {
        let content = "Requirements: gcc\n\nDependencies: zlib\n\n";
        assert_eq!(parse_dependencies(content), vec!["gcc"]);
    }

    #[test]
    fn missing_readme_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(dependencies_from_readme(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn reads_readme_from_repo_root() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("README.md"),
            "Dependencies: ncurses\n\nMore text\n",
        )
        .unwrap();

        assert_eq!(
            dependencies_from_readme(temp.path()).unwrap(),
            vec!["ncurses"]
        );
    }

    #[test]
    fn plain_readme_is_found() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("README"), "").unwrap();
        assert_eq!(find_readme(temp.path()), Some(temp.path().join("README")));
    }
}
