//! Integration tests for the fkgit binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway install root plus a settings file that never elevates.
struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let sandbox = Self {
            temp: TempDir::new().unwrap(),
        };
        fs::create_dir_all(sandbox.root()).unwrap();
        sandbox.write_config("elevate_command: \"\"\n");
        sandbox
    }

    fn root(&self) -> PathBuf {
        self.temp.path().join("packages")
    }

    fn config(&self) -> PathBuf {
        self.temp.path().join("config.yml")
    }

    fn write_config(&self, content: &str) {
        fs::write(self.config(), content).unwrap();
    }

    fn install(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::create_dir_all(&path).unwrap();
        path
    }

    fn fkgit(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("fkgit"));
        cmd.arg("--root")
            .arg(self.root())
            .arg("--config")
            .arg(self.config())
            .env_remove("FKGIT_ROOT")
            .env_remove("GITHUB_TOKEN")
            .env_remove("FKGIT_PROMPT_INSTALL")
            .env_remove("FKGIT_PROMPT_SELECTION")
            .env("NO_COLOR", "1");
        cmd
    }
}

fn search_config(api_url: &str) -> String {
    format!("elevate_command: \"\"\napi_url: {}\n", api_url)
}

fn mock_search(server: &MockServer, query: &str, items: serde_json::Value) {
    let query = query.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path("/search/repositories")
            .query_param("q", query.as_str());
        then.status(200)
            .json_body(serde_json::json!({ "items": items }));
    });
}

fn hello_world_item() -> serde_json::Value {
    serde_json::json!([{
        "full_name": "octocat/Hello-World",
        "name": "Hello-World",
        "clone_url": "https://github.com/octocat/Hello-World.git",
        "description": "My first repository"
    }])
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("fkgit"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("GitHub"))
        .stdout(predicate::str::contains("--root"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("fkgit"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_without_operation_prints_usage_and_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("fkgit"));
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_unknown_flag_fails_with_one() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("fkgit"));
    cmd.arg("-X");
    cmd.assert().code(1);
    Ok(())
}

#[test]
fn sync_without_target_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox
        .fkgit()
        .arg("-S")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn query_lists_installed_packages() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox.install("zoxide");
    sandbox.install("bat");

    sandbox
        .fkgit()
        .arg("-Q")
        .assert()
        .success()
        .stdout("bat\nzoxide\n");
    Ok(())
}

#[test]
fn root_can_come_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox.install("fd");

    let mut cmd = Command::new(cargo_bin("fkgit"));
    cmd.arg("-Q")
        .arg("--config")
        .arg(sandbox.config())
        .env("FKGIT_ROOT", sandbox.root());
    cmd.assert().success().stdout("fd\n");
    Ok(())
}

#[test]
fn remove_missing_package_is_noop() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox
        .fkgit()
        .args(["-R", "ghost"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ghost is not installed"));
    Ok(())
}

#[test]
fn remove_deletes_package_without_makefile() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    let path = sandbox.install("docs-only");
    fs::write(path.join("README.md"), "nothing to build").unwrap();

    sandbox
        .fkgit()
        .args(["-R", "docs-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed docs-only"));

    assert!(!path.exists());
    Ok(())
}

#[test]
fn remove_rejects_path_traversal() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox
        .fkgit()
        .args(["-R", ".."])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid package name"));
    assert!(sandbox.root().exists());
    Ok(())
}

#[test]
fn search_lists_results() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    mock_search(&server, "hello", hello_world_item());
    let sandbox = Sandbox::new();
    sandbox.write_config(&search_config(&server.url("/search/repositories")));

    sandbox
        .fkgit()
        .args(["-Ss", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found repositories:"))
        .stdout(predicate::str::contains(
            "1: octocat/Hello-World - My first repository",
        ));
    Ok(())
}

#[test]
fn search_with_no_results_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    mock_search(&server, "zzz", serde_json::json!([]));
    let sandbox = Sandbox::new();
    sandbox.write_config(&search_config(&server.url("/search/repositories")));

    sandbox
        .fkgit()
        .args(["-Ss", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn search_failure_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search/repositories");
        then.status(500);
    });
    let sandbox = Sandbox::new();
    sandbox.write_config(&search_config(&server.url("/search/repositories")));

    sandbox
        .fkgit()
        .args(["-Ss", "anything"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to search repositories"));
    Ok(())
}

#[test]
fn install_with_out_of_range_pick_is_silent_noop() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    mock_search(&server, "hello", hello_world_item());
    let sandbox = Sandbox::new();
    sandbox.write_config(&search_config(&server.url("/search/repositories")));

    sandbox
        .fkgit()
        .args(["-S", "hello", "-l", "9"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(!sandbox.root().join("Hello-World").exists());
    Ok(())
}

#[test]
fn declining_confirmation_on_stdin_installs_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();

    sandbox
        .fkgit()
        .args(["-S", "octocat/Hello-World"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing").not())
        .stderr(predicate::str::contains("Install repository Hello-World?"));

    assert!(!sandbox.root().join("Hello-World").exists());
    Ok(())
}

#[test]
fn closed_stdin_does_not_confirm_install() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();

    sandbox
        .fkgit()
        .args(["-S", "octocat/Hello-World"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("stdin closed"));

    assert!(!sandbox.root().join("Hello-World").exists());
    Ok(())
}

#[test]
fn upgrade_with_nothing_installed_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    fs::remove_dir_all(sandbox.root()).unwrap();

    sandbox.fkgit().arg("-Suy").assert().success();
    Ok(())
}

#[test]
fn missing_config_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let missing: &Path = &temp.path().join("nope.yml");

    let mut cmd = Command::new(cargo_bin("fkgit"));
    cmd.arg("-Q").arg("--config").arg(missing);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn malformed_config_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox.write_config("install_root: [unclosed\n");

    sandbox
        .fkgit()
        .arg("-Q")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}
