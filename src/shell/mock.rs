//! Recording command runner for testing.
//!
//! `RecordingRunner` implements [`CommandRunner`] without spawning anything.
//! Every invocation is captured for later assertion, and exit codes can be
//! scripted per command.
//!
//! # Example
//!
//! ```
//! use fkgit::shell::{CommandLine, CommandOptions, CommandRunner, RecordingRunner};
//!
//! let mut runner = RecordingRunner::new().with_available(&["pacman"]);
//! runner.fail("make install", 2);
//!
//! assert!(runner.check(&CommandLine::parse("which pacman"), None));
//! assert!(!runner.check(&CommandLine::parse("which apt"), None));
//!
//! let result = runner
//!     .run(&CommandLine::parse("make install"), &CommandOptions::default())
//!     .unwrap();
//! assert_eq!(result.exit_code, Some(2));
//! assert_eq!(runner.commands().len(), 3);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::time::Duration;

use super::command::{CommandLine, CommandOptions, CommandResult};
use super::runner::CommandRunner;
use crate::error::Result;

/// One captured call to [`CommandRunner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The command as displayed (`program arg1 arg2`), without elevation prefix.
    pub command: String,
    /// Working directory, if one was set.
    pub cwd: Option<PathBuf>,
    /// Whether elevation was requested.
    pub elevated: bool,
}

type Effect = Box<dyn Fn(&CommandLine)>;

/// Command runner that records instead of executing.
///
/// Commands succeed unless scripted otherwise with [`RecordingRunner::fail`].
/// `which <program>` succeeds only for programs registered with
/// [`RecordingRunner::with_available`], so package-manager probing starts
/// from "nothing installed".
#[derive(Default)]
pub struct RecordingRunner {
    invocations: RefCell<Vec<Invocation>>,
    failures: HashMap<String, i32>,
    available: HashSet<String>,
    effects: Vec<(String, Effect)>,
}

impl RecordingRunner {
    /// Create an empty runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `which <program>` succeed for each listed program.
    pub fn with_available(mut self, programs: &[&str]) -> Self {
        self.available
            .extend(programs.iter().map(|p| p.to_string()));
        self
    }

    /// Script an exit code for an exact command string.
    pub fn fail(&mut self, command: &str, exit_code: i32) {
        self.failures.insert(command.to_string(), exit_code);
    }

    /// Run `effect` whenever a command starting with `prefix` is invoked.
    ///
    /// Used to simulate side effects such as `git clone` creating a directory.
    pub fn on(&mut self, prefix: &str, effect: impl Fn(&CommandLine) + 'static) {
        self.effects.push((prefix.to_string(), Box::new(effect)));
    }

    /// All captured invocations in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// All captured command strings in order.
    pub fn commands(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|i| i.command.clone())
            .collect()
    }

    /// Captured command strings, excluding `which` probes.
    pub fn commands_without_probes(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .filter(|c| !c.starts_with("which "))
            .collect()
    }

    /// Check whether an exact command was invoked.
    pub fn ran(&self, command: &str) -> bool {
        self.invocations
            .borrow()
            .iter()
            .any(|i| i.command == command)
    }

    fn exit_code_for(&self, command: &CommandLine, display: &str) -> i32 {
        if command.program == "which" {
            let found = command
                .args
                .first()
                .is_some_and(|p| self.available.contains(p));
            return if found { 0 } else { 1 };
        }
        self.failures.get(display).copied().unwrap_or(0)
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandLine, options: &CommandOptions) -> Result<CommandResult> {
        let display = command.to_string();
        self.invocations.borrow_mut().push(Invocation {
            command: display.clone(),
            cwd: options.cwd.clone(),
            elevated: options.elevate,
        });

        for (prefix, effect) in &self.effects {
            if display.starts_with(prefix.as_str()) {
                effect(command);
            }
        }

        let code = self.exit_code_for(command, &display);
        if code == 0 {
            Ok(CommandResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            ))
        } else {
            Ok(CommandResult::failure(
                Some(code),
                String::new(),
                String::new(),
                Duration::ZERO,
            ))
        }
    }
}
