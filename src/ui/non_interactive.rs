//! Non-interactive UI for piped, redirected and CI runs.

use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, Write};

use crate::error::{FkgitError, Result};

use super::{
    parse_bool_answer, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle,
    UserInterface,
};

const PROMPT_ENV_PREFIX: &str = "FKGIT_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from a `FKGIT_PROMPT_<KEY>` environment variable
/// when set, otherwise by reading one line from stdin. An empty line takes
/// the prompt's default; a closed stdin is an error, never an implicit yes.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    input: Box<dyn BufRead>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI reading answers from stdin.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
            input: Box::new(BufReader::new(io::stdin())),
        }
    }

    /// Create with explicit overrides and no answer source (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            input: Box::new(io::empty()),
        }
    }

    /// Read prompt answers from `input` instead of stdin.
    pub fn with_input(mut self, input: impl BufRead + 'static) -> Self {
        self.input = Box::new(input);
        self
    }

    fn read_answer(&mut self, prompt: &Prompt) -> Result<String> {
        eprint!("{} ", prompt_line(prompt));
        io::stderr().flush().ok();

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            eprintln!();
            return Err(FkgitError::PromptClosed {
                question: prompt.question.clone(),
            });
        }

        let line = line.trim();
        if line.is_empty() {
            Ok(prompt.default.clone().unwrap_or_default())
        } else {
            Ok(line.to_string())
        }
    }
}

fn prompt_line(prompt: &Prompt) -> String {
    match (&prompt.prompt_type, prompt.default.as_deref()) {
        (PromptType::Confirm, Some(default)) if parse_bool_answer(default) => {
            format!("{} [Y/n]", prompt.question)
        }
        (PromptType::Confirm, _) => format!("{} [y/N]", prompt.question),
        (PromptType::Input, Some(default)) => format!("{} [{}]:", prompt.question, default),
        (PromptType::Input, None) => format!("{}:", prompt.question),
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = match self.env_overrides.get(&env_key) {
            Some(answer) => answer.clone(),
            None => self.read_answer(prompt)?,
        };

        Ok(match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_bool_answer(&answer)),
            PromptType::Input => PromptResult::String(answer),
        })
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!(":: {}", title);
        }
    }
}

/// Spinner that draws nothing and only reports failures.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn finish_clear(&mut self) {}
}
