//! External command execution.

pub mod command;
pub mod mock;
pub mod platform;
pub mod runner;

pub use command::{execute, execute_check, CommandLine, CommandOptions, CommandResult};
pub use mock::{Invocation, RecordingRunner};
pub use platform::{is_ci, is_elevated};
pub use runner::{CommandRunner, SystemRunner};
