//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which builds the
//! [`Orchestrator`](crate::runner::Orchestrator) once and routes each
//! pacman-style operation to its implementation.

pub mod dispatcher;
pub mod query;
pub mod remove;
pub mod sync;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use query::QueryCommand;
pub use remove::RemoveCommand;
pub use sync::SyncCommand;
