//! Compiling and installing a cloned repository.

pub mod dispatcher;
pub mod system;

pub use dispatcher::build_and_install;
pub use system::{BuildStep, BuildSystem};
