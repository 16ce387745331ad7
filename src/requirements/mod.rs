//! Build prerequisites: the base toolchain and README-declared packages.

pub mod installer;
pub mod readme;
pub mod toolchain;

pub use installer::{install_dependencies, install_readme_dependencies, DependencyReport};
pub use readme::{dependencies_from_readme, find_readme, parse_dependencies};
pub use toolchain::{ensure_base_toolchain, toolchain_check, toolchain_package, ToolchainStatus};
