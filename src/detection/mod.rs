//! Host and repository detection.

pub mod file_detection;
pub mod package_manager;

pub use file_detection::{file_exists, first_existing};
pub use package_manager::{PackageManager, PackageManagerDetector};
