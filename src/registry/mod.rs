//! Where packages come from and where they live.
//!
//! - [`search`] - Repository search over the GitHub API
//! - [`git`] - Cloning and pulling with the `git` CLI
//! - [`store`] - The install root directory

pub mod git;
pub mod search;
pub mod store;

pub use git::{FetchOutcome, GitFetcher};
pub use search::{RepositorySearch, SearchClient, SearchResult, DEFAULT_API_URL};
pub use store::{validate_name, InstallRoot};
