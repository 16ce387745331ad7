//! CLI argument definitions.
//!
//! The surface is pacman-style: each operation is a single capital letter
//! (`-S`, `-R`, `-Q`) implemented as a clap subcommand with a short flag, so
//! lower-case modifiers can be stacked behind it (`-Ss`, `-Suy`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fkgit - build and install software straight from GitHub.
#[derive(Debug, Parser)]
#[command(name = "fkgit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(
    after_help = "Examples:\n  fkgit -S octocat/Hello-World\n  fkgit -S ripgrep -l 1\n  fkgit -Ss ripgrep\n  fkgit -Suy\n  fkgit -R Hello-World"
)]
pub struct Cli {
    /// Directory holding installed repositories (default ~/.fkgit)
    #[arg(long, global = true, env = "FKGIT_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Path to config file (overrides the default config.yml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Echo every external command before it runs
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Results and errors only
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available operations.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install, search or upgrade packages
    #[command(short_flag = 'S', long_flag = "sync")]
    Sync(SyncArgs),

    /// Remove an installed package
    #[command(short_flag = 'R', long_flag = "remove")]
    Remove(RemoveArgs),

    /// List installed packages
    #[command(short_flag = 'Q', long_flag = "query")]
    Query(QueryArgs),
}

/// Arguments for `-S`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SyncArgs {
    /// Search only; print matching repositories
    #[arg(short, long)]
    pub search: bool,

    /// Pull and rebuild every installed package
    #[arg(short = 'u', long)]
    pub sysupgrade: bool,

    /// Accepted for pacman compatibility; has no effect
    #[arg(short = 'y', long)]
    pub refresh: bool,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub noconfirm: bool,

    /// Install search result number N
    #[arg(short = 'l', long = "pick", value_name = "N")]
    pub pick: Option<usize>,

    /// Unattended: take the first search result, skip confirmation
    #[arg(short = 'c', long)]
    pub auto: bool,

    /// `owner/name` reference or search query
    pub target: Option<String>,
}

/// Arguments for `-R`.
#[derive(Debug, Clone, clap::Args)]
pub struct RemoveArgs {
    /// Installed package name
    pub name: String,
}

/// Arguments for `-Q`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct QueryArgs {}
