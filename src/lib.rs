//! # preformat - format staged files at commit time
//!
//! A git pre-commit hook that formats exactly the files being committed.
//! It reads the staged diff, keeps the existing, non-fixture source files of
//! the configured type, runs the configured formatter over them in a single
//! batch and re-stages the results, so the commit contains formatted code.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install preformat
//! cargo install preformat
//!
//! # Install the hook in your repository
//! preformat install
//!
//! # See what the next commit would format
//! preformat status
//! ```
//!
//! Merge commits are never reformatted, and a failing formatter blocks the
//! commit with exit code 1 without touching the index.

pub mod cli;
pub mod config;
pub mod external;
pub mod git;
pub mod hooks;
pub mod shared;

pub use cli::{Cli, Output};
pub use config::PreformatConfig;

/// Result type alias for preformat operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
