//! External tools the hook drives
//!
//! The formatter and the staging command are the only side effects of a hook
//! run. Both sit behind narrow traits so the gate can be exercised with fakes.

pub mod formatters;
pub mod staging;

pub use formatters::CommandFormatter;
pub use staging::CommandStager;

use anyhow::Result;
use std::path::PathBuf;

/// Rewrites source files in place
pub trait Formatter {
    /// Display name used in diagnostics
    fn name(&self) -> &str;

    /// Format all `paths` in one batch. `Ok(true)` means the formatter exited
    /// successfully; `Err` means it could not be run at all.
    fn run_formatter(&self, paths: &[PathBuf]) -> Result<bool>;
}

/// Adds files to the pending commit
pub trait Stager {
    /// Stage all `paths` in one batch and return the command's exit code
    fn stage_files(&self, paths: &[PathBuf]) -> Result<i32>;
}
