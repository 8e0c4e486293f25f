//! Pre-commit formatting hook
//!
//! One hook run is a short pipeline:
//!
//! - [`selector::ChangeSelector`] reads the staged diff and keeps the files
//!   eligible for formatting (pure read of repository state)
//! - [`gate::FormatGate`] runs the formatter over them and re-stages the
//!   results (the only side effects)
//!
//! [`pre_commit::execute`] wires both to the configured commands and turns
//! the outcome into the process exit code.

pub mod gate;
pub mod pre_commit;
pub mod selector;

pub use gate::{FormatGate, GateOutcome};
pub use selector::{CandidateFile, ChangeSelector, SelectionRules};

use crate::git::GitRepo;
use std::path::PathBuf;

/// Repository state read once per hook invocation
#[derive(Debug, Clone)]
pub struct RepositoryContext {
    /// Absolute root of the working tree
    pub root: PathBuf,
    /// A merge marker is present under the git directory
    pub merge_in_progress: bool,
}

impl RepositoryContext {
    pub fn capture(repo: &GitRepo, merge_markers: &[String]) -> Self {
        Self {
            root: repo.root().to_path_buf(),
            merge_in_progress: repo.merge_in_progress(merge_markers),
        }
    }
}
