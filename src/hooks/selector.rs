//! Candidate selection
//!
//! Turns the staged diff into the ordered list of files the formatter should
//! see. A change becomes a candidate only if all of these hold:
//!
//! 1. it survives the commit (added, modified or renamed; not deleted)
//! 2. its extension is the recognized source extension
//! 3. it exists as a regular file under the repository root
//! 4. its absolute path does not contain the fixture marker
//! 5. it matches none of the configured exclude globs

use crate::config::SelectionConfig;
use crate::git::{Change, GitRepo};
use crate::shared::glob::build_globset;
use anyhow::{Context, Result};
use globset::GlobSet;
use std::path::{Path, PathBuf};

/// A staged file that passed every eligibility check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Path relative to the repository root, as handed to the formatter
    pub path: PathBuf,
    /// Resolved absolute path
    pub absolute: PathBuf,
}

/// Compiled selection settings
#[derive(Debug, Clone)]
pub struct SelectionRules {
    extension: String,
    fixture_marker: String,
    exclude: GlobSet,
}

impl SelectionRules {
    pub fn from_config(config: &SelectionConfig) -> Result<Self> {
        Ok(Self {
            extension: config.normalized_extension().to_string(),
            fixture_marker: config.fixture_marker.clone(),
            exclude: build_globset(&config.exclude)?,
        })
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }

    fn is_fixture(&self, absolute: &Path) -> bool {
        !self.fixture_marker.is_empty()
            && absolute.to_string_lossy().contains(&self.fixture_marker)
    }
}

/// Whether the change leaves a file behind in the pending commit.
///
/// | prior | current | kind          | survives |
/// |-------|---------|---------------|----------|
/// | no    | yes     | added         | yes      |
/// | yes   | yes     | modified      | yes      |
/// | yes   | no      | deleted       | no       |
/// | no    | no      | (not emitted) | no       |
pub fn survives_commit(change: &Change) -> bool {
    match (change.prior_blob_present, change.current_blob_present) {
        (false, true) | (true, true) => true,
        (true, false) | (false, false) => false,
    }
}

/// Picks the staged files eligible for formatting
pub struct ChangeSelector {
    repo_root: PathBuf,
    rules: SelectionRules,
}

impl ChangeSelector {
    pub fn new(repo_root: impl Into<PathBuf>, rules: SelectionRules) -> Self {
        Self {
            repo_root: repo_root.into(),
            rules,
        }
    }

    /// Read the staged diff of `repo` and select the candidates, in diff order.
    ///
    /// A diff that cannot be read is an error; an empty result is not.
    pub fn select(&self, repo: &GitRepo) -> Result<Vec<CandidateFile>> {
        let changes = repo
            .staged_changes()
            .context("Failed to read staged changes")?;

        Ok(self.select_from(changes))
    }

    /// Select candidates from already-read changes
    pub fn select_from(&self, changes: Vec<Change>) -> Vec<CandidateFile> {
        let candidates: Vec<CandidateFile> = changes
            .into_iter()
            .filter_map(|change| self.candidate(change))
            .collect();

        tracing::debug!("{} candidate files selected", candidates.len());
        candidates
    }

    fn candidate(&self, change: Change) -> Option<CandidateFile> {
        if !survives_commit(&change) {
            tracing::trace!("skip {}: deleted", change.path.display());
            return None;
        }

        if !self.rules.has_extension(&change.path) {
            tracing::trace!("skip {}: not a source file", change.path.display());
            return None;
        }

        let absolute = self.repo_root.join(&change.path);
        if !absolute.is_file() {
            tracing::trace!("skip {}: not on disk", change.path.display());
            return None;
        }

        if self.rules.is_fixture(&absolute) {
            tracing::trace!("skip {}: test fixture", change.path.display());
            return None;
        }

        if self.rules.exclude.is_match(&change.path) {
            tracing::trace!("skip {}: excluded by pattern", change.path.display());
            return None;
        }

        Some(CandidateFile {
            path: change.path,
            absolute,
        })
    }
}
