//! Git integration layer for preformat
//!
//! This module provides a high-level interface for Git operations using git2.
//! It handles repository detection, merge state and hook file management.
//! Reading the staged diff lives in [`operations`].

pub mod operations;

pub use operations::Change;

use anyhow::{Context, Result};
use git2::Repository;
use std::path::{Path, PathBuf};

/// Marker line written into hooks installed by preformat
pub const HOOK_MARKER: &str = "# managed by preformat";

pub struct GitRepo {
    pub repo: Repository,
    root: PathBuf,
}

impl GitRepo {
    /// Open the repository whose working tree root is `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::open(path)
            .with_context(|| format!("Failed to open Git repository at {}", path.display()))?;

        Self::from_repository(repo)
    }

    /// Discover and open a Git repository from current directory
    pub fn discover() -> Result<Self> {
        let repo = Repository::discover(".").context("No Git repository found")?;

        Self::from_repository(repo)
    }

    fn from_repository(repo: Repository) -> Result<Self> {
        let root = repo
            .workdir()
            .context("Repository has no working directory")?
            .to_path_buf();

        Ok(Self { repo, root })
    }

    /// Absolute root of the working tree
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `.git` directory
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// Whether any of the given marker files exists under the git directory
    pub fn merge_in_progress(&self, markers: &[String]) -> bool {
        markers.iter().any(|marker| {
            let present = self.git_dir().join(marker).exists();
            if present {
                tracing::debug!("merge marker {marker} present");
            }
            present
        })
    }

    fn hook_path(&self, hook_name: &str) -> PathBuf {
        self.git_dir().join("hooks").join(hook_name)
    }

    /// Check if a hook exists
    pub fn hook_exists(&self, hook_name: &str) -> bool {
        self.hook_path(hook_name).exists()
    }

    /// Check if an existing hook was written by preformat
    pub fn hook_is_managed(&self, hook_name: &str) -> bool {
        std::fs::read_to_string(self.hook_path(hook_name))
            .map(|content| content.contains(HOOK_MARKER))
            .unwrap_or(false)
    }

    /// Install a git hook
    pub fn install_hook(&self, hook_name: &str, hook_content: &str) -> Result<PathBuf> {
        let hook_path = self.hook_path(hook_name);
        let hooks_dir = self.git_dir().join("hooks");

        std::fs::create_dir_all(&hooks_dir).context("Failed to create hooks directory")?;
        std::fs::write(&hook_path, hook_content).context("Failed to write hook file")?;

        // Make hook executable on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&hook_path)
                .context("Failed to get hook file metadata")?
                .permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&hook_path, perms)
                .context("Failed to set hook file permissions")?;
        }

        Ok(hook_path)
    }

    /// Remove a git hook
    pub fn remove_hook(&self, hook_name: &str) -> Result<bool> {
        let hook_path = self.hook_path(hook_name);

        if !hook_path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(&hook_path).context("Failed to remove hook file")?;
        Ok(true)
    }
}
