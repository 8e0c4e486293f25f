use super::GitRepo;
use anyhow::{Context, Result};
use git2::{DiffOptions, ErrorCode, Index, Tree};
use std::path::{Path, PathBuf};

/// One entry of the diff between `HEAD` and the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// The file existed in the last commit
    pub prior_blob_present: bool,
    /// The file exists in the pending commit
    pub current_blob_present: bool,
    /// Path relative to the repository root
    pub path: PathBuf,
}

impl GitRepo {
    /// Get the staged changes about to become the next commit, in diff order.
    ///
    /// `git commit -a` and `git commit <paths>` hand hooks a temporary index
    /// through `GIT_INDEX_FILE`; that index is read when set, the repository
    /// index otherwise.
    pub fn staged_changes(&self) -> Result<Vec<Change>> {
        let index_file = std::env::var_os("GIT_INDEX_FILE")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        self.staged_changes_in(index_file.as_deref())
    }

    /// Diff `HEAD` against `index_file`, or against the repository index when
    /// `None`. A relative `index_file` is resolved against the working tree root.
    ///
    /// An unborn `HEAD` is treated as the empty tree, so every staged file of
    /// a first commit shows up as an addition.
    pub fn staged_changes_in(&self, index_file: Option<&Path>) -> Result<Vec<Change>> {
        let head_tree = self.head_tree()?;
        let index = self.pending_index(index_file)?;

        let mut diff_opts = DiffOptions::new();
        diff_opts.include_typechange(true).context_lines(0);

        let diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), Some(&index), Some(&mut diff_opts))
            .context("Failed to diff the index against HEAD")?;

        let changes: Vec<Change> = diff
            .deltas()
            .filter_map(|delta| {
                let path = delta.new_file().path().or_else(|| delta.old_file().path())?;
                Some(Change {
                    prior_blob_present: delta.old_file().exists(),
                    current_blob_present: delta.new_file().exists(),
                    path: path.to_path_buf(),
                })
            })
            .collect();

        tracing::debug!("{} staged changes", changes.len());
        Ok(changes)
    }

    fn head_tree(&self) -> Result<Option<Tree<'_>>> {
        match self.repo.head() {
            Ok(head) => {
                let tree = head.peel_to_tree().context("Failed to read the HEAD tree")?;
                Ok(Some(tree))
            }
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                tracing::debug!("HEAD is unborn, diffing against the empty tree");
                Ok(None)
            }
            Err(e) => Err(e).context("Failed to get HEAD reference"),
        }
    }

    fn pending_index(&self, index_file: Option<&Path>) -> Result<Index> {
        match index_file {
            Some(index_file) => {
                let index_path = self.root().join(index_file);
                tracing::debug!("reading index from {}", index_path.display());
                Index::open(&index_path)
                    .with_context(|| format!("Failed to open index {}", index_path.display()))
            }
            None => self.repo.index().context("Failed to read repository index"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    fn stage(repo: &Repository, rel: &str) {
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(rel)).unwrap();
        index.write().unwrap();
    }

    fn unstage_removed(repo: &Repository, rel: &str) {
        let mut index = repo.index().unwrap();
        index.remove_path(Path::new(rel)).unwrap();
        index.write().unwrap();
    }

    fn commit(repo: &Repository) {
        let mut index = repo.index().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, "test commit", &tree, &parents)
            .unwrap();
    }

    #[test]
    fn test_unborn_head_reports_additions() {
        let dir = TempDir::new().unwrap();
        let raw = Repository::init(dir.path()).unwrap();
        write(dir.path(), "a.py", "x=1\n");
        stage(&raw, "a.py");

        let repo = GitRepo::open(dir.path()).unwrap();
        let changes = repo.staged_changes().unwrap();

        assert_eq!(
            changes,
            vec![Change {
                prior_blob_present: false,
                current_blob_present: true,
                path: PathBuf::from("a.py"),
            }]
        );
    }

    #[test]
    fn test_modify_add_and_delete_presence_flags() {
        let dir = TempDir::new().unwrap();
        let raw = Repository::init(dir.path()).unwrap();
        write(dir.path(), "keep.py", "x=1\n");
        write(dir.path(), "gone.py", "y=1\n");
        stage(&raw, "keep.py");
        stage(&raw, "gone.py");
        commit(&raw);

        write(dir.path(), "keep.py", "x=2\n");
        stage(&raw, "keep.py");
        write(dir.path(), "new.py", "z=1\n");
        stage(&raw, "new.py");
        std::fs::remove_file(dir.path().join("gone.py")).unwrap();
        unstage_removed(&raw, "gone.py");

        let repo = GitRepo::open(dir.path()).unwrap();
        let changes = repo.staged_changes().unwrap();
        let by_path = |p: &str| changes.iter().find(|c| c.path == Path::new(p)).unwrap();

        assert_eq!(changes.len(), 3);
        assert!(by_path("keep.py").prior_blob_present);
        assert!(by_path("keep.py").current_blob_present);
        assert!(!by_path("new.py").prior_blob_present);
        assert!(by_path("new.py").current_blob_present);
        assert!(by_path("gone.py").prior_blob_present);
        assert!(!by_path("gone.py").current_blob_present);
    }

    #[test]
    fn test_unstaged_edits_are_not_reported() {
        let dir = TempDir::new().unwrap();
        let raw = Repository::init(dir.path()).unwrap();
        write(dir.path(), "a.py", "x=1\n");
        stage(&raw, "a.py");
        commit(&raw);

        write(dir.path(), "a.py", "x=2\n");

        let repo = GitRepo::open(dir.path()).unwrap();
        assert!(repo.staged_changes().unwrap().is_empty());
    }

    #[test]
    fn test_relative_index_file_is_read_instead_of_repository_index() {
        let dir = TempDir::new().unwrap();
        let raw = Repository::init(dir.path()).unwrap();
        write(dir.path(), "a.py", "x=1\n");
        stage(&raw, "a.py");
        commit(&raw);

        // Temporary index holds the edit, the repository index matches HEAD
        write(dir.path(), "a.py", "x=2\n");
        stage(&raw, "a.py");
        std::fs::copy(dir.path().join(".git/index"), dir.path().join(".git/commit-index")).unwrap();
        write(dir.path(), "a.py", "x=1\n");
        stage(&raw, "a.py");

        let repo = GitRepo::open(dir.path()).unwrap();
        assert!(repo.staged_changes_in(None).unwrap().is_empty());

        let changes = repo
            .staged_changes_in(Some(Path::new(".git/commit-index")))
            .unwrap();
        assert_eq!(
            changes,
            vec![Change {
                prior_blob_present: true,
                current_blob_present: true,
                path: PathBuf::from("a.py"),
            }]
        );
    }

    #[test]
    fn test_missing_index_file_is_empty_not_fatal() {
        let dir = TempDir::new().unwrap();
        let raw = Repository::init(dir.path()).unwrap();
        write(dir.path(), "a.py", "x=1\n");
        stage(&raw, "a.py");
        commit(&raw);

        let repo = GitRepo::open(dir.path()).unwrap();
        let changes = repo
            .staged_changes_in(Some(Path::new(".git/no-such-index")))
            .unwrap();

        // Every committed file reads as deleted from an empty index
        assert_eq!(changes.len(), 1);
        assert!(!changes[0].current_blob_present);
    }
}
