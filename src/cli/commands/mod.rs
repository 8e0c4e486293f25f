//! Command implementations for the preformat CLI
//!
//! Each command is organized into its own module.

pub mod config;
pub mod install;
pub mod run;
pub mod status;
pub mod uninstall;
pub mod version;

use crate::cli::Output;
use crate::config::PreformatConfig;
use crate::git::GitRepo;
use anyhow::Result;
use std::path::PathBuf;

/// Name of the git hook preformat manages
pub const HOOK_NAME: &str = "pre-commit";

/// Global options shared by every command
pub struct CommandContext {
    pub repo: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub output: Output,
}

impl CommandContext {
    /// Open the explicitly given repository, or discover one from the current directory
    pub fn open_repo(&self) -> Result<GitRepo> {
        match &self.repo {
            Some(root) => GitRepo::open(root),
            None => GitRepo::discover(),
        }
    }

    /// Load configuration for `repo`
    pub fn load_config(&self, repo: &GitRepo) -> Result<PreformatConfig> {
        PreformatConfig::load(repo.root(), self.config.as_deref())
    }
}
