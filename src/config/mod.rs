//! Configuration management for preformat
//!
//! Settings are layered with figment (see [`core`]) and extracted into the
//! typed [`PreformatConfig`] below. Every key has a default in the embedded
//! `default-config.toml`, so a repository without any configuration formats
//! staged Python files with `black`.

pub mod core;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Main configuration structure for preformat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreformatConfig {
    /// External formatter invocation
    pub formatter: FormatterConfig,

    /// Re-staging invocation after a successful format
    pub staging: StagingConfig,

    /// Which staged files are eligible for formatting
    pub selection: SelectionConfig,

    /// Merge-in-progress detection
    pub merge: MergeConfig,
}

/// Formatter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Program to run (e.g., "black", "ruff")
    pub command: String,

    /// Arguments placed before the file paths
    #[serde(default)]
    pub args: Vec<String>,
}

/// Staging command configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagingConfig {
    /// Program to run, normally "git"
    pub command: String,

    /// Arguments placed before the file paths
    #[serde(default)]
    pub args: Vec<String>,
}

/// File selection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Recognized source extension, with or without the leading dot
    pub extension: String,

    /// Substring of the absolute path that marks test fixtures
    #[serde(default)]
    pub fixture_marker: String,

    /// Additional glob patterns matched against repo-relative paths
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Merge detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Marker file names under the git directory
    #[serde(default)]
    pub markers: Vec<String>,
}

impl SelectionConfig {
    /// Extension without its leading dot
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

impl PreformatConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.formatter.command.trim().is_empty() {
            anyhow::bail!("formatter.command cannot be empty");
        }

        if self.staging.command.trim().is_empty() {
            anyhow::bail!("staging.command cannot be empty");
        }

        if self.selection.normalized_extension().is_empty() {
            anyhow::bail!("selection.extension cannot be empty");
        }

        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests;
