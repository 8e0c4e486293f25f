//! Formatter invocation
//!
//! Runs the configured formatter once over the whole batch of candidate
//! files. Its stdout and stderr are inherited so the user sees the
//! formatter's own report in the commit output.

use super::Formatter;
use crate::config::FormatterConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Formatter backed by an external command: `<command> <args...> <paths...>`
pub struct CommandFormatter {
    command: String,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl CommandFormatter {
    pub fn new(config: &FormatterConfig, working_dir: &Path) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            working_dir: working_dir.to_path_buf(),
        }
    }

    /// Whether the formatter program can be found on `PATH`
    pub fn is_available(&self) -> bool {
        which::which(&self.command).is_ok()
    }
}

impl Formatter for CommandFormatter {
    fn name(&self) -> &str {
        &self.command
    }

    fn run_formatter(&self, paths: &[PathBuf]) -> Result<bool> {
        tracing::info!("running {} on {} files", self.command, paths.len());

        let status = Command::new(&self.command)
            .args(&self.args)
            .args(paths)
            .current_dir(&self.working_dir)
            .status()
            .with_context(|| format!("Failed to execute formatter '{}'", self.command))?;

        tracing::debug!("formatter exited with {status}");
        Ok(status.success())
    }
}
