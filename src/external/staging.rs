use super::Stager;
use crate::config::StagingConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Stager backed by an external command, `git add --` by default
pub struct CommandStager {
    command: String,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl CommandStager {
    pub fn new(config: &StagingConfig, working_dir: &Path) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            working_dir: working_dir.to_path_buf(),
        }
    }
}

impl Stager for CommandStager {
    fn stage_files(&self, paths: &[PathBuf]) -> Result<i32> {
        tracing::info!("re-staging {} files", paths.len());

        let status = Command::new(&self.command)
            .args(&self.args)
            .args(paths)
            .current_dir(&self.working_dir)
            .status()
            .with_context(|| format!("Failed to execute staging command '{}'", self.command))?;

        // Killed by a signal: no code to propagate
        Ok(status.code().unwrap_or(1))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn stager(command: &str, args: &[&str], dir: &Path) -> CommandStager {
        let config = StagingConfig {
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        };
        CommandStager::new(&config, dir)
    }

    #[test]
    fn test_exit_code_propagates_verbatim() {
        let dir = TempDir::new().unwrap();

        assert_eq!(stager("true", &[], dir.path()).stage_files(&[]).unwrap(), 0);
        assert_eq!(
            stager("sh", &["-c", "exit 3"], dir.path())
                .stage_files(&[])
                .unwrap(),
            3
        );
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = stager("preformat-no-such-stager", &[], dir.path())
            .stage_files(&[PathBuf::from("a.py")]);

        assert!(result.is_err());
    }
}
