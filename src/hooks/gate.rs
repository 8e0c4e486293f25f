//! Format gate
//!
//! Decides whether the formatter runs, runs it once over every candidate and
//! re-stages the results on success. The run moves through
//! Gating → Formatting → Staging → Done, leaving early from Gating when there
//! is nothing to do or a merge is in progress, and from Formatting when the
//! formatter fails.

use super::selector::CandidateFile;
use crate::external::{Formatter, Stager};
use anyhow::Result;
use std::path::PathBuf;

/// How a gate run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// No eligible files were staged
    NothingToFormat,
    /// A merge is being concluded; files are left as the user resolved them
    MergeInProgress,
    /// The formatter exited non-zero or could not be started
    FormatterFailed,
    /// Formatting succeeded and the staging command exited with `code`
    Staged { code: i32 },
}

impl GateOutcome {
    /// Process exit code for the hook
    pub fn exit_code(self) -> i32 {
        match self {
            GateOutcome::NothingToFormat | GateOutcome::MergeInProgress => 0,
            GateOutcome::FormatterFailed => 1,
            GateOutcome::Staged { code } => code,
        }
    }

    pub fn is_success(self) -> bool {
        self.exit_code() == 0
    }
}

pub struct FormatGate<'a> {
    formatter: &'a dyn Formatter,
    stager: &'a dyn Stager,
}

impl<'a> FormatGate<'a> {
    pub fn new(formatter: &'a dyn Formatter, stager: &'a dyn Stager) -> Self {
        Self { formatter, stager }
    }

    /// Run the gate over `candidates`.
    ///
    /// Only a staging command that cannot be started is an `Err`; every other
    /// ending is a [`GateOutcome`].
    pub fn run(
        &self,
        candidates: &[CandidateFile],
        merge_in_progress: bool,
    ) -> Result<GateOutcome> {
        if candidates.is_empty() {
            tracing::debug!("gating -> done: nothing to format");
            return Ok(GateOutcome::NothingToFormat);
        }

        if merge_in_progress {
            tracing::debug!("gating -> done: merge in progress");
            return Ok(GateOutcome::MergeInProgress);
        }

        let paths: Vec<PathBuf> = candidates.iter().map(|c| c.path.clone()).collect();

        tracing::info!("formatting {} files", paths.len());
        let formatted = match self.formatter.run_formatter(&paths) {
            Ok(success) => success,
            Err(e) => {
                tracing::warn!("{e:#}");
                false
            }
        };

        if !formatted {
            tracing::debug!("formatting -> done: {} failed", self.formatter.name());
            return Ok(GateOutcome::FormatterFailed);
        }

        tracing::debug!("formatting -> staging");
        let code = self.stager.stage_files(&paths)?;
        if code != 0 {
            tracing::warn!("staging exited with {code}");
        }

        Ok(GateOutcome::Staged { code })
    }
}
