//! Pre-commit hook implementation
//!
//! Selects the staged source files, formats them in one batch and re-stages
//! them so the formatted content lands in the commit being created.

use super::{
    CandidateFile, ChangeSelector, FormatGate, GateOutcome, RepositoryContext, SelectionRules,
};
use crate::cli::Output;
use crate::config::PreformatConfig;
use crate::external::{CommandFormatter, CommandStager, Formatter};
use crate::git::GitRepo;
use anyhow::Result;

/// What a hook run would work on, without running anything
#[derive(Debug, Clone)]
pub struct Plan {
    pub context: RepositoryContext,
    pub candidates: Vec<CandidateFile>,
}

/// Read repository state and select the candidate files
pub fn plan(repo: &GitRepo, config: &PreformatConfig) -> Result<Plan> {
    let context = RepositoryContext::capture(repo, &config.merge.markers);
    let rules = SelectionRules::from_config(&config.selection)?;

    tracing::debug!("selecting candidates under {}", context.root.display());
    let candidates = ChangeSelector::new(&context.root, rules).select(repo)?;

    Ok(Plan {
        context,
        candidates,
    })
}

/// Execute pre-commit hook, returning the process exit code
pub fn execute(repo: &GitRepo, config: &PreformatConfig, output: &Output) -> Result<i32> {
    let Plan {
        context,
        candidates,
    } = plan(repo, config)?;

    let formatter = CommandFormatter::new(&config.formatter, &context.root);
    let stager = CommandStager::new(&config.staging, &context.root);

    let outcome =
        FormatGate::new(&formatter, &stager).run(&candidates, context.merge_in_progress)?;

    report(outcome, &candidates, &formatter, output);
    Ok(outcome.exit_code())
}

fn report(
    outcome: GateOutcome,
    candidates: &[CandidateFile],
    formatter: &dyn Formatter,
    output: &Output,
) {
    match outcome {
        GateOutcome::NothingToFormat => {
            output.verbose("No staged files to format");
        }
        GateOutcome::MergeInProgress => {
            output.verbose("Merge in progress - skipping formatting");
        }
        GateOutcome::FormatterFailed => {
            output.error(&format!("{} failed to reformat files.", formatter.name()));
        }
        GateOutcome::Staged { code: 0 } => {
            output.success(&format!(
                "Formatted and re-staged {} file(s) with {}",
                candidates.len(),
                formatter.name()
            ));
            if output.is_verbose() {
                output.file_list(candidates.iter().map(|c| &c.path));
            }
        }
        GateOutcome::Staged { code } => {
            output.error(&format!("Re-staging formatted files failed (exit code {code})"));
            output.warning("Files are formatted on disk but may be unstaged; stage them manually");
        }
    }
}
