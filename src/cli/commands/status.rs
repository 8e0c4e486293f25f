//! Show repository status
//!
//! Reports what the next hook run would see: repository root, merge state,
//! hook installation, formatter availability and the current candidates.

use super::{CommandContext, HOOK_NAME};
use crate::external::CommandFormatter;
use crate::hooks::pre_commit;
use anyhow::Result;
use clap::Args;
use serde::Serialize;

#[derive(Args, Default)]
pub struct StatusArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub repository: String,
    pub merge_in_progress: bool,
    pub hook_installed: bool,
    pub hook_managed: bool,
    pub formatter: String,
    pub formatter_available: bool,
    pub candidates: Vec<String>,
}

pub fn execute(args: StatusArgs, ctx: &CommandContext) -> Result<i32> {
    let repo = ctx.open_repo()?;
    let config = ctx.load_config(&repo)?;
    let plan = pre_commit::plan(&repo, &config)?;
    let formatter = CommandFormatter::new(&config.formatter, &plan.context.root);

    let report = StatusReport {
        repository: plan.context.root.display().to_string(),
        merge_in_progress: plan.context.merge_in_progress,
        hook_installed: repo.hook_exists(HOOK_NAME),
        hook_managed: repo.hook_is_managed(HOOK_NAME),
        formatter: config.formatter.command.clone(),
        formatter_available: formatter.is_available(),
        candidates: plan
            .candidates
            .iter()
            .map(|c| c.path.display().to_string())
            .collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(0);
    }

    print_report(&report, ctx);
    Ok(0)
}

fn print_report(report: &StatusReport, ctx: &CommandContext) {
    let output = &ctx.output;
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    output.header("preformat status");
    output.key_value("Repository:", &report.repository, false);
    output.key_value(
        "Merge in progress:",
        yes_no(report.merge_in_progress),
        report.merge_in_progress,
    );
    output.key_value("Formatter:", &report.formatter, false);
    output.blank_line();

    if report.formatter_available {
        output.success(&format!("{} found on PATH", report.formatter));
    } else {
        output.warning(&format!("{} not found on PATH", report.formatter));
    }

    match (report.hook_installed, report.hook_managed) {
        (true, true) => output.success(&format!("{HOOK_NAME} hook installed")),
        (true, false) => output.warning(&format!(
            "{HOOK_NAME} hook exists but is not managed by preformat"
        )),
        (false, _) => output.warning(&format!(
            "{HOOK_NAME} hook missing - run 'preformat install'"
        )),
    }

    if report.candidates.is_empty() {
        output.info("No staged files to format");
    } else {
        output.info(&format!("{} staged file(s) to format:", report.candidates.len()));
        output.file_list(&report.candidates);
    }
}
