use super::CommandContext;
use crate::config::PreformatConfig;
use crate::git::GitRepo;
use crate::hooks::pre_commit;
use anyhow::Result;
use clap::Args;

#[derive(Args, Default)]
pub struct RunArgs {
    /// List the files that would be formatted without running anything
    #[arg(long)]
    pub dry_run: bool,
}

pub fn execute(args: RunArgs, ctx: &CommandContext) -> Result<i32> {
    let repo = ctx.open_repo()?;
    let config = ctx.load_config(&repo)?;

    if args.dry_run {
        return dry_run(&repo, &config, ctx);
    }

    pre_commit::execute(&repo, &config, &ctx.output)
}

fn dry_run(repo: &GitRepo, config: &PreformatConfig, ctx: &CommandContext) -> Result<i32> {
    let plan = pre_commit::plan(repo, config)?;
    let output = &ctx.output;

    if plan.candidates.is_empty() {
        output.info("No staged files to format");
        return Ok(0);
    }

    if plan.context.merge_in_progress {
        output.info("Merge in progress - formatting would be skipped");
        return Ok(0);
    }

    output.info(&format!(
        "Would run {} on {} file(s):",
        config.formatter.command,
        plan.candidates.len()
    ));
    output.file_list(plan.candidates.iter().map(|c| &c.path));

    Ok(0)
}
