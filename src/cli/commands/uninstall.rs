use super::{CommandContext, HOOK_NAME};
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct UninstallArgs {
    /// Remove the hook even if preformat did not write it
    #[arg(long)]
    pub force: bool,
}

pub fn execute(args: UninstallArgs, ctx: &CommandContext) -> Result<i32> {
    let output = &ctx.output;
    let repo = ctx.open_repo()?;

    if !repo.hook_exists(HOOK_NAME) {
        output.info(&format!("No {HOOK_NAME} hook installed"));
        return Ok(0);
    }

    if !repo.hook_is_managed(HOOK_NAME) && !args.force {
        output.warning(&format!(
            "The {HOOK_NAME} hook is not managed by preformat; leaving it in place"
        ));
        return Ok(1);
    }

    repo.remove_hook(HOOK_NAME)?;
    output.success(&format!("Removed {HOOK_NAME} hook"));
    Ok(0)
}
