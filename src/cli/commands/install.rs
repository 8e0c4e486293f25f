use super::{CommandContext, HOOK_NAME};
use crate::git::HOOK_MARKER;
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct InstallArgs {
    /// Overwrite an existing hook not managed by preformat
    #[arg(long)]
    pub force: bool,

    /// Program the hook should invoke
    #[arg(long, default_value = "preformat")]
    pub binary: String,
}

/// Script written to `.git/hooks/pre-commit`
pub fn hook_script(binary: &str) -> String {
    format!("#!/bin/sh\n{HOOK_MARKER}\nexec {} run\n", shell_quote(binary))
}

/// Single-quote `word` for `sh`; embedded quotes become `'\''`
fn shell_quote(word: &str) -> String {
    format!("'{}'", word.replace('\'', "'\\''"))
}

pub fn execute(args: InstallArgs, ctx: &CommandContext) -> Result<i32> {
    let output = &ctx.output;
    let repo = ctx.open_repo()?;

    if repo.hook_exists(HOOK_NAME) && !repo.hook_is_managed(HOOK_NAME) && !args.force {
        output.error(&format!("A {HOOK_NAME} hook not managed by preformat already exists"));
        output.info("Re-run with --force to overwrite it");
        return Ok(1);
    }

    if args.force && repo.hook_exists(HOOK_NAME) {
        output.warning("Force mode enabled - overwriting existing hook");
    }

    let path = repo.install_hook(HOOK_NAME, &hook_script(&args.binary))?;
    tracing::info!("hook written to {}", path.display());

    output.success(&format!("Installed {HOOK_NAME} hook at {}", path.display()));
    Ok(0)
}
