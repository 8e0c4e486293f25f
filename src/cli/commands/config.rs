use super::CommandContext;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the merged configuration as TOML
    Show,
    /// Load and validate the configuration
    Validate,
}

pub fn execute(args: ConfigArgs, ctx: &CommandContext) -> Result<i32> {
    let repo = ctx.open_repo()?;
    let config = ctx.load_config(&repo)?;

    match args.action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Validate => {
            ctx.output.success("Configuration is valid");
            if ctx.output.is_verbose() {
                ctx.output.key_value("Formatter:", &config.formatter.command, false);
                let extension = config.selection.normalized_extension();
                ctx.output.key_value("Extension:", extension, false);
            }
        }
    }

    Ok(0)
}
