//! Command-line interface for preformat
//!
//! This module provides the main CLI structure and command handling.
//! Running without a subcommand executes the pre-commit hook, which is how
//! git invokes the installed hook script.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
mod output;

pub use output::Output;

#[derive(Parser)]
#[command(
    name = "preformat",
    version = env!("CARGO_PKG_VERSION"),
    about = "Formats staged source files before each commit and re-stages them",
    long_about = "preformat runs as a git pre-commit hook. It selects the staged files of the \
                  configured source type, runs the configured formatter over them in one batch, \
                  and re-stages the result so the formatted content is what gets committed."
)]
pub struct Cli {
    /// Run as if started in <DIR> instead of current working directory
    #[arg(short = 'C', long = "directory", global = true)]
    pub directory: Option<PathBuf>,

    /// Repository root (discovered from the current directory when omitted)
    #[arg(long, env = "PREFORMAT_REPO", global = true)]
    pub repo: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the pre-commit formatting hook (default)
    Run(commands::run::RunArgs),
    /// Install the pre-commit hook into the repository
    Install(commands::install::InstallArgs),
    /// Remove the pre-commit hook installed by preformat
    Uninstall(commands::uninstall::UninstallArgs),
    /// Show repository, hook and candidate status
    Status(commands::status::StatusArgs),
    /// Configuration management
    Config(commands::config::ConfigArgs),
    /// Show version information
    Version,
}

impl Cli {
    /// Execute the CLI command, returning the process exit code
    pub fn run(self) -> Result<i32> {
        // Change directory if specified
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose > 0, self.quiet);
        let ctx = commands::CommandContext {
            repo: self.repo,
            config: self.config,
            output,
        };

        match self.command {
            Some(Commands::Run(args)) => commands::run::execute(args, &ctx),
            Some(Commands::Install(args)) => commands::install::execute(args, &ctx),
            Some(Commands::Uninstall(args)) => commands::uninstall::execute(args, &ctx),
            Some(Commands::Status(args)) => commands::status::execute(args, &ctx),
            Some(Commands::Config(args)) => commands::config::execute(args, &ctx),
            Some(Commands::Version) => commands::version::execute(&ctx),
            None => commands::run::execute(commands::run::RunArgs::default(), &ctx),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,globset=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,globset=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
