//! User-facing output for preformat
//!
//! Everything the hook prints goes through [`Output`]. Status lines carry a
//! one-character prefix; errors go to stderr and are shown even with `-q`,
//! since git relays them when a commit is blocked.

use console::{StyledObject, style};
use std::path::Path;

/// Styled printer honouring `-v` and `-q`
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn success(&self, message: &str) {
        self.line(style("✔").green(), message);
    }

    /// Print to stderr regardless of `-q`
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✖").red(), message);
    }

    pub fn warning(&self, message: &str) {
        self.line(style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        self.line(style("ℹ").blue(), message);
    }

    /// Dimmed detail, shown only with `-v`
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            self.line(style("ℹ").dim(), &style(message).dim().to_string());
        }
    }

    /// Print one bullet per path, in the order given
    pub fn file_list<I, P>(&self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        if self.quiet {
            return;
        }
        for path in paths {
            println!("  • {}", path.as_ref().display());
        }
    }

    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Aligned `key value` row; `highlight` renders the value in bold green
    pub fn key_value(&self, key: &str, value: &str, highlight: bool) {
        if self.quiet {
            return;
        }
        let value = if highlight {
            style(value).green().bold()
        } else {
            style(value).white()
        };
        println!("  {:<20} {}", style(key).dim(), value);
    }

    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }

    fn line(&self, prefix: StyledObject<&str>, message: &str) {
        if !self.quiet {
            println!("{prefix} {message}");
        }
    }
}
