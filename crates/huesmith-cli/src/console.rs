//! CLI console utilities

use colored::*;
use console::Term;
use huesmith_core::HexColor;
use indicatif::{ProgressBar, ProgressStyle};

/// Console for formatted output
pub struct Console {
    verbose: bool,
    is_term: bool,
}

impl Console {
    /// Create a new console
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            is_term: Term::stdout().is_term(),
        }
    }

    /// Print an info message (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print extracted color swatches
    pub fn print_colors(&self, colors: &[HexColor]) {
        for color in colors {
            let (r, g, b) = color.to_rgb();
            println!("  {} {}", "■".truecolor(r, g, b), color.as_str().dimmed());
        }
    }

    /// Start a spinner while waiting for the first token
    ///
    /// Hidden when stdout is not a terminal so piped output stays clean.
    pub fn start_spinner(&self, message: &str) -> ProgressBar {
        if !self.is_term {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.blue} {msg}")
                .expect("Invalid progress template"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}
