//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying spinners, status lines and
//! errors, honouring the global `--quiet` / `--json` / `--verbose` flags.

use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Global output settings, fixed once at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress everything except errors
    pub quiet: bool,
    /// Machine-readable output only
    pub json: bool,
    /// Verbosity level (0 = warnings, 1 = info, 2+ = debug)
    pub verbose: u8,
}

static OUTPUT: OnceLock<OutputConfig> = OnceLock::new();

impl OutputConfig {
    /// Create output settings from CLI flags
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Install as the process-wide settings. Later calls are ignored.
    pub fn apply_global(self) {
        let _ = OUTPUT.set(self);
    }

    /// The process-wide settings (defaults if never applied)
    pub fn global() -> Self {
        OUTPUT.get().copied().unwrap_or_default()
    }

    /// Whether human-readable status lines should be printed
    pub fn human(self) -> bool {
        !self.quiet && !self.json
    }

    /// Default tracing filter directive for the verbosity level
    pub fn log_level(self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Create a spinner for operations with unknown duration
///
/// Hidden when human output is disabled.
pub fn create_spinner(message: &str) -> ProgressBar {
    if !OutputConfig::global().human() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Format a status line
pub fn format_status(prefix: &str, message: &str) -> String {
    format!("{prefix} {message}")
}

/// Print a success line
pub fn print_success(message: &str) {
    if OutputConfig::global().human() {
        println!("{}", format_status(status::SUCCESS, message));
    }
}

/// Print a warning line
pub fn print_warning(message: &str) {
    if OutputConfig::global().human() {
        println!("{}", format_status(status::WARNING, message));
    }
}

/// Print an info line
pub fn print_info(message: &str) {
    if OutputConfig::global().human() {
        println!("{}", format_status(status::INFO, message));
    }
}

/// Print an indented detail line
pub fn print_detail(message: &str) {
    if OutputConfig::global().human() {
        println!("  {message}");
    }
}

/// Print a failure line to stderr. Shown even in quiet mode.
pub fn print_failure(message: &str) {
    if !OutputConfig::global().json {
        eprintln!("{}", format_status(status::ERROR, message));
    }
}

/// Print a JSON document to stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display an error and its causes to stderr
pub fn display_error(err: &anyhow::Error) {
    eprintln!("{}", format_status(status::ERROR, &format!("Error: {err}")));
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}
