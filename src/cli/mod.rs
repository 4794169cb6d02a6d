//! CLI module for the surface extractor
//!
//! ## Usage
//!
//! ```text
//! apisurface [--output FILE] [--include-main] [--vendor-segment SEG] <PACKAGE>...
//! ```
//!
//! Each `PACKAGE` is a resolved package document (`-` reads standard input). The surfaces of all loaded packages
//! are written as one document, ordered by import path.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                             |
//! |------|-----------------------------------------------------|
//! | 0    | success                                             |
//! | 1    | invalid arguments (usage is printed) or write error |
//! | 2    | packages could not be loaded                        |
//! | 3    | a package contained a shape that cannot be rendered |
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;

use crate::format::FormatConfig;
use crate::frontend::loader::JsonProgramLoader;
use crate::version::APISURFACE_VERSION;
use apisurface_core::lang::conventions::VENDOR_SEGMENT;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    pub const LOAD_FAILURE: ExitCode = ExitCode(2);
    pub const RENDER_FAILURE: ExitCode = ExitCode(3);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Extract the canonical public API surface of resolved packages
#[derive(Parser, Debug)]
#[command(name = "apisurface")]
#[command(version = APISURFACE_VERSION)]
#[command(about = "Extract the canonical public API surface of resolved packages", long_about = None)]
pub struct Cli {
    /// Resolved package documents (`-` reads standard input)
    #[arg(value_name = "PACKAGE", required = true)]
    pub packages: Vec<String>,

    /// Write the surface to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Keep entry-point (`main`) packages
    #[arg(long)]
    pub include_main: bool,

    /// Directory segment marking vendored package copies
    #[arg(long, value_name = "SEGMENT", default_value = VENDOR_SEGMENT)]
    pub vendor_segment: String,
}

impl Cli {
    /// Surface configuration selected by the flags.
    pub fn format_config(&self) -> FormatConfig {
        FormatConfig::new()
            .with_skip_entry_packages(!self.include_main)
            .with_vendor_segment(self.vendor_segment.clone())
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders the usage text for argument errors.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
            let _ = e.print();
            process::exit(code.0);
        }
    };

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.format_config();
    commands::extract(&cli.packages, &JsonProgramLoader, &config, cli.output.as_deref())
}

// ============================================================================
// Tests
// ============================================================================
