//! CLI module for the cellgen code generator
//!
//! ## Commands
//!
//! - `emit <file>` - Generate the Java class for a sequence document
//! - `hierarchy <file>` - Print the call hierarchy reachable from the entry point
//! - `check <file>` - Decode the document and resolve its entry point
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

use clap::{Args, Parser, Subcommand};

use crate::backend::{EmitConfig, IndentStyle};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
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

    /// Render a diagnostic (code, help, cause chain) through miette's report handler.
    pub fn report<E>(error: E) -> Self
    where
        E: miette::Diagnostic + Send + Sync + 'static,
    {
        Self::failure(format!("{:?}", miette::Report::new(error)))
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

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Java code generator for robot-cell sequence programs
#[derive(Parser, Debug)]
#[command(name = "cellgen")]
#[command(version = VERSION)]
#[command(about = "Generate Java classes from robot-cell sequence programs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the Java class for a sequence document
    Emit {
        /// Sequence document (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Write the class here instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
        #[command(flatten)]
        options: EmitOptions,
    },

    /// Print the call hierarchy reachable from the entry point
    Hierarchy {
        /// Sequence document (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Decode a document and resolve its entry point
    Check {
        /// Sequence document (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Flags mapped onto [`EmitConfig`].
#[derive(Args, Debug, Default)]
pub struct EmitOptions {
    /// Indent with N spaces instead of tabs
    #[arg(long, value_name = "N", conflicts_with = "tabs")]
    pub indent_width: Option<usize>,
    /// Indent with tabs (default)
    #[arg(long)]
    pub tabs: bool,
    /// Name of the public entry method
    #[arg(long, value_name = "NAME")]
    pub entry_method: Option<String>,
    /// Class name (default: derived from the program id)
    #[arg(long, value_name = "NAME")]
    pub class_name: Option<String>,
    /// Declared type of inferred fields
    #[arg(long, value_name = "TYPE")]
    pub member_type: Option<String>,
}

impl EmitOptions {
    pub fn to_config(&self) -> EmitConfig {
        let mut config = EmitConfig::default();
        if self.tabs {
            config = config.with_indent(IndentStyle::Tabs);
        } else if let Some(width) = self.indent_width {
            config = config.with_indent(IndentStyle::Spaces(width));
        }
        if let Some(name) = &self.entry_method {
            config = config.with_entry_method(name.as_str());
        }
        if let Some(name) = &self.class_name {
            config = config.with_class_name(name.as_str());
        }
        if let Some(ty) = &self.member_type {
            config = config.with_member_type(ty.as_str());
        }
        config
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
    let cli = Cli::parse();

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
    match cli.command {
        Command::Emit { file, output, options } => commands::emit_file(&file, output.as_deref(), options.to_config()),
        Command::Hierarchy { file } => commands::print_hierarchy(&file),
        Command::Check { file } => commands::check_file(&file),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_emit() {
        let cli = Cli::try_parse_from(["cellgen", "emit", "cycle.json"]).unwrap();
        if let Command::Emit { file, output, options } = cli.command {
            assert_eq!(file, PathBuf::from("cycle.json"));
            assert!(output.is_none());
            assert_eq!(options.to_config(), EmitConfig::default());
        } else {
            panic!("Expected Emit command");
        }
    }

    #[test]
    fn test_cli_parse_emit_options() {
        let cli = Cli::try_parse_from([
            "cellgen",
            "emit",
            "cycle.json",
            "-o",
            "Cycle.java",
            "--indent-width",
            "4",
            "--entry-method",
            "run",
            "--class-name",
            "Cycle",
            "--member-type",
            "CellObject",
        ])
        .unwrap();
        let Command::Emit { output, options, .. } = cli.command else {
            panic!("Expected Emit command");
        };
        assert_eq!(output, Some(PathBuf::from("Cycle.java")));
        let config = options.to_config();
        assert_eq!(config.indent, IndentStyle::Spaces(4));
        assert_eq!(config.entry_method, "run");
        assert_eq!(config.class_name.as_deref(), Some("Cycle"));
        assert_eq!(config.member_type, "CellObject");
    }

    #[test]
    fn test_cli_tabs_flag_selects_tab_indent() {
        let cli = Cli::try_parse_from(["cellgen", "emit", "a.json", "--tabs"]).unwrap();
        let Command::Emit { options, .. } = cli.command else {
            panic!("Expected Emit command");
        };
        assert!(options.tabs);
        assert_eq!(options.to_config().indent, IndentStyle::Tabs);
    }

    #[test]
    fn test_cli_indent_flags_conflict() {
        let result = Cli::try_parse_from(["cellgen", "emit", "a.json", "--tabs", "--indent-width", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_hierarchy_and_check() {
        let cli = Cli::try_parse_from(["cellgen", "hierarchy", "a.json"]).unwrap();
        assert!(matches!(cli.command, Command::Hierarchy { .. }));

        let cli = Cli::try_parse_from(["cellgen", "check", "a.json"]).unwrap();
        assert!(matches!(cli.command, Command::Check { .. }));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["cellgen"]).is_err());
    }
}
