//! CLI module for the runner generator
//!
//! ## Usage
//!
//! ```text
//! runnergen [OPTIONS] <INPUT.c> [OUTPUT.c] [CONFIG.yml ...] [EXTRA.h ...]
//! ```
//!
//! Positional arguments are classified by extension, so they may come in any order: `.yml`/`.yaml` files are
//! config files, `.h` files are extra includes, and the first two remaining paths are the input and the output.
//! The output defaults to the input with `.c` replaced by `_Runner.c`.
//!
//! ## Modules
//!
//! - `commands` - Command implementations
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
use runnergen_core::lang::conventions::default_runner_path;
use runnergen_core::lang::plugins::PluginId;

use crate::config::{Flag, GenerationOptions, OptionOverrides, load_config_file};
use crate::version::RUNNERGEN_VERSION;

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

    /// Create an error with a custom exit code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self::new(message, ExitCode(code))
    }

    /// Render a library diagnostic as a failure.
    pub fn diagnostic<E>(err: E) -> Self
    where
        E: miette::Diagnostic + Send + Sync + 'static,
    {
        Self::failure(format!("{:?}", miette::Report::new(err)))
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

/// Exit code for invalid command-line usage.
const USAGE_EXIT_CODE: i32 = 2;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate a C unit-test runner from a test source file
#[derive(Parser, Debug)]
#[command(name = "runnergen")]
#[command(version = RUNNERGEN_VERSION)]
#[command(about = "Generate a C unit-test runner from a test source file", long_about = None)]
pub struct Cli {
    /// Input test file, optional output path, config files (.yml) and extra includes (.h), in any order
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,

    /// Config file (YAML with a `unity` or `cmock` section); may be repeated
    #[arg(long = "config", value_name = "FILE")]
    pub config: Vec<PathBuf>,

    /// Enable the CException plugin
    #[arg(long = "cexception")]
    pub cexception: bool,

    /// Per-test setup function
    #[arg(long = "setup-name", alias = "setup_name", value_name = "NAME")]
    pub setup_name: Option<String>,

    /// Per-test teardown function
    #[arg(long = "teardown-name", alias = "teardown_name", value_name = "NAME")]
    pub teardown_name: Option<String>,

    /// Entry point name, or `auto` for `main_<input stem>`
    #[arg(long = "main-name", alias = "main_name", value_name = "NAME")]
    pub main_name: Option<String>,

    /// Declaration prefix for a non-`main` entry point prototype
    #[arg(long = "main-export-decl", alias = "main_export_decl", value_name = "DECL")]
    pub main_export_decl: Option<String>,

    /// Regex alternation test names must start with
    #[arg(long = "test-prefix", alias = "test_prefix", value_name = "PATTERN")]
    pub test_prefix: Option<String>,

    /// C code run once before all tests
    #[arg(long = "suite-setup", alias = "suite_setup", value_name = "CODE")]
    pub suite_setup: Option<String>,

    /// C code run once after all tests (sees `num_failures`, returns the exit status)
    #[arg(long = "suite-teardown", alias = "suite_teardown", value_name = "CODE")]
    pub suite_teardown: Option<String>,

    /// Expand TEST_CASE(...) markers into one run per argument set
    #[arg(
        long = "use-param-tests",
        alias = "use_param_tests",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub use_param_tests: Option<String>,

    /// Compile command-line test filtering into the runner
    #[arg(
        long = "cmdline-args",
        alias = "cmdline_args",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub cmdline_args: Option<String>,

    /// Emit globals for mock call-order verification
    #[arg(
        long = "enforce-strict-ordering",
        alias = "enforce_strict_ordering",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub enforce_strict_ordering: Option<String>,

    /// Also generate a companion header at this path
    #[arg(long = "header-file", alias = "header_file", value_name = "FILE")]
    pub header_file: Option<String>,

    /// Test framework name (its header is `<name>.h`)
    #[arg(long = "framework", value_name = "NAME")]
    pub framework: Option<String>,

    /// Extra `#define` for the runner; may be repeated
    #[arg(long = "define", value_name = "MACRO")]
    pub defines: Vec<String>,

    /// Extra header to include; may be repeated
    #[arg(long = "include", value_name = "HEADER")]
    pub includes: Vec<String>,

    /// Print every file the run used, one per line
    #[arg(long = "list-files", alias = "list_files")]
    pub list_files: bool,
}

/// Positional arguments sorted by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positionals {
    pub input: String,
    pub output: String,
    pub configs: Vec<PathBuf>,
    pub headers: Vec<String>,
}

/// Sort positional arguments by extension.
///
/// ## Errors
///
/// Fails when no input file is given or more than two non-config, non-header paths are.
pub fn classify_positionals(files: &[String]) -> CliResult<Positionals> {
    let mut configs = Vec::new();
    let mut headers = Vec::new();
    let mut paths = Vec::new();

    for file in files {
        let lower = file.to_ascii_lowercase();
        if lower.ends_with(".yml") || lower.ends_with(".yaml") {
            configs.push(PathBuf::from(file));
        } else if lower.ends_with(".h") {
            headers.push(file.clone());
        } else {
            paths.push(file.clone());
        }
    }

    let mut paths = paths.into_iter();
    let Some(input) = paths.next() else {
        return Err(CliError::with_code("Error: no input file given", USAGE_EXIT_CODE));
    };
    let output = paths.next().unwrap_or_else(|| default_runner_path(&input));
    if let Some(extra) = paths.next() {
        return Err(CliError::with_code(
            format!("Error: unexpected extra argument '{extra}' (input and output are already set)"),
            USAGE_EXIT_CODE,
        ));
    }

    Ok(Positionals {
        input,
        output,
        configs,
        headers,
    })
}

impl Cli {
    /// Option overrides given directly as flags.
    fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            framework: self.framework.clone(),
            test_prefix: self.test_prefix.clone(),
            setup_name: self.setup_name.clone(),
            teardown_name: self.teardown_name.clone(),
            main_name: self.main_name.clone(),
            main_export_decl: self.main_export_decl.clone(),
            cmdline_args: self.cmdline_args.clone().map(Flag::Text),
            use_param_tests: self.use_param_tests.clone().map(Flag::Text),
            suite_setup: self.suite_setup.clone(),
            suite_teardown: self.suite_teardown.clone(),
            enforce_strict_ordering: self.enforce_strict_ordering.clone().map(Flag::Text),
            header_file: self.header_file.clone(),
            ..OptionOverrides::default()
        }
    }

    /// Resolve options: defaults, then each config file in order, then flags.
    ///
    /// Includes and defines given on the command line are appended to those from config files.
    pub fn resolve_options(&self, positionals: &Positionals) -> CliResult<GenerationOptions> {
        let mut options = GenerationOptions::default();

        for path in self.config.iter().chain(positionals.configs.iter()) {
            let overrides = load_config_file(path).map_err(CliError::diagnostic)?;
            options = overrides.apply(options).map_err(CliError::diagnostic)?;
        }

        options = self.overrides().apply(options).map_err(CliError::diagnostic)?;
        for include in self.includes.iter().chain(positionals.headers.iter()) {
            options = options.with_include(include.as_str());
        }
        for define in &self.defines {
            options = options.with_define(define.as_str());
        }
        if self.cexception {
            options = options.with_plugin(PluginId::CException);
        }
        Ok(options)
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
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let positionals = classify_positionals(&cli.files)?;
    let options = cli.resolve_options(&positionals)?;
    commands::generate_runner(&positionals.input, &positionals.output, &options, cli.list_files)
}

// ============================================================================
// Tests
// ============================================================================
