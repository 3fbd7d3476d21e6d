//! Generation options.
//!
//! [`GenerationOptions`] is resolved once per run and threaded by reference through scanning and generation. It is
//! never read from global state.
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults
//! 2. A YAML config file (`unity:` or `cmock:` section), see [`loader`]
//! 3. Command-line overrides
//!
//! Files and flags both produce an [`OptionOverrides`] that is applied on top of the current options.

mod loader;
mod overrides;

pub use loader::{load_config_file, parse_config};
pub use overrides::{Flag, OptionOverrides};

use std::collections::BTreeSet;
use std::path::PathBuf;

use miette::Diagnostic;
use runnergen_core::lang::conventions::{
    AUTO_MAIN_NAME, AUTO_MAIN_PREFIX, DEFAULT_MAIN_NAME, DEFAULT_SETUP_NAME, DEFAULT_TEARDOWN_NAME,
    DEFAULT_TEST_PREFIX,
};
use runnergen_core::lang::framework::DEFAULT_FRAMEWORK;
use runnergen_core::lang::plugins::PluginId;
use runnergen_core::sanitize_c_identifier;
use runnergen_syntax::ScanOptions;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    #[diagnostic(code(runnergen::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {origin}: {source}")]
    #[diagnostic(code(runnergen::config::parse))]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("no :unity or :cmock section found in {origin}")]
    #[diagnostic(
        code(runnergen::config::missing_section),
        help("put the generator options under a top-level `:unity:` (or `:cmock:`) key")
    )]
    MissingSection { origin: String },

    #[error("invalid value `{value}` for option `{key}`")]
    #[diagnostic(code(runnergen::config::invalid_value))]
    InvalidValue { key: String, value: String },
}

/// Name of the generated entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainName {
    /// Use this name as written.
    Literal(String),
    /// Derive `main_<stem>` from the input file name.
    Auto,
}

impl MainName {
    /// Parse the config spelling; `auto` and `:auto` select [`MainName::Auto`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.trim_start_matches(':') == AUTO_MAIN_NAME {
            MainName::Auto
        } else {
            MainName::Literal(trimmed.to_string())
        }
    }

    /// Resolve the function name for a given input file.
    ///
    /// The auto name uses the basename with its `.c` extension removed, sanitized into an identifier.
    pub fn resolve(&self, input_name: &str) -> String {
        match self {
            MainName::Literal(name) => name.clone(),
            MainName::Auto => {
                let basename = input_name.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(input_name);
                let stem = basename.strip_suffix(".c").unwrap_or(basename);
                format!("{AUTO_MAIN_PREFIX}{}", sanitize_c_identifier(stem))
            }
        }
    }
}

impl Default for MainName {
    fn default() -> Self {
        MainName::Literal(DEFAULT_MAIN_NAME.to_string())
    }
}

/// Options that steer scanning and generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Extra headers included by the runner (`"x.h"` or `<x.h>`).
    pub includes: Vec<String>,
    /// Macros emitted as `#define` lines.
    pub defines: Vec<String>,
    /// Enabled plugins.
    pub plugins: BTreeSet<PluginId>,
    /// Test framework; its header is `<framework>.h`.
    pub framework: String,
    /// Regex alternation a test name must start with.
    pub test_prefix: String,
    /// Per-test setup function.
    pub setup_name: String,
    /// Per-test teardown function.
    pub teardown_name: String,
    /// Entry point name.
    pub main_name: MainName,
    /// Declaration prefix for a non-`main` entry point prototype (e.g. an export macro).
    pub main_export_decl: String,
    /// Compile command-line test filtering into the runner.
    pub cmdline_args: bool,
    /// Expand `TEST_CASE(...)` markers into one invocation each.
    pub use_param_tests: bool,
    /// Code run once before all tests.
    pub suite_setup: Option<String>,
    /// Code run once after all tests; sees `num_failures` and returns the exit status.
    pub suite_teardown: Option<String>,
    /// Emit globals for cross-mock call-order verification.
    pub enforce_strict_ordering: bool,
    /// Companion header to generate and include.
    pub header_file: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            defines: Vec::new(),
            plugins: BTreeSet::new(),
            framework: DEFAULT_FRAMEWORK.to_string(),
            test_prefix: DEFAULT_TEST_PREFIX.to_string(),
            setup_name: DEFAULT_SETUP_NAME.to_string(),
            teardown_name: DEFAULT_TEARDOWN_NAME.to_string(),
            main_name: MainName::default(),
            main_export_decl: String::new(),
            cmdline_args: false,
            use_param_tests: false,
            suite_setup: None,
            suite_teardown: None,
            enforce_strict_ordering: false,
            header_file: None,
        }
    }
}

impl GenerationOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a plugin is enabled.
    pub fn has_plugin(&self, plugin: PluginId) -> bool {
        self.plugins.contains(&plugin)
    }

    /// The subset of options the scanner needs.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            test_prefix: self.test_prefix.clone(),
            use_param_tests: self.use_param_tests,
            framework: self.framework.clone(),
        }
    }

    /// Companion header path, if one is configured and non-empty.
    pub fn header_file(&self) -> Option<&str> {
        self.header_file.as_deref().filter(|h| !h.is_empty())
    }

    pub fn with_plugin(mut self, plugin: PluginId) -> Self {
        self.plugins.insert(plugin);
        self
    }

    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.includes.push(include.into());
        self
    }

    pub fn with_define(mut self, define: impl Into<String>) -> Self {
        self.defines.push(define.into());
        self
    }

    pub fn with_test_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.test_prefix = prefix.into();
        self
    }

    pub fn with_setup_name(mut self, name: impl Into<String>) -> Self {
        self.setup_name = name.into();
        self
    }

    pub fn with_teardown_name(mut self, name: impl Into<String>) -> Self {
        self.teardown_name = name.into();
        self
    }

    pub fn with_main_name(mut self, name: MainName) -> Self {
        self.main_name = name;
        self
    }

    pub fn with_main_export_decl(mut self, decl: impl Into<String>) -> Self {
        self.main_export_decl = decl.into();
        self
    }

    pub fn with_cmdline_args(mut self, enabled: bool) -> Self {
        self.cmdline_args = enabled;
        self
    }

    pub fn with_param_tests(mut self, enabled: bool) -> Self {
        self.use_param_tests = enabled;
        self
    }

    pub fn with_suite_setup(mut self, code: impl Into<String>) -> Self {
        self.suite_setup = Some(code.into());
        self
    }

    pub fn with_suite_teardown(mut self, code: impl Into<String>) -> Self {
        self.suite_teardown = Some(code.into());
        self
    }

    pub fn with_strict_ordering(mut self, enabled: bool) -> Self {
        self.enforce_strict_ordering = enabled;
        self
    }

    pub fn with_header_file(mut self, path: impl Into<String>) -> Self {
        self.header_file = Some(path.into());
        self
    }

    pub fn with_framework(mut self, framework: impl Into<String>) -> Self {
        self.framework = framework.into();
        self
    }
}
