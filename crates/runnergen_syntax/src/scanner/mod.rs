//! Source scanner.
//!
//! ## Modules
//!
//! - `test_cases` - test signature discovery and line-number recovery
//! - `includes` - `#include` discovery
//! - `mocks` - mock detection and include partitioning
//!
//! ## Design
//!
//! [`Scanner`] is the seam between lexing and generation. [`PatternScanner`] is the regex-based implementation; a
//! grammar-based scanner can replace it without touching the generator as long as it returns the same records.

mod includes;
mod mocks;
mod test_cases;

pub use includes::find_includes;
pub use mocks::{find_mocks, partition_includes};
pub use test_cases::find_tests;

use regex::Regex;
use runnergen_core::lang::conventions::DEFAULT_TEST_PREFIX;
use runnergen_core::lang::framework::DEFAULT_FRAMEWORK;

use crate::errors::ScanError;
use crate::records::ScanResult;

/// Options that change what the scanner records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Regex alternation a test name must start with.
    pub test_prefix: String,
    /// Record `TEST_CASE(...)` argument strings.
    pub use_param_tests: bool,
    /// Framework name; its includes are never reported.
    pub framework: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            test_prefix: DEFAULT_TEST_PREFIX.to_string(),
            use_param_tests: false,
            framework: DEFAULT_FRAMEWORK.to_string(),
        }
    }
}

/// Turns C source text into scan records.
pub trait Scanner {
    /// Scan one source file.
    fn scan(&self, source: &str) -> ScanResult;
}

/// Regex-based [`Scanner`].
#[derive(Debug, Clone)]
pub struct PatternScanner {
    signature: Regex,
    use_param_tests: bool,
    framework: String,
}

impl PatternScanner {
    /// Compile the test-signature pattern for the given options.
    ///
    /// ## Errors
    ///
    /// Returns [`ScanError`] when the test prefix is empty or is not a valid regex alternation.
    pub fn new(options: &ScanOptions) -> Result<Self, ScanError> {
        Ok(Self {
            signature: test_cases::signature_pattern(&options.test_prefix)?,
            use_param_tests: options.use_param_tests,
            framework: options.framework.clone(),
        })
    }
}

impl Scanner for PatternScanner {
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    fn scan(&self, source: &str) -> ScanResult {
        let tests = test_cases::scan_tests(&self.signature, self.use_param_tests, source);
        let includes = find_includes(source);
        let (testfile_includes, mocks) = partition_includes(&includes, &self.framework);

        tracing::debug!(
            tests = tests.len(),
            includes = testfile_includes.len(),
            mocks = mocks.len(),
            "scan complete"
        );

        ScanResult {
            tests,
            testfile_includes,
            mocks,
        }
    }
}
