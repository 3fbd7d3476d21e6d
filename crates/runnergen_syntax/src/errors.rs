//! Scanner errors.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while preparing a scanner.
///
/// Scanning itself never fails: text that does not match a pattern is simply not recorded.
#[derive(Debug, Error, Diagnostic)]
pub enum ScanError {
    #[error("test prefix `{prefix}` is not a valid pattern")]
    #[diagnostic(
        code(runnergen::scan::invalid_test_prefix),
        help("the prefix is an alternation such as `test|spec|should`")
    )]
    InvalidTestPrefix {
        prefix: String,
        #[source]
        source: regex::Error,
    },

    #[error("test prefix is empty")]
    #[diagnostic(
        code(runnergen::scan::empty_test_prefix),
        help("set `test_prefix` to at least one name prefix, for example `test`")
    )]
    EmptyTestPrefix,
}
