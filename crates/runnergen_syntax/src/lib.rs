//! Source scanning frontend for runnergen.
//!
//! Turns raw, possibly comment-laden C test source into structured records:
//!
//! ```text
//! source ── strip ──▶ scrubbed text ── scanner ──▶ ScanResult { tests, testfile_includes, mocks }
//! ```
//!
//! The scanner is a lexical approximation built on regular expressions. It sits behind the [`Scanner`] trait so the
//! generator only ever sees [`ScanResult`] records.

pub mod errors;
pub mod records;
pub mod scanner;
pub mod strip;

pub use errors::ScanError;
pub use records::{IncludeKind, IncludeRef, IncludeSet, MockRef, ScanResult, TestCase};
pub use scanner::{PatternScanner, ScanOptions, Scanner, find_includes, find_mocks, find_tests};
