#![forbid(unsafe_code)]
//! runnergen: C unit-test runner generator
//!
//! Scans a C test source for test functions, includes and mock headers, and emits a runner that declares and
//! invokes every test from a generated entry point. Mock lifecycle calls, the CException plugin, parameterized
//! tests, command-line filtering and a companion header are all driven by [`GenerationOptions`].
//!
//! ## Crate layout
//!
//! - [`runnergen_core`]: shared vocabulary (conventions, framework headers, identifier sanitizer)
//! - [`runnergen_syntax`]: comment stripping and source scanning
//! - [`config`]: options and YAML config loading
//! - [`backend`]: runner and companion header generation
//! - [`pipeline`]: one scan + generate run over in-memory text
//! - [`cli`]: argument parsing, file I/O and exit codes
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a generator bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod backend;
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod version;

pub use backend::{GeneratedHeader, GeneratedRunner, RunnerGenerator};
pub use config::{ConfigError, GenerationOptions, MainName};
pub use pipeline::{GenerateError, RunOutput, files_used, run};
pub use runnergen_syntax::{IncludeRef, MockRef, ScanResult, TestCase};
