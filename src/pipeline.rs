//! One generator run: scan a source buffer, generate the runner, report the files involved.
//!
//! This is the pure part of a run. Reading the input and writing outputs belongs to the CLI, so the pipeline can be
//! driven from tests with in-memory text.

use miette::Diagnostic;
use runnergen_syntax::{IncludeKind, PatternScanner, ScanError, ScanResult, Scanner};
use thiserror::Error;

use crate::backend::{GeneratedRunner, RunnerGenerator};
use crate::config::GenerationOptions;

/// Errors raised while producing a runner.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Scan(#[from] ScanError),
}

/// The result of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub scan: ScanResult,
    pub runner: GeneratedRunner,
    /// Input, output, companion header, test-file sources and configured includes, each once.
    pub files_used: Vec<String>,
}

/// Scan `source` and generate its runner.
///
/// ## Parameters
/// - `input_name`: the input path as the user gave it; it appears in the runner's `UnityBegin` call.
/// - `output_name`: the runner path, reported in `files_used`.
/// - `source`: the decoded input text.
/// - `options`: resolved options.
///
/// ## Errors
///
/// Returns [`GenerateError::Scan`] when the test prefix does not compile.
#[tracing::instrument(skip_all, fields(input = input_name, output = output_name, source_len = source.len()))]
pub fn run(
    input_name: &str,
    output_name: &str,
    source: &str,
    options: &GenerationOptions,
) -> Result<RunOutput, GenerateError> {
    let scanner = PatternScanner::new(&options.scan_options())?;
    let scan = scanner.scan(source);
    if scan.tests.is_empty() {
        tracing::warn!(input = input_name, "no tests found; the runner will report zero tests");
    }

    let runner = RunnerGenerator::new(options).generate(input_name, &scan);
    let files_used = files_used(input_name, output_name, &scan, options);
    tracing::info!(files = ?files_used, "runner generated");

    Ok(RunOutput {
        scan,
        runner,
        files_used,
    })
}

/// Paths a build system should treat as inputs or outputs of this run, de-duplicated in first-seen order.
///
/// Local test-file includes are reported as their `.c` implementation file.
pub fn files_used(input_name: &str, output_name: &str, scan: &ScanResult, options: &GenerationOptions) -> Vec<String> {
    let header = options.header_file().map(str::to_string);
    let sources = scan
        .testfile_includes
        .iter()
        .filter(|inc| inc.kind == IncludeKind::Local)
        .map(|inc| format!("{}.c", inc.path));

    let mut files: Vec<String> = Vec::new();
    let candidates = [input_name.to_string(), output_name.to_string()]
        .into_iter()
        .chain(header)
        .chain(sources)
        .chain(options.includes.iter().cloned());
    for file in candidates {
        if !files.contains(&file) {
            files.push(file);
        }
    }
    files
}
