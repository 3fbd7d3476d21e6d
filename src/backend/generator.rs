//! Runner generation entry point.

use runnergen_syntax::ScanResult;

use super::header_file::companion_header;
use super::sections::{self, RunnerContext};
use crate::config::GenerationOptions;

/// A generated companion header and the path it belongs at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHeader {
    pub path: String,
    pub text: String,
}

/// Generated text for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRunner {
    /// The runner `.c` file.
    pub source: String,
    /// Present when a companion header is configured.
    pub header: Option<GeneratedHeader>,
}

/// Turns scan records into runner text. Generation is pure: no I/O, same input gives the same bytes.
#[derive(Debug, Clone, Copy)]
pub struct RunnerGenerator<'a> {
    options: &'a GenerationOptions,
}

impl<'a> RunnerGenerator<'a> {
    pub fn new(options: &'a GenerationOptions) -> Self {
        Self { options }
    }

    /// Generate the runner (and companion header, if configured) for `input_name`.
    #[tracing::instrument(skip_all, fields(input = input_name, tests = scan.tests.len(), mocks = scan.mocks.len()))]
    pub fn generate(&self, input_name: &str, scan: &ScanResult) -> GeneratedRunner {
        let ctx = RunnerContext::new(self.options, scan, input_name);

        let source = [
            sections::header(&ctx),
            sections::externs(&ctx),
            sections::mock_management(&ctx),
            sections::suite_setup_teardown(&ctx),
            sections::reset(&ctx),
            sections::main_block(&ctx),
        ]
        .join("\n");

        let header = self.options.header_file().map(|path| GeneratedHeader {
            path: path.to_string(),
            text: companion_header(&ctx, path),
        });

        tracing::debug!(bytes = source.len(), header = header.is_some(), "runner generated");
        GeneratedRunner { source, header }
    }
}
