//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::GenerationOptions;
use crate::pipeline;

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while scanning.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a test source file.
///
/// Bytes that are not valid UTF-8 are decoded as Latin-1, so every byte maps to one character and line numbers stay
/// intact.
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    let bytes = fs::read(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))?;
    Ok(decode_source(bytes))
}

/// UTF-8 if possible, Latin-1 otherwise.
pub fn decode_source(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!("input is not valid UTF-8, decoding as Latin-1");
            err.into_bytes().iter().map(|&b| char::from(b)).collect()
        }
    }
}

/// Write `contents` to `path` through a sibling temporary file, so readers never see a partial file.
pub fn write_atomic(path: &Path, contents: &str) -> CliResult<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::failure(format!("Output path '{}' has no file name", path.display())))?;
    let tmp_path: PathBuf = path.with_file_name(format!(".{file_name}.{}.tmp", std::process::id()));

    let write_result = fs::File::create(&tmp_path).and_then(|mut file| {
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = write_result.and_then(|()| fs::rename(&tmp_path, path)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(CliError::failure(format!("Error writing file '{}': {}", path.display(), e)));
    }
    Ok(())
}

/// Generate the runner for `input` and write it (and the companion header, if configured).
///
/// With `list_files`, prints the files the run used to stdout, one per line.
#[tracing::instrument(skip(options))]
pub fn generate_runner(
    input: &str,
    output: &str,
    options: &GenerationOptions,
    list_files: bool,
) -> CliResult<ExitCode> {
    let source = read_source(input)?;
    let result = pipeline::run(input, output, &source, options).map_err(CliError::diagnostic)?;

    write_atomic(Path::new(output), &result.runner.source)?;
    if let Some(header) = &result.runner.header {
        write_atomic(Path::new(&header.path), &header.text)?;
    }

    tracing::debug!(tests = result.scan.tests.len(), mocks = result.scan.mocks.len(), output, "runner written");

    if list_files {
        for file in &result.files_used {
            println!("{file}");
        }
    }
    Ok(ExitCode::SUCCESS)
}
