//! Test signature discovery.
//!
//! Discovery runs in two passes:
//!
//! 1. The source is scrubbed and split into logical lines: a preprocessor directive is a line of its own, otherwise
//!    `;`, `{` and `}` end a line. Each logical line is matched against the signature pattern, so a signature broken
//!    across physical lines still matches. Names are de-duplicated keeping the first occurrence.
//! 2. Scrubbing moves text around, so line numbers are recovered against the original text: for each test, in
//!    order, the first physical line containing its name at or after the previous test's line.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::ScanOptions;
use crate::errors::ScanError;
use crate::records::TestCase;
use crate::strip::scrub_for_tests;

/// Logical line boundaries: a whole directive line, or one of `;`, `{`, `}`.
static LOGICAL_LINE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^\s*#.*$)|[;{}]").expect("INVARIANT: valid regex"));

/// One `TEST_CASE(...)` marker per line, capturing its argument text.
static TEST_CASE_ARGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\s*TEST_CASE\s*\((.*)\)\s*$").expect("INVARIANT: valid regex"));

/// A signature candidate before its line number is known.
struct Candidate {
    name: String,
    params: String,
    args: Option<Vec<String>>,
}

/// Build the test-signature pattern for a prefix alternation.
///
/// Captures: 1 = leading `TEST_CASE(...)` markers, 2 = function name, 3 = raw parameter text (up to the last `)` of
/// the logical line, newlines included).
pub(super) fn signature_pattern(prefix: &str) -> Result<Regex, ScanError> {
    if prefix.trim().is_empty() {
        return Err(ScanError::EmptyTestPrefix);
    }
    let pattern = format!(
        r"(?m)^((?:\s*TEST_CASE\s*\(.*?\)\s*)*)\s*void\s+((?:{prefix})\w*)\s*\(\s*((?s:.*))\s*\)"
    );
    Regex::new(&pattern).map_err(|source| ScanError::InvalidTestPrefix {
        prefix: prefix.to_string(),
        source,
    })
}

/// Find every test function in `source`.
///
/// ## Errors
///
/// Returns [`ScanError`] when the configured test prefix does not compile.
pub fn find_tests(source: &str, options: &ScanOptions) -> Result<Vec<TestCase>, ScanError> {
    let signature = signature_pattern(&options.test_prefix)?;
    Ok(scan_tests(&signature, options.use_param_tests, source))
}

pub(super) fn scan_tests(signature: &Regex, use_param_tests: bool, source: &str) -> Vec<TestCase> {
    let scrubbed = scrub_for_tests(source);
    let candidates = collect_candidates(signature, use_param_tests, &scrubbed);
    resolve_line_numbers(source, candidates)
}

/// Split scrubbed text into logical lines. Boundary characters are dropped; directive lines are kept whole.
fn logical_lines(scrubbed: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut last = 0;
    for caps in LOGICAL_LINE_BOUNDARY.captures_iter(scrubbed) {
        let Some(boundary) = caps.get(0) else { continue };
        lines.push(&scrubbed[last..boundary.start()]);
        if let Some(directive) = caps.get(1) {
            lines.push(directive.as_str());
        }
        last = boundary.end();
    }
    lines.push(&scrubbed[last..]);
    lines
}

fn collect_candidates(signature: &Regex, use_param_tests: bool, scrubbed: &str) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for line in logical_lines(scrubbed) {
        let Some(caps) = signature.captures(line) else {
            continue;
        };
        let markers = caps.get(1).map_or("", |m| m.as_str());
        let Some(name) = caps.get(2).map(|m| m.as_str().to_string()) else {
            continue;
        };
        if !seen.insert(name.clone()) {
            continue;
        }
        let params = caps.get(3).map_or("", |m| m.as_str()).trim().to_string();
        let args = (use_param_tests && !markers.is_empty()).then(|| {
            TEST_CASE_ARGS
                .captures_iter(markers)
                .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
                .collect()
        });
        candidates.push(Candidate { name, params, args });
    }

    candidates
}

/// Attach 1-based physical line numbers, scanning forward from the previous test's line.
///
/// Matching is by substring, so a name that is a prefix of an identifier on an earlier line can over-match.
fn resolve_line_numbers(source: &str, candidates: Vec<Candidate>) -> Vec<TestCase> {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut cursor = 0;

    candidates
        .into_iter()
        .map(|candidate| {
            let line_number = match lines[cursor..].iter().position(|l| l.contains(&candidate.name)) {
                Some(offset) => {
                    cursor += offset;
                    cursor + 1
                }
                None => lines
                    .iter()
                    .position(|l| l.contains(&candidate.name))
                    .map_or(0, |idx| idx + 1),
            };

            let call_signature = if candidate.params.is_empty() {
                "void".to_string()
            } else {
                candidate.params.clone()
            };

            TestCase {
                name: candidate.name,
                line_number,
                call_signature,
                parameter_list: candidate.params,
                parameterized_args: candidate.args,
            }
        })
        .collect()
}
