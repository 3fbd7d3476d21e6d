//! Comment and string stripping.
//!
//! Two strippers live here because the two scans need different things:
//!
//! - [`scrub_for_tests`] removes string contents as well as comments so comment markers inside strings cannot
//!   confuse signature matching. Preprocessor lines and `;`/`{`/`}` survive so the scanner can still split the
//!   text into logical lines.
//! - [`strip_comments_for_includes`] removes comments only, in an order that keeps a `//` that comments out the
//!   start of a block comment from swallowing real code.
//!
//! Both are best effort: an unterminated string or block comment simply does not match and is left in place.

use std::sync::LazyLock;

use regex::Regex;

/// A double-quoted string that stays on one line.
static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""[^"\n]*""#).expect("INVARIANT: valid regex"));

/// `//` through end of line.
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*").expect("INVARIANT: valid regex"));

/// `/* ... */`, non-greedy, may span lines.
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("INVARIANT: valid regex"));

/// A line comment whose body opens a block comment (`// foo /*` or `//* ...`).
static LINE_COMMENT_OPENING_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)//(?:.+/\*|\*(?:$|[^/])).*$").expect("INVARIANT: valid regex"));

/// Remove string literals, line comments and block comments, in that order.
///
/// ## Parameters
/// - `source`: raw C text.
///
/// ## Returns
/// - (`String`): text safe for signature matching. Line boundaries inside removed block comments are lost, so
///   offsets into this text do not map back to the original.
pub fn scrub_for_tests(source: &str) -> String {
    let without_strings = STRING_LITERAL.replace_all(source, "");
    let without_line_comments = LINE_COMMENT.replace_all(&without_strings, "");
    BLOCK_COMMENT.replace_all(&without_line_comments, "").into_owned()
}

/// Remove comments ahead of include matching.
///
/// Runs in three steps: line comments that open a block, then block comments, then the remaining line comments.
pub fn strip_comments_for_includes(source: &str) -> String {
    let step1 = LINE_COMMENT_OPENING_BLOCK.replace_all(source, "");
    let step2 = BLOCK_COMMENT.replace_all(&step1, "");
    LINE_COMMENT.replace_all(&step2, "").into_owned()
}
