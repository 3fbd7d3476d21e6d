//! Build C identifiers and string literals from file names.
//!
//! Mock lifecycle functions, auto-named entry points and header guards are all symbols derived from paths. They go
//! through [`sanitize_c_identifier`] so the mapping is defined in one place.
//!
//! ## Character mapping
//!
//! | Input character                          | Output          |
//! |------------------------------------------|-----------------|
//! | `A`-`Z`, `a`-`z`, `0`-`9`, `_`           | kept            |
//! | `-` `/` `\` `.` `,` and any whitespace   | `_`             |
//! | anything else (`$`, `+`, `<`, non-ASCII) | dropped         |
//!
//! After mapping, a result that is empty or starts with a digit is prefixed with `_`.

/// Characters replaced by `_` instead of being dropped.
const SEPARATORS: &[char] = &['-', '/', '\\', '.', ','];

/// Turn arbitrary text into a legal C identifier.
///
/// ## Parameters
/// - `raw`: a file name, path or other text to derive a symbol from.
///
/// ## Returns
/// - (`String`): an identifier matching `[A-Za-z_][A-Za-z0-9_]*`.
///
/// ## Examples
/// ```rust
/// use runnergen_core::sanitize_c_identifier;
/// assert_eq!(sanitize_c_identifier("mockFoo"), "mockFoo");
/// assert_eq!(sanitize_c_identifier("mock-foo.bar"), "mock_foo_bar");
/// assert_eq!(sanitize_c_identifier("2fast"), "_2fast");
/// ```
pub fn sanitize_c_identifier(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 1);
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        } else if SEPARATORS.contains(&c) || c.is_whitespace() {
            out.push('_');
        }
    }
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Check whether text is already a legal C identifier.
pub fn is_c_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
    }
}

/// Build the include guard macro for a header file.
///
/// Only the basename takes part. Separators and whitespace become `_`, letters are upper-cased and the result is
/// always prefixed with `_`, so a name that already starts with `_` gets two. Characters that cannot appear in a C
/// identifier (`$`, `+`, non-ASCII) are dropped rather than carried into the macro name.
///
/// ## Examples
/// ```rust
/// use runnergen_core::header_guard;
/// assert_eq!(header_guard("build/test_runner.h"), "_TEST_RUNNER_H");
/// assert_eq!(header_guard("_private.h"), "__PRIVATE_H");
/// ```
pub fn header_guard(path: &str) -> String {
    let basename = path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path);
    let mut guard = String::with_capacity(basename.len() + 1);
    guard.push('_');
    for c in basename.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            guard.push(c.to_ascii_uppercase());
        } else if SEPARATORS.contains(&c) || c.is_whitespace() {
            guard.push('_');
        }
    }
    guard
}

/// Escape text for use inside a C string literal.
pub fn escape_c_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}
