//! Header names owned by the test framework and the mocking layer.

/// Default test framework; its header is `<framework>.h`.
pub const DEFAULT_FRAMEWORK: &str = "unity";

/// Mocking layer name; its header is included whenever mocks are in use.
pub const MOCK_LAYER: &str = "cmock";

/// Header of the mocking support layer.
pub const MOCK_SUPPORT_HEADER: &str = "cmock.h";

/// Header of the exception-handling plugin.
pub const CEXCEPTION_HEADER: &str = "CException.h";

/// System headers every runner needs, in emission order.
pub const SUPPORT_HEADERS: &[&str] = &["<setjmp.h>", "<stdio.h>"];

/// Names that mark an include as belonging to the framework itself.
const SELF_INCLUDE_MARKERS: &[&str] = &[DEFAULT_FRAMEWORK, MOCK_LAYER];

/// Check whether an include path refers to the framework or the mocking layer.
///
/// ## Parameters
/// - `path`: the include as recorded by the scanner (`"foo"` or `"<foo.h>"`).
/// - `framework`: the configured framework name.
///
/// ## Returns
/// - (`bool`): `true` when the path mentions the framework, `unity` or `cmock` anywhere.
///
/// ## Notes
/// - Matching is a substring test, so `unity_fixture` and `cmock_internals` are self-includes too.
pub fn is_framework_include(path: &str, framework: &str) -> bool {
    SELF_INCLUDE_MARKERS.iter().any(|marker| path.contains(marker)) || (!framework.is_empty() && path.contains(framework))
}

/// Header file name for a framework.
pub fn framework_header(framework: &str) -> String {
    format!("{framework}.h")
}
