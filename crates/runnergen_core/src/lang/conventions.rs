//! Naming conventions and option defaults shared by the scanner, config loader and generator.

/// Default test-name prefix alternation.
pub const DEFAULT_TEST_PREFIX: &str = "test|spec|should";

/// Default per-test setup function.
pub const DEFAULT_SETUP_NAME: &str = "setUp";

/// Default per-test teardown function.
pub const DEFAULT_TEARDOWN_NAME: &str = "tearDown";

/// Default name of the generated entry point.
pub const DEFAULT_MAIN_NAME: &str = "main";

/// Config spelling that requests a per-file entry point name.
pub const AUTO_MAIN_NAME: &str = "auto";

/// Prefix given to auto-derived entry point names (`main_<stem>`).
pub const AUTO_MAIN_PREFIX: &str = "main_";

/// Case-insensitive basename prefix marking an include as a mock.
pub const MOCK_PREFIX: &str = "mock";

/// Suffix used to derive the runner path from the input path.
pub const RUNNER_SUFFIX: &str = "_Runner.c";

/// First line of every generated file.
pub const AUTOGENERATED_BANNER: &str = "/* AUTOGENERATED FILE. DO NOT EDIT. */";

/// Check whether an include basename follows the mock naming convention.
///
/// ## Parameters
/// - `basename`: the file name without directories (extension optional).
///
/// ## Returns
/// - (`bool`): `true` when the name starts with `mock`, ignoring ASCII case.
pub fn is_mock_basename(basename: &str) -> bool {
    basename
        .get(..MOCK_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(MOCK_PREFIX))
}

/// Derive the default runner path for an input file.
///
/// The first `.c` in the path is replaced by `_Runner.c`; paths without `.c` get the suffix appended.
pub fn default_runner_path(input: &str) -> String {
    if input.contains(".c") {
        input.replacen(".c", RUNNER_SUFFIX, 1)
    } else {
        format!("{input}{RUNNER_SUFFIX}")
    }
}
