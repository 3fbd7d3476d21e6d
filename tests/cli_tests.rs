//! End-to-end tests for the runnergen binary
//!
//! Each test works in its own temporary directory and runs the built binary
//! with that directory as the working directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const SOURCE: &str = "#include \"unity.h\"\n#include \"calc.h\"\n#include \"mockUart.h\"\n\nvoid test_add(void)\n{\n}\n";

fn runnergen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_runnergen"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("failed to run runnergen")
}

#[test]
fn test_default_output_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("TestCalc.c"), SOURCE).unwrap();

    let output = runnergen(dir.path(), &["TestCalc.c"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let runner = fs::read_to_string(dir.path().join("TestCalc_Runner.c")).unwrap();
    assert!(runner.starts_with("/* AUTOGENERATED FILE. DO NOT EDIT. */"));
    assert!(runner.contains("RUN_TEST(test_add, 5);"));
    assert!(runner.contains("  mockUart_Init();"));
}

#[test]
fn test_list_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("TestCalc.c"), SOURCE).unwrap();

    let output = runnergen(dir.path(), &["--list-files", "TestCalc.c", "Runner.c", "extra.h"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let files: Vec<&str> = stdout.lines().collect();
    assert_eq!(files, vec!["TestCalc.c", "Runner.c", "calc.c", "extra.h"]);
}

#[test]
fn test_config_file_and_flag_precedence() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("TestCalc.c"), SOURCE).unwrap();
    fs::write(
        dir.path().join("project.yml"),
        ":unity:\n  :setup_name: cfg_setup\n  :teardown_name: cfg_teardown\n  :plugins:\n    - :cexception\n",
    )
    .unwrap();

    let output = runnergen(dir.path(), &["project.yml", "--teardown_name=cli_teardown", "TestCalc.c", "Runner.c"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let runner = fs::read_to_string(dir.path().join("Runner.c")).unwrap();
    assert!(runner.contains("extern void cfg_setup(void);"));
    assert!(runner.contains("extern void cli_teardown(void);"));
    assert!(runner.contains("#include \"CException.h\""));
}

#[test]
fn test_header_file_flag_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("TestCalc.c"), SOURCE).unwrap();

    let output = runnergen(dir.path(), &["--header-file=TestCalc_Runner.h", "TestCalc.c"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let header = fs::read_to_string(dir.path().join("TestCalc_Runner.h")).unwrap();
    assert!(header.contains("#ifndef _TESTCALC_RUNNER_H"));
    assert!(header.contains("void test_add(void);"));
}

#[test]
fn test_latin1_input_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let mut bytes = b"/* caf".to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(b" */\nvoid test_cafe(void) {}\n");
    fs::write(dir.path().join("TestCafe.c"), bytes).unwrap();

    let output = runnergen(dir.path(), &["TestCafe.c"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let runner = fs::read_to_string(dir.path().join("TestCafe_Runner.c")).unwrap();
    assert!(runner.contains("RUN_TEST(test_cafe, 2);"));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = runnergen(dir.path(), &["Nope.c"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Cannot access file"));
    assert!(!dir.path().join("Nope_Runner.c").exists());
}

#[test]
fn test_config_without_section_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("TestCalc.c"), SOURCE).unwrap();
    fs::write(dir.path().join("bad.yml"), "other:\n  key: 1\n").unwrap();

    let output = runnergen(dir.path(), &["bad.yml", "TestCalc.c"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("TestCalc_Runner.c").exists());
}

#[test]
fn test_too_many_paths_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = runnergen(dir.path(), &["a.c", "b.c", "c.c"]);
    assert_eq!(output.status.code(), Some(2));
}
