//! Runner sections.
//!
//! Each builder is a pure function of a [`RunnerContext`] and returns its section as text without a trailing
//! newline. A section with nothing to say returns an empty string; the generator still joins it, which keeps the
//! blank-line rhythm of the runner stable whether or not optional sections are present.

use runnergen_core::escape_c_string;
use runnergen_core::lang::conventions::AUTOGENERATED_BANNER;
use runnergen_core::lang::framework::{CEXCEPTION_HEADER, MOCK_SUPPORT_HEADER, SUPPORT_HEADERS, framework_header};
use runnergen_core::lang::plugins::PluginId;
use runnergen_syntax::{IncludeRef, ScanResult, TestCase};

use super::c_emitter::CEmitter;
use crate::config::GenerationOptions;

/// Everything a section builder may branch on.
#[derive(Debug, Clone, Copy)]
pub struct RunnerContext<'a> {
    pub options: &'a GenerationOptions,
    pub scan: &'a ScanResult,
    /// Input path as given by the caller.
    pub input_name: &'a str,
}

impl<'a> RunnerContext<'a> {
    pub fn new(options: &'a GenerationOptions, scan: &'a ScanResult, input_name: &'a str) -> Self {
        Self {
            options,
            scan,
            input_name,
        }
    }

    fn has_mocks(&self) -> bool {
        self.scan.has_mocks()
    }

    fn cexception(&self) -> bool {
        self.options.has_plugin(PluginId::CException)
    }

    fn param_tests(&self) -> bool {
        self.options.use_param_tests
    }

    /// Resolved entry point name.
    pub fn main_name(&self) -> String {
        self.options.main_name.resolve(self.input_name)
    }
}

/// Configured includes, de-duplicated in order, as `#include` targets.
pub(super) fn configured_include_targets(options: &GenerationOptions) -> Vec<String> {
    let mut seen = Vec::new();
    for include in &options.includes {
        let target = IncludeRef::from_config(include).directive_target();
        if !seen.contains(&target) {
            seen.push(target);
        }
    }
    seen
}

/// The `RUN_TEST` macro every invocation in `main` expands through.
pub fn runtest_macro(ctx: &RunnerContext<'_>) -> String {
    let options = ctx.options;
    let params = ctx.param_tests();
    let mut e = CEmitter::new();

    e.banner("Test Runner Used To Run Each Test Below");
    if params {
        e.line("#define RUN_TEST_NO_ARGS");
    }
    let va_decl = if params { ", ..." } else { "" };
    e.continued(&format!("#define RUN_TEST(TestFunc, TestLineNum{va_decl})"));
    e.continued("{");
    e.indent();
    if params {
        e.continued("Unity.CurrentTestName = #TestFunc \"(\" #__VA_ARGS__ \")\";");
    } else {
        e.continued("Unity.CurrentTestName = #TestFunc;");
    }
    e.continued("Unity.CurrentTestLineNumber = TestLineNum;");
    if options.cmdline_args {
        e.continued("if (UnityTestMatches()) {");
        e.indent();
    }
    e.continued("Unity.NumberOfTests++;");
    if ctx.has_mocks() {
        e.continued("CMock_Init();");
        e.continued("UNITY_CLR_DETAILS();");
    }
    let call_args = if params { "__VA_ARGS__" } else { "" };
    e.macro_block("if (TEST_PROTECT())", |e| {
        if ctx.cexception() {
            e.continued("CEXCEPTION_T e;");
            e.continued("Try {");
            e.indent();
        }
        e.continued(&format!("{}();", options.setup_name));
        e.continued(&format!("TestFunc({call_args});"));
        if ctx.cexception() {
            e.dedent();
            e.continued(
                "} Catch(e) { TEST_ASSERT_EQUAL_HEX32_MESSAGE(CEXCEPTION_NONE, e, \"Unhandled Exception!\"); }",
            );
        }
    });
    e.macro_block("if (TEST_PROTECT() && !TEST_IS_IGNORED)", |e| {
        e.continued(&format!("{}();", options.teardown_name));
        if ctx.has_mocks() {
            e.continued("CMock_Verify();");
        }
    });
    if ctx.has_mocks() {
        e.continued("CMock_Destroy();");
    }
    e.continued("UnityConcludeTest();");
    if options.cmdline_args {
        e.dedent();
        e.continued("}");
    }
    e.dedent();
    e.line("}");
    e.finish()
}

/// Banner, `RUN_TEST` macro and the include block.
pub fn header(ctx: &RunnerContext<'_>) -> String {
    let options = ctx.options;
    let mut e = CEmitter::new();

    e.line(AUTOGENERATED_BANNER);
    e.raw(&runtest_macro(ctx));
    e.banner("Automagically Detected Files To Include");
    e.include(&format!("\"{}\"", framework_header(&options.framework)));
    if ctx.has_mocks() {
        e.include(&format!("\"{MOCK_SUPPORT_HEADER}\""));
    }
    for header in SUPPORT_HEADERS {
        e.include(header);
    }
    if ctx.cexception() {
        e.include(&format!("\"{CEXCEPTION_HEADER}\""));
    }
    for define in &options.defines {
        e.line(&format!("#define {define}"));
    }
    match options.header_file() {
        Some(path) => {
            let basename = path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path);
            e.include(&format!("\"{basename}\""));
        }
        None => {
            for target in configured_include_targets(options) {
                e.include(&target);
            }
            for include in &ctx.scan.testfile_includes {
                e.include(&include.directive_target());
            }
        }
    }
    for mock in &ctx.scan.mocks {
        e.include(&mock.include().directive_target());
    }
    if options.enforce_strict_ordering {
        e.blank_line();
        e.line("int GlobalExpectCount;");
        e.line("int GlobalVerifyOrder;");
        e.line("char* GlobalOrderError;");
    }
    e.finish()
}

/// `extern` declarations for setup, teardown and every test.
pub fn externs(ctx: &RunnerContext<'_>) -> String {
    let mut e = CEmitter::new();
    e.banner("External Functions This Runner Calls");
    e.line(&format!("extern void {}(void);", ctx.options.setup_name));
    e.line(&format!("extern void {}(void);", ctx.options.teardown_name));
    for test in &ctx.scan.tests {
        e.line(&format!("extern void {}({});", test.name, test.call_signature));
    }
    e.finish()
}

/// `CMock_Init`, `CMock_Verify` and `CMock_Destroy`. Empty when no mocks are used.
pub fn mock_management(ctx: &RunnerContext<'_>) -> String {
    if !ctx.has_mocks() {
        return String::new();
    }
    let symbols: Vec<String> = ctx.scan.mocks.iter().map(|m| m.symbol()).collect();
    let mut e = CEmitter::new();

    e.banner("Mock Management");
    e.block("static void CMock_Init(void)", |e| {
        if ctx.options.enforce_strict_ordering {
            e.line("GlobalExpectCount = 0;");
            e.line("GlobalVerifyOrder = 0;");
            e.line("GlobalOrderError = NULL;");
        }
        for symbol in &symbols {
            e.line(&format!("{symbol}_Init();"));
        }
    });
    for (function, suffix) in [("CMock_Verify", "Verify"), ("CMock_Destroy", "Destroy")] {
        e.blank_line();
        e.block(&format!("static void {function}(void)"), |e| {
            for symbol in &symbols {
                e.line(&format!("{symbol}_{suffix}();"));
            }
        });
    }
    e.blank_line();
    e.finish()
}

/// Suite-level setup and teardown wrappers around the configured snippets.
pub fn suite_setup_teardown(ctx: &RunnerContext<'_>) -> String {
    let mut e = CEmitter::new();
    if let Some(code) = &ctx.options.suite_setup {
        e.banner("Suite Setup");
        e.line("static void suite_setup(void)");
        e.line("{");
        e.raw(code.trim_end_matches('\n'));
        e.line("}");
    }
    if let Some(code) = &ctx.options.suite_teardown {
        e.banner("Suite Teardown");
        e.line("static int suite_teardown(int num_failures)");
        e.line("{");
        e.raw(code.trim_end_matches('\n'));
        e.line("}");
    }
    if !e.is_empty() {
        e.blank_line();
    }
    e.finish()
}

/// `resetTest`, which tears the current test down and sets it up again.
pub fn reset(ctx: &RunnerContext<'_>) -> String {
    let options = ctx.options;
    let mut e = CEmitter::new();
    e.line("/*=======Test Reset Option=====*/");
    e.line("void resetTest(void);");
    e.block("void resetTest(void)", |e| {
        if ctx.has_mocks() {
            e.line("CMock_Verify();");
            e.line("CMock_Destroy();");
        }
        e.line(&format!("{}();", options.teardown_name));
        if ctx.has_mocks() {
            e.line("CMock_Init();");
        }
        e.line(&format!("{}();", options.setup_name));
    });
    e.finish()
}

/// One `(name, args)` pair per invocation; `args` is `None` without parameterized tests.
fn invocations<'t>(tests: &'t [TestCase], params: bool) -> Vec<(&'t TestCase, Option<&'t str>)> {
    let mut out = Vec::new();
    for test in tests {
        match (params, test.argument_sets()) {
            (false, _) => out.push((test, None)),
            (true, None) => out.push((test, Some("RUN_TEST_NO_ARGS"))),
            (true, Some(sets)) => out.extend(sets.iter().map(|args| (test, Some(args.as_str())))),
        }
    }
    out
}

/// The entry point: optional command-line handling, then one `RUN_TEST` per invocation.
pub fn main_block(ctx: &RunnerContext<'_>) -> String {
    let options = ctx.options;
    let main_name = ctx.main_name();
    let runs = invocations(&ctx.scan.tests, ctx.param_tests());
    let signature = if options.cmdline_args {
        "int argc, char** argv"
    } else {
        "void"
    };
    let mut e = CEmitter::new();

    e.blank_line();
    e.banner("MAIN");
    let exported = format!("{} int {main_name}({signature})", options.main_export_decl);
    if main_name != "main" {
        e.line(&format!("{};", exported.trim_start()));
    }
    // The command-line entry point is exported too; the plain one is not.
    let definition = if options.cmdline_args {
        exported.trim_start().to_string()
    } else {
        format!("int {main_name}({signature})")
    };
    e.block(&definition, |e| {
        if options.cmdline_args {
            let module = ctx.input_name.strip_suffix(".c").unwrap_or(ctx.input_name);
            e.line("int parse_status = UnityParseOptions(argc, argv);");
            e.block("if (parse_status != 0)", |e| {
                e.block("if (parse_status < 0)", |e| {
                    e.line(&format!("UnityPrint(\"{}.\");", escape_c_string(module)));
                    e.line("UNITY_PRINT_EOL();");
                    for (test, args) in &runs {
                        let label = match args {
                            Some(args) => format!("  {}({args})", test.name),
                            None => format!("  {}", test.name),
                        };
                        e.line(&format!("UnityPrint(\"{}\");", escape_c_string(&label)));
                        e.line("UNITY_PRINT_EOL();");
                    }
                    e.line("return 0;");
                });
                e.line("return parse_status;");
            });
        }
        if options.suite_setup.is_some() {
            e.line("suite_setup();");
        }
        e.line(&format!("UnityBegin(\"{}\");", escape_c_string(ctx.input_name)));
        for (test, args) in &runs {
            match args {
                Some(args) => e.line(&format!("RUN_TEST({}, {}, {args});", test.name, test.line_number)),
                None => e.line(&format!("RUN_TEST({}, {});", test.name, test.line_number)),
            }
        }
        e.blank_line();
        if ctx.has_mocks() {
            e.line("CMock_Guts_MemFreeFinal();");
        }
        let teardown = if options.suite_teardown.is_some() {
            "suite_teardown"
        } else {
            ""
        };
        e.line(&format!("return {teardown}(UnityEnd());"));
    });
    e.blank_line();
    e.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use runnergen_syntax::MockRef;

    fn test_case(name: &str, line: usize, args: Option<Vec<&str>>) -> TestCase {
        TestCase {
            name: name.to_string(),
            line_number: line,
            call_signature: "void".to_string(),
            parameter_list: String::new(),
            parameterized_args: args.map(|a| a.into_iter().map(str::to_string).collect()),
        }
    }

    fn scan_with_mock() -> ScanResult {
        ScanResult {
            tests: vec![test_case("testAdd", 5, None)],
            testfile_includes: vec![],
            mocks: vec![MockRef(IncludeRef::local("mockFoo"))],
        }
    }

    fn plain_scan() -> ScanResult {
        ScanResult {
            tests: vec![test_case("test_a", 3, None), test_case("test_b", 9, None)],
            testfile_includes: vec![IncludeRef::local("calc"), IncludeRef::system("<stdint.h>")],
            mocks: vec![],
        }
    }

    // ========================================
    // RUN_TEST macro
    // ========================================

    #[test]
    fn test_runtest_macro_minimal() {
        let options = GenerationOptions::default();
        let scan = plain_scan();
        let text = runtest_macro(&RunnerContext::new(&options, &scan, "t.c"));
        let expected = [
            "",
            "/*=======Test Runner Used To Run Each Test Below=====*/",
            "#define RUN_TEST(TestFunc, TestLineNum) \\",
            "{ \\",
            "  Unity.CurrentTestName = #TestFunc; \\",
            "  Unity.CurrentTestLineNumber = TestLineNum; \\",
            "  Unity.NumberOfTests++; \\",
            "  if (TEST_PROTECT()) \\",
            "  { \\",
            "    setUp(); \\",
            "    TestFunc(); \\",
            "  } \\",
            "  if (TEST_PROTECT() && !TEST_IS_IGNORED) \\",
            "  { \\",
            "    tearDown(); \\",
            "  } \\",
            "  UnityConcludeTest(); \\",
            "}",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_runtest_macro_with_mocks_and_cexception() {
        let options = GenerationOptions::default().with_plugin(PluginId::CException);
        let scan = scan_with_mock();
        let text = runtest_macro(&RunnerContext::new(&options, &scan, "t.c"));
        assert!(text.contains("  CMock_Init(); \\\n  UNITY_CLR_DETAILS(); \\"));
        assert!(text.contains("    CEXCEPTION_T e; \\\n    Try { \\\n      setUp(); \\\n      TestFunc(); \\\n    } Catch(e)"));
        assert!(text.contains("    tearDown(); \\\n    CMock_Verify(); \\"));
        assert!(text.contains("  CMock_Destroy(); \\\n  UnityConcludeTest(); \\"));
    }

    #[test]
    fn test_runtest_macro_params_and_cmdline() {
        let options = GenerationOptions::default().with_param_tests(true).with_cmdline_args(true);
        let scan = plain_scan();
        let text = runtest_macro(&RunnerContext::new(&options, &scan, "t.c"));
        assert!(text.contains("#define RUN_TEST_NO_ARGS\n#define RUN_TEST(TestFunc, TestLineNum, ...) \\"));
        assert!(text.contains("Unity.CurrentTestName = #TestFunc \"(\" #__VA_ARGS__ \")\"; \\"));
        assert!(text.contains("  if (UnityTestMatches()) { \\\n    Unity.NumberOfTests++; \\"));
        assert!(text.contains("      TestFunc(__VA_ARGS__); \\"));
        assert!(text.ends_with("    UnityConcludeTest(); \\\n  } \\\n}"));
    }

    // ========================================
    // Header
    // ========================================

    #[test]
    fn test_header_include_order() {
        let options = GenerationOptions::default()
            .with_include("extra.h")
            .with_include("<string.h>")
            .with_include("extra.h")
            .with_define("UNITY_SUPPORT_64");
        let scan = plain_scan();
        let text = header(&RunnerContext::new(&options, &scan, "t.c"));
        let tail = text
            .split("/*=======Automagically Detected Files To Include=====*/\n")
            .nth(1)
            .unwrap_or_default();
        assert_eq!(
            tail,
            [
                "#include \"unity.h\"",
                "#include <setjmp.h>",
                "#include <stdio.h>",
                "#define UNITY_SUPPORT_64",
                "#include \"extra.h\"",
                "#include <string.h>",
                "#include \"calc.h\"",
                "#include <stdint.h>",
            ]
            .join("\n")
        );
        assert!(text.starts_with("/* AUTOGENERATED FILE. DO NOT EDIT. */\n\n/*=======Test Runner"));
    }

    #[test]
    fn test_header_file_mode_replaces_includes() {
        let options = GenerationOptions::default()
            .with_include("extra.h")
            .with_header_file("build/runner.h");
        let scan = scan_with_mock();
        let text = header(&RunnerContext::new(&options, &scan, "t.c"));
        assert!(text.contains("#include \"runner.h\"\n#include \"mockFoo.h\""));
        assert!(!text.contains("extra.h"));
        assert!(text.contains("#include \"cmock.h\""));
    }

    #[test]
    fn test_header_strict_ordering_globals() {
        let options = GenerationOptions::default().with_strict_ordering(true);
        let scan = plain_scan();
        let text = header(&RunnerContext::new(&options, &scan, "t.c"));
        assert!(text.ends_with("\n\nint GlobalExpectCount;\nint GlobalVerifyOrder;\nchar* GlobalOrderError;"));
    }

    #[test]
    fn test_header_cexception_include() {
        let options = GenerationOptions::default().with_plugin(PluginId::CException);
        let scan = plain_scan();
        let text = header(&RunnerContext::new(&options, &scan, "t.c"));
        assert!(text.contains("#include <stdio.h>\n#include \"CException.h\""));
    }

    // ========================================
    // Externs, mocks, suite, reset
    // ========================================

    #[test]
    fn test_externs_use_call_signature() {
        let options = GenerationOptions::default().with_setup_name("init");
        let mut scan = plain_scan();
        scan.tests[1].call_signature = "int a, int b".to_string();
        let text = externs(&RunnerContext::new(&options, &scan, "t.c"));
        assert_eq!(
            text,
            "\n/*=======External Functions This Runner Calls=====*/\nextern void init(void);\nextern void tearDown(void);\nextern void test_a(void);\nextern void test_b(int a, int b);"
        );
    }

    #[test]
    fn test_mock_management_empty_without_mocks() {
        let options = GenerationOptions::default();
        let scan = plain_scan();
        assert_eq!(mock_management(&RunnerContext::new(&options, &scan, "t.c")), "");
    }

    #[test]
    fn test_mock_management_uses_sanitized_symbols() {
        let options = GenerationOptions::default();
        let mut scan = scan_with_mock();
        scan.mocks.push(MockRef(IncludeRef::local("drivers/mock-uart")));
        let text = mock_management(&RunnerContext::new(&options, &scan, "t.c"));
        let expected = [
            "",
            "/*=======Mock Management=====*/",
            "static void CMock_Init(void)",
            "{",
            "  mockFoo_Init();",
            "  mock_uart_Init();",
            "}",
            "",
            "static void CMock_Verify(void)",
            "{",
            "  mockFoo_Verify();",
            "  mock_uart_Verify();",
            "}",
            "",
            "static void CMock_Destroy(void)",
            "{",
            "  mockFoo_Destroy();",
            "  mock_uart_Destroy();",
            "}",
            "",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_mock_management_strict_ordering_resets_globals() {
        let options = GenerationOptions::default().with_strict_ordering(true);
        let scan = scan_with_mock();
        let text = mock_management(&RunnerContext::new(&options, &scan, "t.c"));
        assert!(text.contains("{\n  GlobalExpectCount = 0;\n  GlobalVerifyOrder = 0;\n  GlobalOrderError = NULL;\n  mockFoo_Init();"));
    }

    #[test]
    fn test_suite_sections() {
        let options = GenerationOptions::default()
            .with_suite_setup("  init_hw();\n")
            .with_suite_teardown("  return num_failures;");
        let scan = plain_scan();
        let text = suite_setup_teardown(&RunnerContext::new(&options, &scan, "t.c"));
        assert_eq!(
            text,
            "\n/*=======Suite Setup=====*/\nstatic void suite_setup(void)\n{\n  init_hw();\n}\n\n/*=======Suite Teardown=====*/\nstatic int suite_teardown(int num_failures)\n{\n  return num_failures;\n}\n"
        );
        let none = GenerationOptions::default();
        assert_eq!(suite_setup_teardown(&RunnerContext::new(&none, &scan, "t.c")), "");
    }

    #[test]
    fn test_reset_with_mocks() {
        let options = GenerationOptions::default();
        let scan = scan_with_mock();
        let text = reset(&RunnerContext::new(&options, &scan, "t.c"));
        assert_eq!(
            text,
            "/*=======Test Reset Option=====*/\nvoid resetTest(void);\nvoid resetTest(void)\n{\n  CMock_Verify();\n  CMock_Destroy();\n  tearDown();\n  CMock_Init();\n  setUp();\n}"
        );
    }

    // ========================================
    // Main
    // ========================================

    #[test]
    fn test_main_minimal() {
        let options = GenerationOptions::default();
        let scan = plain_scan();
        let text = main_block(&RunnerContext::new(&options, &scan, "test/TestCalc.c"));
        let expected = [
            "",
            "",
            "/*=======MAIN=====*/",
            "int main(void)",
            "{",
            "  UnityBegin(\"test/TestCalc.c\");",
            "  RUN_TEST(test_a, 3);",
            "  RUN_TEST(test_b, 9);",
            "",
            "  return (UnityEnd());",
            "}",
            "",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_main_param_expansion() {
        let options = GenerationOptions::default().with_param_tests(true);
        let scan = ScanResult {
            tests: vec![test_case("test_sum", 4, Some(vec!["1,2", "3,4"])), test_case("test_plain", 8, None)],
            ..ScanResult::default()
        };
        let text = main_block(&RunnerContext::new(&options, &scan, "t.c"));
        assert!(text.contains(
            "  RUN_TEST(test_sum, 4, 1,2);\n  RUN_TEST(test_sum, 4, 3,4);\n  RUN_TEST(test_plain, 8, RUN_TEST_NO_ARGS);"
        ));
    }

    #[test]
    fn test_main_auto_name_with_export_prototype() {
        let options = GenerationOptions::default()
            .with_main_name(crate::config::MainName::Auto)
            .with_main_export_decl("EXPORT");
        let scan = plain_scan();
        let text = main_block(&RunnerContext::new(&options, &scan, "dir/test_io.c"));
        assert!(text.contains("EXPORT int main_test_io(void);\nint main_test_io(void)\n{"));
    }

    #[test]
    fn test_main_cmdline_definition_carries_export_decl() {
        let options = GenerationOptions::default()
            .with_cmdline_args(true)
            .with_main_name(crate::config::MainName::Literal("run_all".to_string()))
            .with_main_export_decl("EXPORT");
        let scan = plain_scan();
        let text = main_block(&RunnerContext::new(&options, &scan, "t.c"));
        assert!(text.contains(
            "EXPORT int run_all(int argc, char** argv);\nEXPORT int run_all(int argc, char** argv)\n{"
        ));
    }

    #[test]
    fn test_main_cmdline_export_decl_on_plain_main() {
        let options = GenerationOptions::default()
            .with_cmdline_args(true)
            .with_main_export_decl("EXPORT");
        let scan = plain_scan();
        let text = main_block(&RunnerContext::new(&options, &scan, "t.c"));
        assert!(text.contains("\nEXPORT int main(int argc, char** argv)\n{"));
        assert!(!text.contains("int main(int argc, char** argv);"));
    }

    #[test]
    fn test_main_literal_name_without_export_decl() {
        let options = GenerationOptions::default().with_main_name(crate::config::MainName::Literal("run".to_string()));
        let scan = plain_scan();
        let text = main_block(&RunnerContext::new(&options, &scan, "t.c"));
        assert!(text.contains("\nint run(void);\nint run(void)\n"));
    }

    #[test]
    fn test_main_mocks_suite_and_escaping() {
        let options = GenerationOptions::default()
            .with_suite_setup("x();")
            .with_suite_teardown("return num_failures;");
        let scan = scan_with_mock();
        let text = main_block(&RunnerContext::new(&options, &scan, "C:\\t\\T.c"));
        assert!(text.contains("  suite_setup();\n  UnityBegin(\"C:\\\\t\\\\T.c\");"));
        assert!(text.contains("\n\n  CMock_Guts_MemFreeFinal();\n  return suite_teardown(UnityEnd());\n}\n"));
    }

    #[test]
    fn test_main_cmdline_listing() {
        let options = GenerationOptions::default().with_cmdline_args(true).with_param_tests(true);
        let scan = ScanResult {
            tests: vec![test_case("test_sum", 4, Some(vec!["1,2"])), test_case("test_plain", 8, None)],
            ..ScanResult::default()
        };
        let text = main_block(&RunnerContext::new(&options, &scan, "TestCalc.c"));
        let expected = [
            "int main(int argc, char** argv)",
            "{",
            "  int parse_status = UnityParseOptions(argc, argv);",
            "  if (parse_status != 0)",
            "  {",
            "    if (parse_status < 0)",
            "    {",
            "      UnityPrint(\"TestCalc.\");",
            "      UNITY_PRINT_EOL();",
            "      UnityPrint(\"  test_sum(1,2)\");",
            "      UNITY_PRINT_EOL();",
            "      UnityPrint(\"  test_plain(RUN_TEST_NO_ARGS)\");",
            "      UNITY_PRINT_EOL();",
            "      return 0;",
            "    }",
            "    return parse_status;",
            "  }",
            "  UnityBegin(\"TestCalc.c\");",
        ]
        .join("\n");
        assert!(text.contains(&expected), "{text}");
    }

    #[test]
    fn test_main_no_tests_returns_immediately() {
        let options = GenerationOptions::default();
        let scan = ScanResult::default();
        let text = main_block(&RunnerContext::new(&options, &scan, "empty.c"));
        assert!(text.contains("  UnityBegin(\"empty.c\");\n\n  return (UnityEnd());"));
        assert!(!text.contains("RUN_TEST"));
    }
}
