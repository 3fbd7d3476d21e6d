//! Companion header generation.

use runnergen_core::header_guard;
use runnergen_core::lang::conventions::AUTOGENERATED_BANNER;
use runnergen_core::lang::framework::{MOCK_SUPPORT_HEADER, framework_header};

use super::c_emitter::CEmitter;
use super::sections::{RunnerContext, configured_include_targets};

/// Build the companion header: include guard, framework and test-file includes, one prototype per test.
///
/// Prototypes use the declared parameter list, or `void` when the test declares none.
pub fn companion_header(ctx: &RunnerContext<'_>, header_path: &str) -> String {
    let options = ctx.options;
    let guard = header_guard(header_path);
    let mut e = CEmitter::new();

    e.line(AUTOGENERATED_BANNER);
    e.line(&format!("#ifndef {guard}"));
    e.line(&format!("#define {guard}"));
    e.blank_line();
    e.blank_line();
    e.include(&format!("\"{}\"", framework_header(&options.framework)));
    if ctx.scan.has_mocks() {
        e.include(&format!("\"{MOCK_SUPPORT_HEADER}\""));
    }
    for target in configured_include_targets(options) {
        e.include(&target);
    }
    for include in &ctx.scan.testfile_includes {
        e.include(&include.directive_target());
    }
    e.blank_line();
    for test in &ctx.scan.tests {
        let params = if test.parameter_list.is_empty() {
            "void"
        } else {
            test.parameter_list.as_str()
        };
        e.line(&format!("void {}({params});", test.name));
    }
    e.line("#endif");
    e.blank_line();
    e.blank_line();
    e.finish()
}
