//! Records produced by the scanner and consumed read-only by the generator.

use runnergen_core::lang::conventions::is_mock_basename;
use runnergen_core::sanitize_c_identifier;

/// A discovered test function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Function name, unique within one scan.
    pub name: String,
    /// 1-based physical line in the original source (0 only if the name never occurs literally).
    pub line_number: usize,
    /// Parameter-type list for the `extern` declaration; `void` when the parameter list is empty.
    pub call_signature: String,
    /// Declared parameters as written, for the companion header; may be empty.
    pub parameter_list: String,
    /// One argument string per `TEST_CASE(...)` marker, when parameterized tests are enabled.
    pub parameterized_args: Option<Vec<String>>,
}

impl TestCase {
    /// Argument sets to expand in the runner, if this test carries any.
    pub fn argument_sets(&self) -> Option<&[String]> {
        self.parameterized_args.as_deref().filter(|args| !args.is_empty())
    }
}

/// Whether an include used quotes or angle brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludeKind {
    /// `#include "name.h"`; the path is stored without its extension.
    Local,
    /// `#include <name>`; the path is stored with its angle brackets.
    System,
}

/// A single `#include` directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IncludeRef {
    pub path: String,
    pub kind: IncludeKind,
}

impl IncludeRef {
    pub fn local(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: IncludeKind::Local,
        }
    }

    pub fn system(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: IncludeKind::System,
        }
    }

    /// Classify a path the way the config layer spells includes: anything containing `<` is a system include.
    pub fn from_config(path: &str) -> Self {
        if path.contains('<') {
            Self::system(path)
        } else {
            Self::local(strip_header_extension(path))
        }
    }

    /// Last path component, without angle brackets.
    pub fn basename(&self) -> &str {
        let base = self.path.rsplit('/').next().unwrap_or(&self.path);
        base.trim_start_matches('<').trim_end_matches('>')
    }

    /// Identity used for de-duplication: the extension-stripped basename for local includes, the bracketed path
    /// for system includes.
    pub fn identity(&self) -> (IncludeKind, String) {
        match self.kind {
            IncludeKind::Local => (self.kind, strip_header_extension(self.basename())),
            IncludeKind::System => (self.kind, self.path.clone()),
        }
    }

    /// Text that follows `#include ` in generated code.
    pub fn directive_target(&self) -> String {
        match self.kind {
            IncludeKind::Local => format!("\"{}.h\"", strip_header_extension(&self.path)),
            IncludeKind::System => self.path.clone(),
        }
    }

    /// Whether the basename follows the mock naming convention.
    pub fn is_mock(&self) -> bool {
        is_mock_basename(self.basename())
    }
}

/// Remove a trailing `.h`/`.H` from a local include path.
fn strip_header_extension(path: &str) -> String {
    path.strip_suffix(".h")
        .or_else(|| path.strip_suffix(".H"))
        .unwrap_or(path)
        .to_string()
}

/// An include identified as a mock by its basename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MockRef(pub IncludeRef);

impl MockRef {
    pub fn include(&self) -> &IncludeRef {
        &self.0
    }

    /// Mock module name: the basename without brackets or header extension.
    pub fn name(&self) -> String {
        strip_header_extension(self.0.basename())
    }

    /// Symbol prefix for the mock's `_Init`/`_Verify`/`_Destroy` functions.
    pub fn symbol(&self) -> String {
        sanitize_c_identifier(&self.name())
    }
}

/// Raw include directives as found in the source, before mock partitioning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeSet {
    /// Quoted includes without extension.
    pub local: Vec<String>,
    /// Angle-bracketed includes with brackets re-added.
    pub system: Vec<String>,
}

impl IncludeSet {
    /// All includes, local first, as typed records.
    pub fn refs(&self) -> impl Iterator<Item = IncludeRef> + '_ {
        self.local
            .iter()
            .map(|p| IncludeRef::local(p.as_str()))
            .chain(self.system.iter().map(|p| IncludeRef::system(p.as_str())))
    }

    /// All include paths, local first.
    pub fn paths(&self) -> Vec<String> {
        self.local.iter().chain(self.system.iter()).cloned().collect()
    }
}

/// Everything the generator needs from one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub tests: Vec<TestCase>,
    /// Non-mock, non-framework includes in source order.
    pub testfile_includes: Vec<IncludeRef>,
    /// Mock includes in source order, each once.
    pub mocks: Vec<MockRef>,
}

impl ScanResult {
    pub fn has_mocks(&self) -> bool {
        !self.mocks.is_empty()
    }
}
