//! C code emitter - builds generated C text line by line
//!
//! Lines are joined with `\n` and the result carries no trailing newline; callers add blank lines explicitly so
//! the spacing between runner sections is predictable.

/// A buffer for building C source text with two-space indentation
#[derive(Debug, Default)]
pub struct CEmitter {
    lines: Vec<String>,
    indent_level: usize,
}

impl CEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the generated code
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        if s.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", "  ".repeat(self.indent_level), s));
        }
    }

    /// Write a macro body line: indented, followed by a line continuation
    pub fn continued(&mut self, s: &str) {
        self.line(&format!("{s} \\"));
    }

    /// Write several pre-formatted lines verbatim (no indentation is added)
    pub fn raw(&mut self, text: &str) {
        self.lines.extend(text.split('\n').map(str::to_string));
    }

    /// Write a blank line
    pub fn blank_line(&mut self) {
        self.lines.push(String::new());
    }

    /// Write a section banner preceded by a blank line
    pub fn banner(&mut self, title: &str) {
        self.blank_line();
        self.line(&format!("/*======={title}=====*/"));
    }

    /// Write an `#include` directive
    pub fn include(&mut self, target: &str) {
        self.line(&format!("#include {target}"));
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write a brace block with the opening brace on its own line
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(header);
        self.line("{");
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }

    /// Like [`CEmitter::block`], with every line continued for use inside a macro
    pub fn macro_block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.continued(header);
        self.continued("{");
        self.indent();
        f(self);
        self.dedent();
        self.continued("}");
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
