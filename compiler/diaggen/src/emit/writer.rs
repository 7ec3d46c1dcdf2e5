//! Indented text buffer used by both emitters.

/// Accumulates generated C source line by line.
#[derive(Debug, Default)]
pub struct CodeWriter {
    /// Current indentation level.
    indent: usize,
    output: String,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self {
            indent: 0,
            output: String::with_capacity(4096),
        }
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
    }

    /// Write a line with indentation and a newline.
    pub fn writeln(&mut self, s: &str) {
        self.write_indent();
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Write `items` one per line, with `sep` after every item but the last.
    pub fn write_separated<S: AsRef<str>>(&mut self, items: &[S], sep: &str) {
        let last = items.len().saturating_sub(1);
        for (i, item) in items.iter().enumerate() {
            self.write_indent();
            self.output.push_str(item.as_ref());
            if i < last {
                self.output.push_str(sep);
            }
            self.output.push('\n');
        }
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Take the generated output.
    pub fn finish(self) -> String {
        self.output
    }
}
