//! Optional parse tracing.
//!
//! A `Tracer` belongs to a single parser. It records a `BEGIN`/`END` line
//! for each production the parser enters and leaves, indented one tab per
//! level of nesting.

#[derive(Debug, Default, Clone)]
pub struct Tracer {
    depth: usize,
    lines: Vec<String>,
}

impl Tracer {
    pub fn new() -> Self {
        Tracer::default()
    }

    pub fn begin(&mut self, name: &str) {
        self.depth += 1;
        self.push(format!("BEGIN {}", name));
    }

    pub fn end(&mut self, name: &str) {
        self.push(format!("END {}", name));
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn push(&mut self, line: String) {
        let indent = "\t".repeat(self.depth.saturating_sub(1));
        self.lines.push(format!("{}{}", indent, line));
    }
}
