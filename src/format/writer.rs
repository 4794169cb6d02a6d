//! Line collector for one package's surface.
//!
//! Lines are gathered in whatever order the declarations arrive and sorted exactly once, in [`SurfaceWriter::finish`].
//! Nothing else orders output.

/// Append-only buffer of canonical lines for a single package
#[derive(Debug, Default)]
pub struct SurfaceWriter {
    lines: Vec<String>,
}

impl SurfaceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one canonical line (without the `pkg <path>, ` prefix)
    pub fn line(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sort the lines and render them as `<prefix> <path>, <line>\n`.
    pub fn finish(mut self, prefix: &str, path: &str) -> String {
        self.lines.sort();

        let mut out = String::new();
        for line in &self.lines {
            out.push_str(prefix);
            out.push(' ');
            out.push_str(path);
            out.push_str(", ");
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
