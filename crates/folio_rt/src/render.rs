pub trait Renderer {
    /// Append one discrete display unit; callers keep the latest visible.
    fn append_line(&mut self, line: &str);
    /// Discard every previously displayed unit.
    fn clear(&mut self);
    /// Total lines ever appended, monotonic across clears.
    fn lines_rendered(&self) -> usize;
}

#[derive(Default)]
pub struct NoopRenderer {
    appended: usize,
}

impl Renderer for NoopRenderer {
    fn append_line(&mut self, _line: &str) {
        self.appended = self.appended.saturating_add(1);
    }

    fn clear(&mut self) {}

    fn lines_rendered(&self) -> usize {
        self.appended
    }
}

/// Retains displayed lines so the interactive shell can redraw the frame
/// and tests can assert on visible output.
#[derive(Clone, Debug, Default)]
pub struct BufferRenderer {
    lines: Vec<String>,
    appended: usize,
}

impl BufferRenderer {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Renderer for BufferRenderer {
    fn append_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
        self.appended = self.appended.saturating_add(1);
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn lines_rendered(&self) -> usize {
        self.appended
    }
}
