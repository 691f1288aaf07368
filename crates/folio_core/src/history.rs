/// Session command history with a navigation cursor.
///
/// Entries are stored as typed, never normalized, and only grow within a
/// session; `clear` wipes display output, not history. Cursor invariant:
/// `0 <= cursor <= entries.len()`, where `entries.len()` means "editing a
/// fresh line, not browsing".
#[derive(Clone, Debug, Default)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = self.entries.len();
    }

    /// Step back toward the oldest entry. Returns `None` at the lower
    /// boundary; the caller leaves the input line unchanged.
    pub fn previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].as_str())
    }

    /// Step forward toward the newest entry. Returns `None` once past the
    /// newest entry; the caller blanks the input line and the cursor parks
    /// at `entries.len()`.
    pub fn next(&mut self) -> Option<&str> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            return Some(self.entries[self.cursor].as_str());
        }
        self.cursor = self.entries.len();
        None
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
