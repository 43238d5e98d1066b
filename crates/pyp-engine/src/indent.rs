//! Block depth tracking.

/// Spaces per indentation level in generated code.
pub const INDENT_WIDTH: usize = 4;

/// Nested block depth, driven by block markers on code lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndentTracker {
    depth: usize,
}

impl IndentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Enter a block.
    pub fn open(&mut self) {
        self.depth += 1;
    }

    /// Leave a block. Returns `false` and leaves the depth alone when no
    /// block is open.
    pub fn close(&mut self) -> bool {
        match self.depth.checked_sub(1) {
            Some(depth) => {
                self.depth = depth;
                true
            }
            None => false,
        }
    }

    /// Append the current indentation to `out`.
    pub fn write_indent(&self, out: &mut String) {
        out.extend(std::iter::repeat_n(' ', self.depth * INDENT_WIDTH));
    }

    /// A fresh string holding the current indentation.
    pub fn prefix(&self) -> String {
        let mut out = String::with_capacity(self.depth * INDENT_WIDTH);
        self.write_indent(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut indent = IndentTracker::new();
        indent.open();
        indent.open();
        assert_eq!(indent.depth(), 2);
        assert_eq!(indent.prefix(), " ".repeat(2 * INDENT_WIDTH));
        assert!(indent.close());
        assert!(indent.close());
        assert_eq!(indent.depth(), 0);
        assert_eq!(indent.prefix(), "");
    }

    #[test]
    fn test_write_indent_appends() {
        let mut indent = IndentTracker::new();
        indent.open();
        let mut out = String::from("x");
        indent.write_indent(&mut out);
        assert_eq!(out.len(), 1 + INDENT_WIDTH);
        assert!(out[1..].chars().all(|c| c == ' '));
    }

    #[test]
    fn test_close_at_zero_is_rejected() {
        let mut indent = IndentTracker::new();
        assert!(!indent.close());
        assert_eq!(indent.depth(), 0);
    }
}
