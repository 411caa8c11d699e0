//! Context types for rule execution.

use crate::types::Location;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Context provided to per-file rules.
///
/// Carries the file being linted and whether the run is in fix mode.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    /// Whether rules should rewrite the stylesheet instead of reporting.
    pub fix: bool,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context in report mode.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
            fix: false,
        }
    }

    /// Sets fix mode.
    #[must_use]
    pub fn with_fix(mut self, fix: bool) -> Self {
        self.fix = fix;
        self
    }

    /// Converts a byte offset into a 1-indexed `(line, column)` pair.
    ///
    /// Columns count characters, not bytes. Offsets past the end of the
    /// content resolve to the position just after the last character.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let before = &self.content[..floor_char_boundary(self.content, offset)];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |n| n + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }

    /// Builds a [`Location`] for a byte range in this file.
    #[must_use]
    pub fn location_at(&self, span: Range<usize>) -> Location {
        let (line, column) = self.line_col(span.start);
        Location::new(self.relative_path.clone(), line, column)
            .with_span(span.start, span.end.saturating_sub(span.start))
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(content: &str) -> FileContext<'_> {
        FileContext {
            path: Path::new("test.scss"),
            content,
            relative_path: PathBuf::from("test.scss"),
            fix: false,
        }
    }

    #[test]
    fn test_relative_path() {
        let ctx = FileContext::new(
            Path::new("/project/styles/main.scss"),
            "",
            Path::new("/project"),
        );
        assert_eq!(ctx.relative_path, PathBuf::from("styles/main.scss"));
        assert!(!ctx.fix);
        assert!(ctx.with_fix(true).fix);
    }

    #[test]
    fn test_line_col() {
        let ctx = ctx("line1\nline2\nline3");
        assert_eq!(ctx.line_col(0), (1, 1));
        assert_eq!(ctx.line_col(6), (2, 1));
        assert_eq!(ctx.line_col(8), (2, 3));
        assert_eq!(ctx.line_col(100), (3, 6));
    }

    #[test]
    fn test_line_col_counts_characters() {
        let ctx = ctx("/* é */ a");
        assert_eq!(ctx.line_col(9), (1, 9));
    }

    #[test]
    fn test_location_at() {
        let ctx = ctx("a {\n  color: $x;\n}");
        let location = ctx.location_at(6..15);
        assert_eq!(location.line, 2);
        assert_eq!(location.column, 3);
        assert_eq!(location.offset, 6);
        assert_eq!(location.length, 9);
    }
}
