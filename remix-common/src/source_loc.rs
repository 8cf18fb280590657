//! Source location tracking for error reporting
//!
//! This module provides types for tracking locations in source files,
//! which every phase uses to point diagnostics at the offending input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in a source file (line and column are 1-based, offset is 0-based)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub filename: String,
    pub line: u32,
    pub column: u32,
    /// Character offset from the start of the input
    pub offset: usize,
}

impl SourceLocation {
    /// Create a location with filename
    pub fn new(filename: &str, line: u32, column: u32, offset: usize) -> Self {
        Self {
            filename: filename.to_string(),
            line,
            column,
            offset,
        }
    }

    /// Create a dummy location for testing
    pub fn dummy() -> Self {
        Self::new("<unknown>", 0, 0, 0)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// A span in a source file (from start to end location)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl SourceSpan {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    /// Create a span from a single location
    pub fn from_location(location: SourceLocation) -> Self {
        Self {
            end: location.clone(),
            start: location,
        }
    }

    /// Create a dummy span for testing
    pub fn dummy() -> Self {
        Self::from_location(SourceLocation::dummy())
    }

    /// Number of characters covered by the span
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            if self.start.column == self.end.column {
                write!(f, "{}:{}:{}", self.start.filename, self.start.line, self.start.column)
            } else {
                write!(
                    f,
                    "{}:{}:{}-{}",
                    self.start.filename, self.start.line, self.start.column, self.end.column
                )
            }
        } else {
            write!(
                f,
                "{}:{}:{}-{}:{}",
                self.start.filename, self.start.line, self.start.column, self.end.line, self.end.column
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_location() {
        let loc = SourceLocation::new("test.c", 42, 10, 317);
        assert_eq!(loc.filename, "test.c");
        assert_eq!(loc.line, 42);
        assert_eq!(loc.column, 10);
        assert_eq!(loc.offset, 317);
        assert_eq!(format!("{}", loc), "test.c:42:10");
    }

    #[test]
    fn test_source_span_same_line() {
        let start = SourceLocation::new("test.c", 1, 5, 4);
        let end = SourceLocation::new("test.c", 1, 10, 9);
        let span = SourceSpan::new(start, end);

        assert_eq!(format!("{}", span), "test.c:1:5-10");
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_source_span_different_lines() {
        let start = SourceLocation::new("test.c", 1, 5, 4);
        let end = SourceLocation::new("test.c", 3, 10, 40);
        let span = SourceSpan::new(start, end);

        assert_eq!(format!("{}", span), "test.c:1:5-3:10");
    }
}
