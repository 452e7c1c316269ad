use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open token range `[start, end)` over a document's token sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} past end {}", start, end);
        Self { start, end }
    }

    /// Span covering a single token
    pub fn token(index: usize) -> Self {
        Self::new(index, index + 1)
    }

    pub fn length(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    pub fn contains_index(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Last token index of a non-empty span
    pub fn last(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// Represents a named capture in a pattern match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCapture {
    pub name: String,
    pub span: Span,
}

impl NamedCapture {
    pub fn new(name: String, span: Span) -> Self {
        Self { name, span }
    }
}

/// A matched span with the named captures recorded while matching it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanWithCaptures {
    pub span: Span,
    pub captures: Vec<NamedCapture>,
}

impl SpanWithCaptures {
    pub fn new(span: Span) -> Self {
        Self {
            span,
            captures: Vec::new(),
        }
    }

    pub fn with_captures(span: Span, captures: Vec<NamedCapture>) -> Self {
        Self { span, captures }
    }

    /// First capture recorded under `name`
    pub fn capture(&self, name: &str) -> Option<Span> {
        self.captures
            .iter()
            .find(|capture| capture.name == name)
            .map(|capture| capture.span)
    }
}
