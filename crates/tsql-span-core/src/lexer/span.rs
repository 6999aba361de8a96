//! Source location tracking for tokens, clauses and statements.

/// An inclusive range of character offsets in the source text.
///
/// Both ends are 0-based character (not byte) offsets, so a one-character
/// token at the start of the input has the span `0..=0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    /// First character offset (inclusive).
    pub begin: usize,
    /// Last character offset (inclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Returns the number of characters covered by the span.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.end - self.begin + 1
    }

    /// Returns true if `position` falls inside the span.
    #[must_use]
    pub const fn contains(&self, position: usize) -> bool {
        self.begin <= position && position <= self.end
    }

    /// Merges two spans into one that covers both.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let begin = if self.begin < other.begin {
            self.begin
        } else {
            other.begin
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { begin, end }
    }
}

impl core::fmt::Display for Span {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}..={}", self.begin, self.end)
    }
}
