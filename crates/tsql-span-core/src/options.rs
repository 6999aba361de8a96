//! Lexing and parsing options.

/// Default bound on nested subqueries.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;

/// Options shared by the tokenizer and the statement reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Classify `"..."` as an identifier instead of a string literal.
    pub use_quoted_identifiers: bool,
    /// Emit Whitespace tokens instead of skipping whitespace runs.
    pub include_whitespace: bool,
    /// How many subqueries may nest inside one another before parsing
    /// fails.
    pub max_nesting_depth: usize,
}

impl Options {
    /// Creates the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            use_quoted_identifiers: false,
            include_whitespace: false,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }

    /// Sets whether double quotes delimit identifiers.
    #[must_use]
    pub const fn use_quoted_identifiers(mut self, enabled: bool) -> Self {
        self.use_quoted_identifiers = enabled;
        self
    }

    /// Sets whether whitespace runs become tokens.
    #[must_use]
    pub const fn include_whitespace(mut self, enabled: bool) -> Self {
        self.include_whitespace = enabled;
        self
    }

    /// Sets the subquery nesting bound.
    #[must_use]
    pub const fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert!(!options.use_quoted_identifiers);
        assert!(!options.include_whitespace);
        assert_eq!(options.max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
    }

    #[test]
    fn test_builder() {
        let options = Options::new()
            .use_quoted_identifiers(true)
            .include_whitespace(true)
            .max_nesting_depth(3);
        assert!(options.use_quoted_identifiers);
        assert!(options.include_whitespace);
        assert_eq!(options.max_nesting_depth, 3);
    }
}
