//! Parser error types.

/// A structural parse failure. Lexing never fails, so this is the only
/// error the crate produces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A token other than the one the grammar requires.
    #[error("Expected {expected}, found '{found}' at position {position}")]
    UnexpectedToken {
        /// What the grammar required.
        expected: String,
        /// Text of the offending token.
        found: String,
        /// 0-based character offset of the offending token.
        position: usize,
    },

    /// The input ended where the grammar required more.
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof {
        /// What the grammar required.
        expected: String,
    },

    /// The token at the start of a statement does not begin any known
    /// statement kind.
    #[error("Unrecognized statement starting with '{found}' at position {position}")]
    UnrecognizedStatement {
        /// Text of the leading token.
        found: String,
        /// 0-based character offset of the leading token.
        position: usize,
    },

    /// Subqueries nest deeper than the configured limit.
    #[error("Subqueries nested deeper than {limit} levels at position {position}")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
        /// 0-based character offset of the subquery that exceeded it.
        position: usize,
    },
}

impl ParseError {
    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: &str, position: usize) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            found: found.to_string(),
            position,
        }
    }

    /// Creates an "unexpected end of input" error.
    #[must_use]
    pub fn unexpected_eof(expected: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            expected: expected.into(),
        }
    }

    /// 0-based character offset of the failure, when known.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnrecognizedStatement { position, .. }
            | Self::NestingTooDeep { position, .. } => Some(*position),
            Self::UnexpectedEof { .. } => None,
        }
    }
}
