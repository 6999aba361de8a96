//! Lazy statement sequence over a source text.

use super::error::ParseError;
use super::statement::Parser;
use crate::ast::Statement;
use crate::options::Options;

/// Yields the statements of a source text one at a time.
///
/// Whitespace, comments and stray `;` between statements are skipped.
/// After a parse error the reader yields nothing more: the position of the
/// cursor inside the failed statement is not meaningful.
pub struct StatementReader<'a> {
    parser: Parser<'a>,
    current: Option<Statement>,
    failed: bool,
}

impl<'a> StatementReader<'a> {
    #[must_use]
    pub fn new(input: &'a str, options: &Options) -> Self {
        Self {
            parser: Parser::new(input, options),
            current: None,
            failed: false,
        }
    }

    /// Advances to the next statement. Returns `Ok(false)` once the input
    /// is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the `ParseError` of a statement that fails to parse.
    pub fn move_next(&mut self) -> Result<bool, ParseError> {
        self.current = None;
        if self.failed || !self.parser.skip_to_statement() {
            return Ok(false);
        }
        match self.parser.parse_statement() {
            Ok(statement) => {
                self.current = Some(statement);
                Ok(true)
            }
            Err(err) => {
                self.failed = true;
                Err(err)
            }
        }
    }

    /// The statement produced by the last successful `move_next`.
    #[must_use]
    pub const fn current(&self) -> Option<&Statement> {
        self.current.as_ref()
    }
}

impl Iterator for StatementReader<'_> {
    type Item = Result<Statement, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.move_next() {
            Ok(true) => self.current.take().map(Ok),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

impl core::iter::FusedIterator for StatementReader<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::StatementKind;

    #[test]
    fn test_skips_noise_between_statements() {
        let sql = ";; -- lead\nSELECT 1;;\n/* mid */ DELETE FROM t;";
        let kinds: Vec<StatementKind> = StatementReader::new(sql, &Options::default())
            .map(|s| s.unwrap().kind())
            .collect();
        assert_eq!(kinds, vec![StatementKind::Select, StatementKind::Delete]);
    }

    #[test]
    fn test_move_next_and_current() {
        let mut reader = StatementReader::new("UPDATE t SET a = 1", &Options::default());
        assert_eq!(reader.move_next(), Ok(true));
        assert_eq!(reader.current().map(Statement::kind), Some(StatementKind::Update));
        assert_eq!(reader.move_next(), Ok(false));
        assert!(reader.current().is_none());
    }

    #[test]
    fn test_fused_after_error() {
        let mut reader = StatementReader::new("SELECT 1; GO; SELECT 2", &Options::default());
        assert!(reader.next().is_some_and(|r| r.is_ok()));
        assert!(reader.next().is_some_and(|r| r.is_err()));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(StatementReader::new("  -- only a comment", &Options::default()).count(), 0);
    }
}
