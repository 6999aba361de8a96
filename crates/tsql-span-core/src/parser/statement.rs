//! Statement parsers.

use tracing::debug;

use super::clause::{
    self, DEFAULT_VALUES, DELETE, EXECUTE, FOR, FROM, GROUP_BY, HAVING, INSERT, INTO, MERGE, ON,
    OPTION, ORDER_BY, OUTPUT, SELECT, SET, SET_OPERATOR, UPDATE, USING, VALUES, WHEN, WHERE,
};
use super::cursor::TokenCursor;
use super::error::ParseError;
use crate::ast::{
    Clause, DeleteStatement, InsertStatement, MergeStatement, SelectStatement, SetOperation,
    Statement, UpdateStatement,
};
use crate::lexer::{Character, Keyword, Token, TokenKind};
use crate::options::Options;

const STATEMENT_KEYWORDS: &str = "SELECT, INSERT, UPDATE, DELETE or MERGE";

/// Recursive-descent statement parser.
///
/// Statement parsers call clause parsers in grammar order; clause parsers
/// call back into [`Parser::parse_subquery`] for parenthesised SELECTs.
pub struct Parser<'a> {
    pub(super) cursor: TokenCursor<'a>,
    max_nesting_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str, options: &Options) -> Self {
        Self {
            cursor: TokenCursor::new(input, options),
            max_nesting_depth: options.max_nesting_depth,
        }
    }

    /// Skips whitespace, comments and `;` separators. Returns false if
    /// nothing is left.
    pub fn skip_to_statement(&mut self) -> bool {
        self.cursor.skip_noise();
        !self.cursor.is_eof()
    }

    /// Parses one statement starting at the cursor. The terminating
    /// semicolon, if any, is left unconsumed.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the leading token starts no known
    /// statement, or a required clause is missing.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let with = self.parse_optional_clause(&clause::WITH, 0)?;

        let Some(token) = self.cursor.current() else {
            return Err(self.error_here(STATEMENT_KEYWORDS));
        };
        let statement = match token.kind() {
            TokenKind::Keyword(Keyword::Select) => {
                Statement::Select(self.parse_select_statement(with, 0)?)
            }
            TokenKind::Keyword(Keyword::Insert) => {
                Statement::Insert(self.parse_insert_statement(with)?)
            }
            TokenKind::Keyword(Keyword::Update) => {
                Statement::Update(self.parse_update_statement(with)?)
            }
            TokenKind::Keyword(Keyword::Delete) => {
                Statement::Delete(self.parse_delete_statement(with)?)
            }
            TokenKind::Keyword(Keyword::Merge) => {
                Statement::Merge(self.parse_merge_statement(with)?)
            }
            _ if with.is_some() => return Err(self.error_here(STATEMENT_KEYWORDS)),
            _ => {
                let err = ParseError::UnrecognizedStatement {
                    found: token.text().to_string(),
                    position: token.begin_position(),
                };
                debug!(error = %err, "statement parse failed");
                return Err(err);
            }
        };

        debug!(
            kind = %statement.kind(),
            begin = statement.begin_position(),
            end = statement.end_position(),
            "parsed statement"
        );
        Ok(statement)
    }

    /// Parses a parenthesised SELECT one level below `depth`.
    pub(super) fn parse_subquery(&mut self, depth: usize) -> Result<SelectStatement, ParseError> {
        let depth = depth + 1;
        if depth > self.max_nesting_depth {
            let err = ParseError::NestingTooDeep {
                limit: self.max_nesting_depth,
                position: self.cursor.current().map_or(0, Token::begin_position),
            };
            debug!(error = %err, "statement parse failed");
            return Err(err);
        }
        debug!(depth, "parsing subquery");
        self.parse_select_statement(None, depth)
    }

    /// Parses a SELECT statement, set operations included.
    fn parse_select_statement(
        &mut self,
        with: Option<Clause>,
        depth: usize,
    ) -> Result<SelectStatement, ParseError> {
        let mut statement = self.parse_select_core(depth)?;
        statement.with = with;

        while self.cursor.check_any_keyword(SET_OPERATOR.leading()) {
            let mut operator = self.parse_clause(&SET_OPERATOR, depth)?;
            let query = if self.cursor.check_character(Character::OpenParenthesis) {
                self.parse_parenthesized_operand(&mut operator, depth)?
            } else {
                self.parse_select_core(depth)?
            };
            statement.set_operations.push(SetOperation { operator, query });
        }

        statement.order_by = self.parse_optional_clause(&ORDER_BY, depth)?;
        statement.for_clause = self.parse_optional_clause(&FOR, depth)?;
        statement.option = self.parse_optional_clause(&OPTION, depth)?;
        Ok(statement)
    }

    /// `( SELECT ... )` on the right of a set operator. The `(` joins the
    /// operator clause and the `)` joins the operand's last clause.
    fn parse_parenthesized_operand(
        &mut self,
        operator: &mut Clause,
        depth: usize,
    ) -> Result<SelectStatement, ParseError> {
        let mut tokens: Vec<Token> = self.cursor.advance().into_iter().collect();
        self.cursor.collect_trivia(&mut tokens);
        operator.push_tokens(tokens);
        if !self.cursor.check_keyword(Keyword::Select) {
            return Err(self.error_here("SELECT"));
        }

        let mut query = self.parse_subquery(depth)?;
        if !self.cursor.check_character(Character::CloseParenthesis) {
            return Err(self.error_here("')'"));
        }
        let mut tokens: Vec<Token> = self.cursor.advance().into_iter().collect();
        self.cursor.collect_trivia(&mut tokens);
        query.last_clause_mut().push_tokens(tokens);
        Ok(query)
    }

    /// SELECT through HAVING: the part a bare set operand repeats.
    fn parse_select_core(&mut self, depth: usize) -> Result<SelectStatement, ParseError> {
        Ok(SelectStatement {
            with: None,
            select: self.parse_clause(&SELECT, depth)?,
            into: self.parse_optional_clause(&INTO, depth)?,
            from: self.parse_optional_clause(&FROM, depth)?,
            where_clause: self.parse_optional_clause(&WHERE, depth)?,
            group_by: self.parse_optional_clause(&GROUP_BY, depth)?,
            having: self.parse_optional_clause(&HAVING, depth)?,
            set_operations: Vec::new(),
            order_by: None,
            for_clause: None,
            option: None,
        })
    }

    fn parse_insert_statement(
        &mut self,
        with: Option<Clause>,
    ) -> Result<InsertStatement, ParseError> {
        let insert = self.parse_clause(&INSERT, 0)?;
        let output = self.parse_optional_clause(&OUTPUT, 0)?;
        let mut statement = InsertStatement {
            with,
            insert,
            output,
            values: None,
            select: None,
            default_values: None,
            execute: None,
        };

        if self.cursor.check_keyword(Keyword::Values) {
            statement.values = Some(self.parse_clause(&VALUES, 0)?);
        } else if self.cursor.check_keyword(Keyword::Select) {
            statement.select = Some(Box::new(self.parse_select_statement(None, 0)?));
        } else if self.cursor.check_keyword(Keyword::Default) {
            statement.default_values = Some(self.parse_clause(&DEFAULT_VALUES, 0)?);
        } else if self.cursor.check_any_keyword(EXECUTE.leading()) {
            statement.execute = Some(self.parse_clause(&EXECUTE, 0)?);
        } else {
            return Err(self.error_here("VALUES, SELECT, DEFAULT VALUES or EXECUTE"));
        }
        Ok(statement)
    }

    fn parse_update_statement(
        &mut self,
        with: Option<Clause>,
    ) -> Result<UpdateStatement, ParseError> {
        Ok(UpdateStatement {
            with,
            update: self.parse_clause(&UPDATE, 0)?,
            set: self.parse_clause(&SET, 0)?,
            output: self.parse_optional_clause(&OUTPUT, 0)?,
            from: self.parse_optional_clause(&FROM, 0)?,
            where_clause: self.parse_optional_clause(&WHERE, 0)?,
            option: self.parse_optional_clause(&OPTION, 0)?,
        })
    }

    fn parse_delete_statement(
        &mut self,
        with: Option<Clause>,
    ) -> Result<DeleteStatement, ParseError> {
        Ok(DeleteStatement {
            with,
            delete: self.parse_clause(&DELETE, 0)?,
            output: self.parse_optional_clause(&OUTPUT, 0)?,
            from: self.parse_optional_clause(&FROM, 0)?,
            where_clause: self.parse_optional_clause(&WHERE, 0)?,
            option: self.parse_optional_clause(&OPTION, 0)?,
        })
    }

    fn parse_merge_statement(&mut self, with: Option<Clause>) -> Result<MergeStatement, ParseError> {
        let merge = self.parse_clause(&MERGE, 0)?;
        let using = self.parse_clause(&USING, 0)?;
        let on = self.parse_clause(&ON, 0)?;
        let mut when = vec![self.parse_clause(&WHEN, 0)?];
        while let Some(branch) = self.parse_optional_clause(&WHEN, 0)? {
            when.push(branch);
        }
        Ok(MergeStatement {
            with,
            merge,
            using,
            on,
            when,
            output: self.parse_optional_clause(&OUTPUT, 0)?,
            option: self.parse_optional_clause(&OPTION, 0)?,
        })
    }

    /// Moves the current token into `tokens` if it is one of `keywords`.
    pub(super) fn expect_keyword_into(
        &mut self,
        keywords: &[Keyword],
        expected: &str,
        tokens: &mut Vec<Token>,
    ) -> Result<(), ParseError> {
        if self.cursor.check_any_keyword(keywords) {
            tokens.extend(self.cursor.advance());
            Ok(())
        } else {
            Err(self.error_here(expected))
        }
    }

    /// Builds the error for finding the current token where `expected`
    /// was required.
    fn error_here(&self, expected: &str) -> ParseError {
        let err = self.cursor.current().map_or_else(
            || ParseError::unexpected_eof(expected),
            |token| ParseError::unexpected(expected, token.text(), token.begin_position()),
        );
        debug!(error = %err, "statement parse failed");
        err
    }
}
