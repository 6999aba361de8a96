//! # tsql-span-core
//!
//! A T-SQL lexer and clause-level statement parser that keeps exact token
//! spans.
//!
//! This crate provides:
//! - A hand-written maximal-munch tokenizer that never fails: unterminated
//!   strings, comments and bracketed identifiers become `Incomplete*`
//!   tokens
//! - A recursive-descent parser that groups tokens into named clauses
//!   (SELECT, FROM, WHERE, ...) and recurses into subqueries
//!
//! Every token, clause and statement reports 0-based character offsets
//! into the original text, inclusive on both ends.
//!
//! ## Tokenizing
//!
//! ```rust
//! use tsql_span_core::{tokenize, TokenType};
//!
//! let tokens = tokenize("SELECT 'it''s' -- note", false, false);
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1].token_type(), TokenType::StringLiteral);
//! assert_eq!(tokens[1].text(), "'it''s'");
//! assert_eq!(tokens[2].begin_position(), 15);
//! ```
//!
//! ## Parsing
//!
//! ```rust
//! use tsql_span_core::parse_statements;
//!
//! let statements = parse_statements(
//!     "SELECT x FROM t WHERE a = 1 AND b = 2; DELETE FROM t",
//!     false,
//!     false,
//! )
//! .unwrap();
//!
//! let select = statements[0].as_select().unwrap();
//! let where_clause = select.where_clause.as_ref().unwrap();
//! assert_eq!(where_clause.begin_position(), 16);
//! assert_eq!(where_clause.connectors().count(), 1);
//! assert!(statements[1].as_delete().is_some());
//! ```

pub mod ast;
pub mod lexer;
pub mod options;
pub mod parser;

pub use ast::{Clause, ClauseKind, Statement, StatementKind};
pub use lexer::{Character, Keyword, Span, Token, TokenKind, TokenType, Tokenizer};
pub use options::Options;
pub use parser::{ParseError, Parser, StatementReader};

/// Tokenizes `text` with the given options.
#[must_use]
pub fn tokenize_with(text: &str, options: &Options) -> Vec<Token> {
    Tokenizer::new(text, options).collect()
}

/// Tokenizes `text`.
///
/// With `include_whitespace`, concatenating the text of every token
/// reproduces `text` exactly.
#[must_use]
pub fn tokenize(text: &str, use_quoted_identifiers: bool, include_whitespace: bool) -> Vec<Token> {
    tokenize_with(
        text,
        &Options::new()
            .use_quoted_identifiers(use_quoted_identifiers)
            .include_whitespace(include_whitespace),
    )
}

/// Parses every statement of `text` with the given options.
///
/// # Errors
///
/// Returns the first structural `ParseError`.
pub fn parse_statements_with(text: &str, options: &Options) -> Result<Vec<Statement>, ParseError> {
    StatementReader::new(text, options).collect()
}

/// Parses every statement of `text`.
///
/// # Errors
///
/// Returns the first structural `ParseError`.
pub fn parse_statements(
    text: &str,
    use_quoted_identifiers: bool,
    include_whitespace: bool,
) -> Result<Vec<Statement>, ParseError> {
    parse_statements_with(
        text,
        &Options::new()
            .use_quoted_identifiers(use_quoted_identifiers)
            .include_whitespace(include_whitespace),
    )
}
