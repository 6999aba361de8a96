#![allow(dead_code)]

use tsql_span_core::ast::{
    Clause, DeleteStatement, InsertStatement, MergeStatement, SelectStatement, Statement,
    UpdateStatement,
};
use tsql_span_core::{parse_statements, tokenize, ParseError, Token, TokenType};

/// Tokens of `sql` without whitespace.
pub fn tokens(sql: &str) -> Vec<Token> {
    tokenize(sql, false, false)
}

/// Tokens of `sql` with whitespace runs included.
pub fn all_tokens(sql: &str) -> Vec<Token> {
    tokenize(sql, false, true)
}

pub fn types(sql: &str) -> Vec<TokenType> {
    tokens(sql).iter().map(Token::token_type).collect()
}

pub fn texts(sql: &str) -> Vec<String> {
    tokens(sql).iter().map(|t| t.text().to_string()).collect()
}

/// Asserts that `sql` lexes to exactly one token and returns it.
pub fn single(sql: &str) -> Token {
    let mut tokens = tokens(sql);
    assert_eq!(tokens.len(), 1, "Expected one token for: {sql}\nGot: {tokens:?}");
    tokens.remove(0)
}

pub fn parse_all(sql: &str) -> Vec<Statement> {
    parse_statements(sql, false, false)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse(sql: &str) -> Statement {
    let mut statements = parse_all(sql);
    assert_eq!(statements.len(), 1, "Expected one statement for: {sql}");
    statements.remove(0)
}

pub fn parse_err(sql: &str) -> ParseError {
    parse_statements(sql, false, false)
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    match parse(sql) {
        Statement::Insert(i) => i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_update(sql: &str) -> UpdateStatement {
    match parse(sql) {
        Statement::Update(u) => u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

pub fn parse_delete(sql: &str) -> DeleteStatement {
    match parse(sql) {
        Statement::Delete(d) => d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

pub fn parse_merge(sql: &str) -> MergeStatement {
    match parse(sql) {
        Statement::Merge(m) => m,
        other => panic!("Expected MERGE, got {other:?}"),
    }
}

/// The text a clause covers, tokens joined by single spaces.
pub fn clause_text(clause: &Clause) -> String {
    clause
        .tokens()
        .iter()
        .map(Token::text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The source text between a clause's first and last character.
pub fn source_of(sql: &str, begin: usize, end: usize) -> String {
    sql.chars().skip(begin).take(end - begin + 1).collect()
}
