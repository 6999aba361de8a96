//! Plain-text rendering of tokens, statements and predicates.

use tsql_span_core::{Clause, Statement, Token};

use crate::predicates::Predicate;

/// One line per token: span, type and escaped text.
#[must_use]
pub fn token_line(token: &Token) -> String {
    format!(
        "{:>5}..={:<5} {:<22} {}",
        token.begin_position(),
        token.end_position(),
        token.token_type(),
        token.text().escape_debug()
    )
}

/// The significant tokens of a clause, separated by single spaces.
#[must_use]
pub fn clause_text(clause: &Clause) -> String {
    clause
        .significant_tokens()
        .map(Token::text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A statement header followed by one indented line per clause.
#[must_use]
pub fn statement_block(index: usize, statement: &Statement) -> String {
    let mut out = format!("#{index} {} {}\n", statement.kind(), statement.span());
    for clause in statement.clauses() {
        out.push_str(&format!(
            "  {:<14} {:<12} {}\n",
            clause.kind(),
            clause.span().to_string(),
            clause_text(clause).escape_debug()
        ));
    }
    out
}

#[must_use]
pub fn predicate_line(predicate: &Predicate) -> String {
    format!(
        "  {:<4} {} | {} | {}",
        predicate.connector.as_deref().unwrap_or(""),
        predicate.field,
        predicate.operator,
        predicate.value
    )
}
