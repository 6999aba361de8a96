//! Splits a WHERE clause into field/operator/value predicates.

use serde::Serialize;
use tsql_span_core::{Clause, Token, TokenType};

/// One comparison of a WHERE clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Predicate {
    /// The `AND`/`OR` joining this predicate to the previous one.
    pub connector: Option<String>,
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl Predicate {
    fn is_empty(&self) -> bool {
        self.field.is_empty() && self.operator.is_empty() && self.value.is_empty()
    }
}

/// Splits `clause` at its Connector tokens.
///
/// Identifiers, system identifiers and punctuation accumulate into the
/// field, operators into the operator, and everything else into the value.
/// The clause's leading keyword and trivia are skipped.
#[must_use]
pub fn split(clause: &Clause) -> Vec<Predicate> {
    let mut predicates = Vec::new();
    let mut current = Predicate::default();

    for token in clause.significant_tokens().skip(1) {
        if let Some(connector) = token.as_connector() {
            predicates.push(core::mem::replace(
                &mut current,
                Predicate {
                    connector: Some(connector.as_str().to_string()),
                    ..Predicate::default()
                },
            ));
            continue;
        }
        let part = match token.token_type() {
            TokenType::Identifier | TokenType::SystemIdentifier | TokenType::Character => {
                &mut current.field
            }
            TokenType::Operator => &mut current.operator,
            _ => &mut current.value,
        };
        append(part, token);
    }

    if !current.is_empty() || current.connector.is_some() {
        predicates.push(current);
    }
    predicates
}

fn append(part: &mut String, token: &Token) {
    if !part.is_empty() {
        part.push(' ');
    }
    part.push_str(token.text());
}
