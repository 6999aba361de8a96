//! Clauses: named, ordered token spans.

use crate::lexer::{Span, Token};

/// The name of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ClauseKind {
    /// `WITH cte AS (...)`
    With,
    Select,
    Into,
    From,
    Where,
    GroupBy,
    Having,
    OrderBy,
    Option,
    For,
    /// `UNION [ALL]`, `EXCEPT` or `INTERSECT`.
    SetOperator,
    Insert,
    Values,
    /// `DEFAULT VALUES`
    DefaultValues,
    Output,
    /// `EXEC` or `EXECUTE`.
    Execute,
    Update,
    Set,
    Delete,
    Merge,
    Using,
    On,
    /// One `WHEN [NOT] MATCHED ... THEN ...` branch of a MERGE.
    When,
}

impl ClauseKind {
    /// Returns the clause name as written in SQL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::With => "WITH",
            Self::Select => "SELECT",
            Self::Into => "INTO",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::GroupBy => "GROUP BY",
            Self::Having => "HAVING",
            Self::OrderBy => "ORDER BY",
            Self::Option => "OPTION",
            Self::For => "FOR",
            Self::SetOperator => "SET OPERATOR",
            Self::Insert => "INSERT",
            Self::Values => "VALUES",
            Self::DefaultValues => "DEFAULT VALUES",
            Self::Output => "OUTPUT",
            Self::Execute => "EXECUTE",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Delete => "DELETE",
            Self::Merge => "MERGE",
            Self::Using => "USING",
            Self::On => "ON",
            Self::When => "WHEN",
        }
    }
}

impl core::fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A named clause and every token it covers, in source order.
///
/// The token sequence is never empty: it starts with the clause's leading
/// keyword and includes nested subqueries, comments and (when requested)
/// whitespace verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Clause {
    kind: ClauseKind,
    tokens: Vec<Token>,
}

impl Clause {
    pub(crate) fn new(kind: ClauseKind, tokens: Vec<Token>) -> Self {
        debug_assert!(!tokens.is_empty(), "a clause holds at least one token");
        Self { kind, tokens }
    }

    /// Appends tokens that belong after the clause's current end.
    pub(crate) fn push_tokens(&mut self, tokens: impl IntoIterator<Item = Token>) {
        self.tokens.extend(tokens);
    }

    /// The name of the clause.
    #[must_use]
    pub const fn kind(&self) -> ClauseKind {
        self.kind
    }

    /// The tokens of the clause.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// 0-based character offset of the first token.
    #[must_use]
    pub fn begin_position(&self) -> usize {
        self.tokens.first().map_or(0, Token::begin_position)
    }

    /// 0-based character offset of the last character of the last token.
    #[must_use]
    pub fn end_position(&self) -> usize {
        self.tokens.last().map_or(0, Token::end_position)
    }

    /// Number of characters from the first to the last token, inclusive.
    #[must_use]
    pub fn length(&self) -> usize {
        self.end_position() - self.begin_position() + 1
    }

    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.begin_position(), self.end_position())
    }

    /// Iterates over the tokens that carry syntax.
    pub fn significant_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| !token.is_trivia())
    }

    /// The `AND`/`OR` tokens of the clause, nested ones included.
    pub fn connectors(&self) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .filter(|token| token.as_connector().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Keyword, TokenKind};

    fn token(kind: TokenKind, begin: usize, text: &str) -> Token {
        Token::new(kind, begin, text)
    }

    #[test]
    fn test_positions_follow_first_and_last_token() {
        let clause = Clause::new(
            ClauseKind::Where,
            vec![
                token(TokenKind::Keyword(Keyword::Where), 10, "WHERE"),
                token(TokenKind::Whitespace, 15, " "),
                token(TokenKind::Identifier, 16, "a"),
            ],
        );
        assert_eq!(clause.begin_position(), 10);
        assert_eq!(clause.end_position(), 16);
        assert_eq!(clause.length(), 7);
        assert_eq!(clause.span(), Span::new(10, 16));
        assert_eq!(clause.significant_tokens().count(), 2);
    }

    #[test]
    fn test_connectors() {
        let clause = Clause::new(
            ClauseKind::Having,
            vec![
                token(TokenKind::Keyword(Keyword::Having), 0, "HAVING"),
                token(TokenKind::Identifier, 7, "a"),
                token(TokenKind::Connector(Keyword::And), 9, "AND"),
                token(TokenKind::Identifier, 13, "b"),
            ],
        );
        assert_eq!(clause.connectors().count(), 1);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ClauseKind::GroupBy.to_string(), "GROUP BY");
        assert_eq!(ClauseKind::DefaultValues.as_str(), "DEFAULT VALUES");
    }
}
