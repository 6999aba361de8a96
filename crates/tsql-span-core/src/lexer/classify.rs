//! Maps a raw lexeme to a concrete token.

use super::keywords::{is_currency_symbol, is_system_identifier, is_system_variable};
use super::{Character, Keyword, Token, TokenKind};

/// Leading characters that make a lexeme an operator.
const OPERATOR_LEADS: &[char] = &[
    '=', '~', '-', '+', '*', '/', '<', '>', '!', '&', '|', '^', '%', ':',
];

/// Word operators, compared case-insensitively.
const OPERATOR_WORDS: &[&str] = &["LIKE", "NOT", "IS", "IN"];

/// Classifies `lexeme` starting at `begin_position`.
///
/// Never fails: anything that matches no rule is an identifier.
#[must_use]
pub fn classify(lexeme: &str, begin_position: usize, use_quoted_identifiers: bool) -> Token {
    Token::new(
        classify_kind(lexeme, use_quoted_identifiers),
        begin_position,
        lexeme,
    )
}

/// The rule table. The first matching rule wins.
fn classify_kind(lexeme: &str, use_quoted_identifiers: bool) -> TokenKind {
    let mut chars = lexeme.chars();
    let Some(first) = chars.next() else {
        return TokenKind::Identifier;
    };
    let second = chars.next();

    if first.is_whitespace() {
        return TokenKind::Whitespace;
    }
    if first == '@' {
        return if is_system_variable(lexeme) {
            TokenKind::SystemVariable
        } else {
            TokenKind::Variable
        };
    }
    if lexeme.starts_with("--") {
        return TokenKind::SingleLineComment;
    }
    if lexeme.starts_with("/*") {
        return if is_closed_comment(lexeme) {
            TokenKind::MultilineComment
        } else {
            TokenKind::IncompleteComment
        };
    }
    if first == '\'' || lexeme.starts_with("N'") {
        return quoted_string_kind(lexeme, '\'');
    }
    if first == '"' && !use_quoted_identifiers {
        return quoted_string_kind(lexeme, '"');
    }
    if first == '$' {
        return if second.is_some_and(char::is_alphabetic) {
            TokenKind::SystemColumnIdentifier
        } else {
            TokenKind::MoneyLiteral
        };
    }
    if is_currency_symbol(first) {
        return TokenKind::MoneyLiteral;
    }
    if first == '0' && matches!(second, Some('x' | 'X')) {
        return TokenKind::BinaryLiteral;
    }
    if first.is_ascii_digit() || (first == '.' && second.is_some_and(|c| c.is_ascii_digit())) {
        return TokenKind::NumericLiteral;
    }
    if OPERATOR_LEADS.contains(&first)
        || OPERATOR_WORDS
            .iter()
            .any(|word| lexeme.eq_ignore_ascii_case(word))
    {
        return TokenKind::Operator;
    }
    if let Some(character) = Character::from_text(lexeme) {
        return TokenKind::Character(character);
    }
    if lexeme.eq_ignore_ascii_case("AND") {
        return TokenKind::Connector(Keyword::And);
    }
    if lexeme.eq_ignore_ascii_case("OR") {
        return TokenKind::Connector(Keyword::Or);
    }
    if let Some(keyword) = Keyword::from_str(lexeme) {
        return TokenKind::Keyword(keyword);
    }
    if is_system_identifier(lexeme) {
        return TokenKind::SystemIdentifier;
    }

    // Inside brackets a literal `]` is doubled, so a closed bracket identifier
    // holds an odd number of them.
    let unclosed_bracket = first == '[' && lexeme.matches(']').count() % 2 == 0;
    let unclosed_quote =
        use_quoted_identifiers && first == '"' && lexeme.matches('"').count() % 2 == 1;
    if unclosed_bracket || unclosed_quote {
        TokenKind::IncompleteIdentifier
    } else {
        TokenKind::Identifier
    }
}

/// Replays the nesting count over the comment body. The comment is closed
/// only if the outermost `*/` ends the lexeme.
fn is_closed_comment(lexeme: &str) -> bool {
    let mut depth = 1_usize;
    let mut previous = None;
    let mut body = lexeme.chars().skip(2).peekable();
    while let Some(c) = body.next() {
        match (previous, c) {
            (Some('/'), '*') => {
                depth += 1;
                previous = None;
            }
            (Some('*'), '/') => {
                depth -= 1;
                if depth == 0 {
                    return body.peek().is_none();
                }
                previous = None;
            }
            _ => previous = Some(c),
        }
    }
    false
}

/// Doubled delimiters are escapes, so a properly closed literal always
/// contains an even number of delimiter characters.
fn quoted_string_kind(lexeme: &str, quote: char) -> TokenKind {
    if lexeme.matches(quote).count() % 2 == 0 {
        TokenKind::StringLiteral
    } else {
        TokenKind::IncompleteString
    }
}
