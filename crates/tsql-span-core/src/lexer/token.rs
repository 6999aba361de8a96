//! Token types for the T-SQL lexer.

use super::{Keyword, Span};

/// The fixed single-character punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Character {
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// (
    OpenParenthesis,
    /// )
    CloseParenthesis,
    /// .
    Period,
}

impl Character {
    /// Looks up the character token spelled by `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "," => Some(Self::Comma),
            ";" => Some(Self::Semicolon),
            "(" => Some(Self::OpenParenthesis),
            ")" => Some(Self::CloseParenthesis),
            "." => Some(Self::Period),
            _ => None,
        }
    }

    /// Returns the character as it is spelled in SQL.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
            Self::OpenParenthesis => '(',
            Self::CloseParenthesis => ')',
            Self::Period => '.',
        }
    }
}

/// The closed set of token tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenType {
    Whitespace,
    Character,
    Identifier,
    SystemIdentifier,
    Keyword,
    Connector,
    SingleLineComment,
    MultilineComment,
    IncompleteComment,
    Operator,
    Variable,
    SystemVariable,
    NumericLiteral,
    StringLiteral,
    IncompleteString,
    MoneyLiteral,
    BinaryLiteral,
    IncompleteIdentifier,
    SystemColumnIdentifier,
}

impl TokenType {
    /// Returns the tag name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Whitespace => "Whitespace",
            Self::Character => "Character",
            Self::Identifier => "Identifier",
            Self::SystemIdentifier => "SystemIdentifier",
            Self::Keyword => "Keyword",
            Self::Connector => "Connector",
            Self::SingleLineComment => "SingleLineComment",
            Self::MultilineComment => "MultilineComment",
            Self::IncompleteComment => "IncompleteComment",
            Self::Operator => "Operator",
            Self::Variable => "Variable",
            Self::SystemVariable => "SystemVariable",
            Self::NumericLiteral => "NumericLiteral",
            Self::StringLiteral => "StringLiteral",
            Self::IncompleteString => "IncompleteString",
            Self::MoneyLiteral => "MoneyLiteral",
            Self::BinaryLiteral => "BinaryLiteral",
            Self::IncompleteIdentifier => "IncompleteIdentifier",
            Self::SystemColumnIdentifier => "SystemColumnIdentifier",
        }
    }

    /// Returns true for every tag except the `Incomplete*` family.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        !matches!(
            self,
            Self::IncompleteComment | Self::IncompleteString | Self::IncompleteIdentifier
        )
    }
}

impl core::fmt::Display for TokenType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

/// The kind of token, carrying the resolved payload for the variants that
/// have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// A run of whitespace (only produced when whitespace is included).
    Whitespace,
    /// `,` `;` `(` `)` `.`
    Character(Character),
    /// A plain or delimited identifier (e.g. `orders`, `[order id]`).
    Identifier,
    /// A built-in function name (e.g. `GETDATE`).
    SystemIdentifier,
    /// A reserved keyword.
    Keyword(Keyword),
    /// `AND` / `OR`.
    Connector(Keyword),
    /// `-- ...`
    SingleLineComment,
    /// `/* ... */`
    MultilineComment,
    /// A block comment that never closed.
    IncompleteComment,
    /// `=`, `<>`, `+=`, `LIKE`, `IN`, ...
    Operator,
    /// `@name`
    Variable,
    /// `@@ROWCOUNT` and friends.
    SystemVariable,
    /// `42`, `1.5e-3`, `.5`
    NumericLiteral,
    /// `'text'`, `N'text'`, or `"text"` without quoted identifiers.
    StringLiteral,
    /// A string literal that never closed.
    IncompleteString,
    /// `$12.50`, `€3`
    MoneyLiteral,
    /// `0x1F2E`
    BinaryLiteral,
    /// A delimited identifier that never closed.
    IncompleteIdentifier,
    /// `$IDENTITY`, `$ROWGUID`, ...
    SystemColumnIdentifier,
}

impl TokenKind {
    /// Returns the tag of this kind.
    #[must_use]
    pub const fn token_type(&self) -> TokenType {
        match self {
            Self::Whitespace => TokenType::Whitespace,
            Self::Character(_) => TokenType::Character,
            Self::Identifier => TokenType::Identifier,
            Self::SystemIdentifier => TokenType::SystemIdentifier,
            Self::Keyword(_) => TokenType::Keyword,
            Self::Connector(_) => TokenType::Connector,
            Self::SingleLineComment => TokenType::SingleLineComment,
            Self::MultilineComment => TokenType::MultilineComment,
            Self::IncompleteComment => TokenType::IncompleteComment,
            Self::Operator => TokenType::Operator,
            Self::Variable => TokenType::Variable,
            Self::SystemVariable => TokenType::SystemVariable,
            Self::NumericLiteral => TokenType::NumericLiteral,
            Self::StringLiteral => TokenType::StringLiteral,
            Self::IncompleteString => TokenType::IncompleteString,
            Self::MoneyLiteral => TokenType::MoneyLiteral,
            Self::BinaryLiteral => TokenType::BinaryLiteral,
            Self::IncompleteIdentifier => TokenType::IncompleteIdentifier,
            Self::SystemColumnIdentifier => TokenType::SystemColumnIdentifier,
        }
    }
}

/// An immutable lexical unit: its kind, where it starts, and the exact
/// source text it covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    kind: TokenKind,
    begin_position: usize,
    text: String,
}

impl Token {
    /// Creates a new token. `text` must be non-empty.
    #[must_use]
    pub fn new(kind: TokenKind, begin_position: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            begin_position,
            text: text.into(),
        }
    }

    /// The kind of token, with its payload.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The tag of the token.
    #[must_use]
    pub const fn token_type(&self) -> TokenType {
        self.kind.token_type()
    }

    /// The verbatim source text, delimiters and escapes included.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 0-based character offset of the first character.
    #[must_use]
    pub const fn begin_position(&self) -> usize {
        self.begin_position
    }

    /// 0-based character offset of the last character.
    #[must_use]
    pub fn end_position(&self) -> usize {
        self.begin_position + self.length() - 1
    }

    /// Length of the text in characters.
    #[must_use]
    pub fn length(&self) -> usize {
        self.text.chars().count()
    }

    /// The inclusive span covered by the token.
    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.begin_position, self.end_position())
    }

    /// False for `Incomplete*` tokens.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.kind.token_type().is_complete()
    }

    /// Returns the keyword code for Keyword and Connector tokens.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) | TokenKind::Connector(kw) => Some(kw),
            _ => None,
        }
    }

    /// Returns the connector keyword (`AND`/`OR`) for Connector tokens.
    #[must_use]
    pub const fn as_connector(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Connector(kw) => Some(kw),
            _ => None,
        }
    }

    /// Returns the punctuation character for Character tokens.
    #[must_use]
    pub const fn as_character(&self) -> Option<Character> {
        match self.kind {
            TokenKind::Character(ch) => Some(ch),
            _ => None,
        }
    }

    /// Returns true if this is a Keyword token (not a Connector) for `keyword`.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.kind, TokenKind::Keyword(kw) if kw == keyword)
    }

    /// Returns true if this is the given punctuation character.
    #[must_use]
    pub fn is_character(&self, character: Character) -> bool {
        matches!(self.kind, TokenKind::Character(ch) if ch == character)
    }

    /// Returns true for Whitespace tokens.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace)
    }

    /// Returns true for any comment, complete or not.
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::SingleLineComment
                | TokenKind::MultilineComment
                | TokenKind::IncompleteComment
        )
    }

    /// Whitespace and comments carry no syntax.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        self.is_whitespace() || self.is_comment()
    }
}

/// Collapses `text` onto one line with C-style escapes.
fn write_escaped(f: &mut core::fmt::Formatter<'_>, text: &str) -> core::fmt::Result {
    use core::fmt::Write;

    for c in text.chars() {
        match c {
            '\'' => f.write_str("\\'")?,
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\0' => f.write_str("\\0")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            ' '..='~' => f.write_char(c)?,
            _ => write!(f, "\\u{{{:04x}}}", u32::from(c))?,
        }
    }
    Ok(())
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[Type: {}; Text: \"", self.token_type())?;
        write_escaped(f, &self.text)?;
        write!(
            f,
            "\"; BeginPosition: {}; Length: {}]",
            self.begin_position,
            self.length()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_count_characters() {
        let token = Token::new(TokenKind::StringLiteral, 4, "N'é'");
        assert_eq!(token.length(), 4);
        assert_eq!(token.end_position(), 7);
        assert_eq!(token.span(), Span::new(4, 7));
    }

    #[test]
    fn test_incomplete_kinds() {
        assert!(!Token::new(TokenKind::IncompleteString, 0, "'abc").is_complete());
        assert!(!Token::new(TokenKind::IncompleteComment, 0, "/* x").is_complete());
        assert!(!Token::new(TokenKind::IncompleteIdentifier, 0, "[abc").is_complete());
        assert!(Token::new(TokenKind::StringLiteral, 0, "'abc'").is_complete());
    }

    #[test]
    fn test_token_as_keyword() {
        let select = Token::new(TokenKind::Keyword(Keyword::Select), 0, "select");
        let and = Token::new(TokenKind::Connector(Keyword::And), 0, "AND");
        let plus = Token::new(TokenKind::Operator, 0, "+");
        assert_eq!(select.as_keyword(), Some(Keyword::Select));
        assert!(select.is_keyword(Keyword::Select));
        assert_eq!(and.as_keyword(), Some(Keyword::And));
        assert_eq!(and.as_connector(), Some(Keyword::And));
        assert!(!and.is_keyword(Keyword::And));
        assert_eq!(plus.as_keyword(), None);
    }

    #[test]
    fn test_token_as_character() {
        let comma = Token::new(TokenKind::Character(Character::Comma), 3, ",");
        assert_eq!(comma.as_character(), Some(Character::Comma));
        assert!(comma.is_character(Character::Comma));
        assert_eq!(Character::from_text(";"), Some(Character::Semicolon));
        assert_eq!(Character::from_text("~"), None);
    }

    #[test]
    fn test_trivia() {
        assert!(Token::new(TokenKind::Whitespace, 0, " ").is_trivia());
        assert!(Token::new(TokenKind::SingleLineComment, 0, "-- x").is_trivia());
        assert!(!Token::new(TokenKind::Identifier, 0, "x").is_trivia());
    }

    #[test]
    fn test_display_escapes_text() {
        let token = Token::new(TokenKind::SingleLineComment, 10, "-- it's\t");
        assert_eq!(
            token.to_string(),
            "[Type: SingleLineComment; Text: \"-- it\\'s\\t\"; BeginPosition: 10; Length: 8]"
        );
    }
}
