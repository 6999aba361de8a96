//! A forward-only cursor over the token stream.

use crate::lexer::{Character, Keyword, Token, Tokenizer};
use crate::options::Options;

/// Holds the current token and pulls the next one from the tokenizer on
/// demand. The cursor owns its tokenizer.
pub struct TokenCursor<'a> {
    tokenizer: Tokenizer<'a>,
    current: Option<Token>,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor positioned on the first token of `input`.
    #[must_use]
    pub fn new(input: &'a str, options: &Options) -> Self {
        let mut tokenizer = Tokenizer::new(input, options);
        let current = tokenizer.next();
        Self { tokenizer, current }
    }

    /// The token under the cursor, `None` at end of input.
    #[must_use]
    pub const fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Takes the current token and moves to the next one.
    pub fn advance(&mut self) -> Option<Token> {
        let next = self.tokenizer.next();
        core::mem::replace(&mut self.current, next)
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Returns true if the current token is the keyword.
    #[must_use]
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current.as_ref().is_some_and(|t| t.is_keyword(keyword))
    }

    /// Returns true if the current token is one of the keywords.
    #[must_use]
    pub fn check_any_keyword(&self, keywords: &[Keyword]) -> bool {
        keywords.iter().any(|&kw| self.check_keyword(kw))
    }

    /// Returns true if the current token is the punctuation character.
    #[must_use]
    pub fn check_character(&self, character: Character) -> bool {
        self.current
            .as_ref()
            .is_some_and(|t| t.is_character(character))
    }

    /// Moves whitespace and comment tokens into `tokens` until a
    /// significant token or end of input.
    pub fn collect_trivia(&mut self, tokens: &mut Vec<Token>) {
        while self.current.as_ref().is_some_and(Token::is_trivia) {
            tokens.extend(self.advance());
        }
    }

    /// Drops whitespace, comment and `;` tokens.
    pub fn skip_noise(&mut self) {
        while self
            .current
            .as_ref()
            .is_some_and(|t| t.is_trivia() || t.is_character(Character::Semicolon))
        {
            self.advance();
        }
    }
}
