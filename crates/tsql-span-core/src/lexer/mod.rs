//! T-SQL lexer.
//!
//! A hand-written maximal-munch tokenizer over a one-character pushback
//! reader. Every lexeme is handed to [`classify`] to become a [`Token`].

mod classify;
mod keywords;
mod reader;
mod span;
mod token;
mod tokenizer;

pub use classify::classify;
pub use keywords::{is_currency_symbol, is_system_identifier, is_system_variable, Keyword};
pub use reader::CharacterReader;
pub use span::Span;
pub use token::{Character, Token, TokenKind, TokenType};
pub use tokenizer::Tokenizer;
