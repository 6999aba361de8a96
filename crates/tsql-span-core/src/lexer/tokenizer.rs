//! T-SQL tokenizer: a maximal-munch state machine over a
//! [`CharacterReader`].

use tracing::trace;

use super::classify::classify;
use super::keywords::is_currency_symbol;
use super::{CharacterReader, Token};
use crate::options::Options;

/// Produces one classified token per [`move_next`](Self::move_next) call.
///
/// Lexing never fails. Unterminated strings, comments and delimited
/// identifiers come back as `Incomplete*` tokens, and unknown shapes fall
/// back to identifiers.
pub struct Tokenizer<'a> {
    reader: CharacterReader<'a>,
    /// The lexeme being accumulated.
    lexeme: String,
    current: Option<Token>,
    has_more: bool,
    use_quoted_identifiers: bool,
    include_whitespace: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `input`.
    #[must_use]
    pub fn new(input: &'a str, options: &Options) -> Self {
        Self {
            reader: CharacterReader::new(input),
            lexeme: String::new(),
            current: None,
            has_more: true,
            use_quoted_identifiers: options.use_quoted_identifiers,
            include_whitespace: options.include_whitespace,
        }
    }

    /// Advances to the next token. Returns false once the input is
    /// exhausted, after which `current` is `None`.
    pub fn move_next(&mut self) -> bool {
        self.current = None;
        if !self.has_more {
            return false;
        }

        self.has_more = if self.include_whitespace {
            self.reader.read()
        } else {
            self.reader.read_next_non_whitespace()
        };
        if self.has_more {
            let token = self.scan();
            trace!(
                token_type = %token.token_type(),
                position = token.begin_position(),
                text = token.text(),
                "token"
            );
            self.current = Some(token);
        }
        self.has_more
    }

    /// The token produced by the last successful `move_next`.
    #[must_use]
    pub const fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Scans one lexeme starting at the reader's current character and
    /// classifies it.
    fn scan(&mut self) -> Token {
        self.lexeme.clear();
        let begin_position = usize::try_from(self.reader.position()).unwrap_or_default();
        let first = self.reader.current();
        self.lexeme.push(first);

        if self.include_whitespace && first.is_whitespace() {
            while self.accept(char::is_whitespace) {}
        } else {
            self.dispatch(first);
        }

        classify(&self.lexeme, begin_position, self.use_quoted_identifiers)
    }

    /// Picks the sub-scanner for the leading character.
    fn dispatch(&mut self, first: char) {
        match first {
            ',' | ';' | '(' | ')' | '~' => {}
            '.' => {
                if self.accept(|c| c.is_ascii_digit()) {
                    self.scan_number(true);
                }
            }
            '-' => {
                if self.accept(|c| c == '-') {
                    self.scan_line_comment();
                } else {
                    self.accept(|c| c == '=');
                }
            }
            '/' => {
                if self.accept(|c| c == '*') {
                    self.scan_block_comment();
                } else {
                    self.accept(|c| c == '=');
                }
            }
            '<' => {
                self.accept(|c| c == '>' || c == '=');
            }
            '!' => {
                self.accept(|c| matches!(c, '=' | '<' | '>'));
            }
            '=' => {
                self.accept(|c| c == '*');
            }
            '&' | '|' | '^' | '+' | '*' | '%' | '>' => {
                self.accept(|c| c == '=');
            }
            ':' => {
                self.accept(|c| c == ':');
            }
            'N' => {
                if self.accept(|c| c == '\'') {
                    self.scan_quoted('\'');
                } else {
                    self.scan_word();
                }
            }
            '\'' | '"' => self.scan_quoted(first),
            '[' => self.scan_quoted(']'),
            '0' => {
                if self.accept(|c| c == 'x' || c == 'X') {
                    self.scan_binary();
                } else {
                    self.scan_number(false);
                }
            }
            '1'..='9' => self.scan_number(false),
            '$' => {
                if self.peek_is(|c| matches!(c, '+' | '-' | '.') || c.is_ascii_digit()) {
                    self.scan_money();
                } else {
                    self.scan_word();
                }
            }
            c if is_currency_symbol(c) => self.scan_money(),
            _ => self.scan_word(),
        }
    }

    /// Reads one character and keeps it if `pred` holds, otherwise puts it
    /// back. Returns whether the character was kept.
    fn accept(&mut self, pred: impl Fn(char) -> bool) -> bool {
        if !self.reader.read() {
            return false;
        }
        let c = self.reader.current();
        if pred(c) {
            self.lexeme.push(c);
            true
        } else {
            self.reader.putback();
            false
        }
    }

    /// Tests the next character without consuming it.
    fn peek_is(&mut self, pred: impl Fn(char) -> bool) -> bool {
        if !self.reader.read() {
            return false;
        }
        let matched = pred(self.reader.current());
        self.reader.putback();
        matched
    }

    /// `--` up to, not including, the line terminator.
    fn scan_line_comment(&mut self) {
        while self.accept(|c| c != '\r' && c != '\n') {}
    }

    /// `/* ... */` with nesting. Runs to end of input if the outermost
    /// comment never closes.
    fn scan_block_comment(&mut self) {
        let mut depth = 1_usize;
        let mut previous = None;
        while self.reader.read() {
            let c = self.reader.current();
            self.lexeme.push(c);
            match (previous, c) {
                (Some('/'), '*') => {
                    depth += 1;
                    previous = None;
                }
                (Some('*'), '/') => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                    previous = None;
                }
                _ => previous = Some(c),
            }
        }
    }

    /// Scans up to and including `closer`. A doubled closer is an escaped
    /// literal character and does not end the scan.
    fn scan_quoted(&mut self, closer: char) {
        loop {
            loop {
                if !self.reader.read() {
                    return;
                }
                let c = self.reader.current();
                self.lexeme.push(c);
                if c == closer {
                    break;
                }
            }
            if !self.accept(|c| c == closer) {
                return;
            }
        }
    }

    /// Hex digits after `0x`. A backslash followed by a line break continues
    /// the literal on the next line.
    fn scan_binary(&mut self) {
        loop {
            if self.accept(|c| c.is_ascii_hexdigit()) {
                continue;
            }
            if self.accept(|c| c == '\\') {
                self.accept(|c| c == '\r');
                self.accept(|c| c == '\n');
                continue;
            }
            return;
        }
    }

    /// Digits with at most one decimal point, then an optional exponent
    /// with an optional sign.
    fn scan_number(&mut self, found_period: bool) {
        self.scan_decimal_digits(found_period);
        if self.accept(|c| c == 'e' || c == 'E') {
            self.accept(|c| c == '+' || c == '-');
            while self.accept(|c| c.is_ascii_digit()) {}
        }
    }

    /// Currency symbol already consumed: optional sign, then digits with at
    /// most one decimal point. Digit grouping separators end the literal.
    fn scan_money(&mut self) {
        self.accept(|c| c == '+' || c == '-');
        self.scan_decimal_digits(false);
    }

    fn scan_decimal_digits(&mut self, mut found_period: bool) {
        loop {
            if self.accept(|c| c.is_ascii_digit()) {
                continue;
            }
            if !found_period && self.accept(|c| c == '.') {
                found_period = true;
                continue;
            }
            return;
        }
    }

    /// Everything else: accumulate until a terminator character.
    fn scan_word(&mut self) {
        while self.accept(|c| !is_word_terminator(c)) {}
    }
}

/// Characters that end an identifier-like run. `.` and quotes do not, and
/// neither does `$`, which T-SQL allows inside identifiers.
fn is_word_terminator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ',' | ';'
                | '('
                | ')'
                | '+'
                | '-'
                | '*'
                | '='
                | '/'
                | '<'
                | '>'
                | '!'
                | '%'
                | '^'
                | '&'
                | '|'
                | '~'
                | ':'
                | '['
                | '\\'
        )
        || (c != '$' && is_currency_symbol(c))
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.current.clone()
        } else {
            None
        }
    }
}
