//! Round-trip and idempotence properties of the tokenizer, checked over a
//! fixed corpus of tricky inputs and over generated ones.

use tsql_span_core::{tokenize, Token};

const CORPUS: &[&str] = &[
    "",
    " ",
    "SELECT * FROM [dbo].[orders] WHERE id = 1;",
    "SELECT 'it''s', N'Zoë', \"q\"\"q\" FROM t",
    "/* a /* b */ c */ SELECT 1",
    "/* a /* b */",
    "-- line\r\nSELECT 1 -- trailing",
    "0x1A\\\r\n2B, 0xFF\\",
    "$1,234 €5.00 £ $IDENTITY $.5 $-1",
    "1.2.3 .5e-3 1e 0 0x",
    "a<>b!=c!<d!>e=*f+=g::h",
    "@@ROWCOUNT @v #tmp a$b",
    "'unterminated",
    "[unterminated",
    "\"unterminated",
    "x\\y\\\\z",
    "\t\u{3000}é\u{feff}",
    "SELECT CASE WHEN a IS NULL THEN 1 ELSE 0 END FROM t HAVING x IN (SELECT y)",
];

/// Fragments the generator glues together.
const FRAGMENTS: &[&str] = &[
    "SELECT", "from", " ", "\n", "\r\n", "\t", "'", "''", "\"", "[", "]", "--", "/*", "*/",
    "0x1F", "0", "\\", "$", "€", "1", ".", "5e-", "N'", "N", "@@", "@", "a", "(", ")", ",",
    ";", "<", ">", "=", "!", ":", "é", "*", "/", "-", "AND",
];

/// Deterministic xorshift64 so failures reproduce.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn next_range(&mut self, max: usize) -> usize {
        usize::try_from(self.next() % max as u64).unwrap()
    }
}

fn generated(count: usize) -> Vec<String> {
    let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
    (0..count)
        .map(|_| {
            let len = rng.next_range(24);
            (0..len)
                .map(|_| FRAGMENTS[rng.next_range(FRAGMENTS.len())])
                .collect()
        })
        .collect()
}

fn inputs() -> Vec<String> {
    CORPUS
        .iter()
        .map(|s| (*s).to_string())
        .chain(generated(500))
        .collect()
}

fn check_round_trip(sql: &str, quoted: bool) {
    let tokens = tokenize(sql, quoted, true);
    let rebuilt: String = tokens.iter().map(Token::text).collect();
    assert_eq!(rebuilt, sql, "Round trip failed for: {sql:?}");

    let mut expected_begin = 0;
    for token in &tokens {
        assert!(!token.text().is_empty(), "Empty token in: {sql:?}");
        assert_eq!(
            token.begin_position(),
            expected_begin,
            "Gap or overlap at {token} in: {sql:?}"
        );
        assert_eq!(
            token.end_position() - token.begin_position() + 1,
            token.length(),
            "Bad span for {token} in: {sql:?}"
        );
        expected_begin = token.end_position() + 1;
    }
    assert_eq!(expected_begin, sql.chars().count());
}

fn check_idempotent(sql: &str, quoted: bool) {
    for token in tokenize(sql, quoted, true) {
        let again = tokenize(token.text(), quoted, true);
        assert_eq!(again.len(), 1, "Re-lexing {token} from {sql:?} gave {again:?}");
        assert_eq!(again[0].token_type(), token.token_type(), "{token} in {sql:?}");
        assert_eq!(again[0].text(), token.text());
    }
}

#[test]
fn round_trip_reproduces_input() {
    for sql in inputs() {
        check_round_trip(&sql, false);
        check_round_trip(&sql, true);
    }
}

#[test]
fn tokens_relex_to_themselves() {
    for sql in inputs() {
        check_idempotent(&sql, false);
        check_idempotent(&sql, true);
    }
}

#[test]
fn skipping_whitespace_drops_only_whitespace() {
    for sql in inputs() {
        let with: Vec<Token> = tokenize(&sql, false, true)
            .into_iter()
            .filter(|t| !t.is_whitespace())
            .collect();
        let without = tokenize(&sql, false, false);
        assert_eq!(with, without, "Mismatch for: {sql:?}");
    }
}

#[test]
fn incomplete_tokens_only_at_end() {
    for sql in inputs() {
        let tokens = tokenize(&sql, false, true);
        if let Some(position) = tokens.iter().position(|t| !t.is_complete()) {
            assert_eq!(
                position,
                tokens.len() - 1,
                "Incomplete token before the end of: {sql:?}"
            );
        }
    }
}
