//! Clause parsers.
//!
//! Every clause shares one scanner. A [`ClauseRule`] names the clause, its
//! leading keyword(s) and the keywords that may appear inside its body.
//! At parenthesis level 0 and outside any `CASE ... END`, any other keyword
//! ends the clause without being consumed.

use tracing::trace;

use super::error::ParseError;
use super::statement::Parser;
use crate::ast::{Clause, ClauseKind};
use crate::lexer::{Character, Keyword, Token, TokenKind};

/// Keywords legal inside any predicate or expression.
const EXPRESSION: &[Keyword] = &[
    Keyword::Null,
    Keyword::Case,
    Keyword::When,
    Keyword::Then,
    Keyword::Else,
    Keyword::End,
    Keyword::And,
    Keyword::Or,
    Keyword::Between,
    Keyword::Exists,
    Keyword::In,
    Keyword::Is,
    Keyword::Not,
    Keyword::Like,
];

/// Reserved words that are also built-in functions.
const FUNCTIONS: &[Keyword] = &[
    Keyword::Coalesce,
    Keyword::Convert,
    Keyword::Nullif,
    Keyword::TryConvert,
    Keyword::CurrentTimestamp,
    Keyword::CurrentUser,
    Keyword::SessionUser,
    Keyword::SystemUser,
    Keyword::User,
    Keyword::Left,
    Keyword::Right,
];

/// Quantifiers, `LIKE ... ESCAPE` and full-text predicates.
const PREDICATES: &[Keyword] = &[
    Keyword::All,
    Keyword::Any,
    Keyword::Some,
    Keyword::Escape,
    Keyword::Contains,
    Keyword::Freetext,
];

/// How one kind of clause starts and what it may contain.
pub(super) struct ClauseRule {
    kind: ClauseKind,
    /// Any of these starts the clause.
    leading: &'static [Keyword],
    /// A keyword that must follow the leading one (`GROUP BY`).
    second: Option<Keyword>,
    /// Keyword groups legal inside the body.
    allowed: &'static [&'static [Keyword]],
    /// Keywords legal only until the first identifier at level 0
    /// (`DELETE FROM target`).
    allowed_before_target: &'static [Keyword],
    /// The body holds only permitted keywords and trivia (`UNION ALL`).
    keywords_only: bool,
}

impl ClauseRule {
    const fn new(kind: ClauseKind, leading: &'static [Keyword]) -> Self {
        Self {
            kind,
            leading,
            second: None,
            allowed: &[],
            allowed_before_target: &[],
            keywords_only: false,
        }
    }

    const fn then(mut self, second: Keyword) -> Self {
        self.second = Some(second);
        self
    }

    const fn allow(mut self, allowed: &'static [&'static [Keyword]]) -> Self {
        self.allowed = allowed;
        self
    }

    const fn allow_before_target(mut self, allowed: &'static [Keyword]) -> Self {
        self.allowed_before_target = allowed;
        self
    }

    const fn keywords_only(mut self) -> Self {
        self.keywords_only = true;
        self
    }

    pub(super) const fn leading(&self) -> &'static [Keyword] {
        self.leading
    }

    fn permits(&self, keyword: Keyword, seen_target: bool) -> bool {
        self.allowed.iter().any(|group| group.contains(&keyword))
            || (!seen_target && self.allowed_before_target.contains(&keyword))
    }

    fn expected(&self) -> String {
        self.leading
            .iter()
            .map(Keyword::as_str)
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

pub(super) const WITH: ClauseRule =
    ClauseRule::new(ClauseKind::With, &[Keyword::With]).allow(&[&[Keyword::As]]);

pub(super) const SELECT: ClauseRule =
    ClauseRule::new(ClauseKind::Select, &[Keyword::Select]).allow(&[
        EXPRESSION,
        FUNCTIONS,
        &[
            Keyword::All,
            Keyword::Distinct,
            Keyword::Top,
            Keyword::Percent,
            Keyword::With,
            Keyword::As,
            Keyword::Collate,
            Keyword::Identity,
            Keyword::Over,
        ],
    ]);

pub(super) const INTO: ClauseRule = ClauseRule::new(ClauseKind::Into, &[Keyword::Into]);

pub(super) const FROM: ClauseRule = ClauseRule::new(ClauseKind::From, &[Keyword::From]).allow(&[
    EXPRESSION,
    FUNCTIONS,
    PREDICATES,
    &[
        Keyword::As,
        Keyword::Join,
        Keyword::Inner,
        Keyword::Outer,
        Keyword::Full,
        Keyword::Cross,
        Keyword::On,
        Keyword::Pivot,
        Keyword::Unpivot,
        Keyword::Tablesample,
        Keyword::With,
    ],
]);

pub(super) const WHERE: ClauseRule = ClauseRule::new(ClauseKind::Where, &[Keyword::Where])
    .allow(&[
        EXPRESSION,
        FUNCTIONS,
        PREDICATES,
        &[Keyword::Current, Keyword::Of],
    ]);

pub(super) const GROUP_BY: ClauseRule = ClauseRule::new(ClauseKind::GroupBy, &[Keyword::Group])
    .then(Keyword::By)
    .allow(&[EXPRESSION, FUNCTIONS, &[Keyword::All, Keyword::With]]);

pub(super) const HAVING: ClauseRule =
    ClauseRule::new(ClauseKind::Having, &[Keyword::Having]).allow(&[EXPRESSION]);

pub(super) const ORDER_BY: ClauseRule = ClauseRule::new(ClauseKind::OrderBy, &[Keyword::Order])
    .then(Keyword::By)
    .allow(&[
        EXPRESSION,
        FUNCTIONS,
        &[Keyword::Asc, Keyword::Desc, Keyword::Collate, Keyword::Fetch],
    ]);

pub(super) const OPTION: ClauseRule = ClauseRule::new(ClauseKind::Option, &[Keyword::Option]);

pub(super) const FOR: ClauseRule =
    ClauseRule::new(ClauseKind::For, &[Keyword::For]).allow(&[&[Keyword::Browse]]);

pub(super) const SET_OPERATOR: ClauseRule = ClauseRule::new(
    ClauseKind::SetOperator,
    &[Keyword::Union, Keyword::Except, Keyword::Intersect],
)
.allow(&[&[Keyword::All]])
.keywords_only();

pub(super) const INSERT: ClauseRule = ClauseRule::new(ClauseKind::Insert, &[Keyword::Insert])
    .allow(&[&[
        Keyword::Top,
        Keyword::Percent,
        Keyword::Into,
        Keyword::With,
    ]]);

pub(super) const VALUES: ClauseRule = ClauseRule::new(ClauseKind::Values, &[Keyword::Values])
    .allow(&[EXPRESSION, FUNCTIONS, &[Keyword::Default]]);

pub(super) const DEFAULT_VALUES: ClauseRule =
    ClauseRule::new(ClauseKind::DefaultValues, &[Keyword::Default]).then(Keyword::Values);

pub(super) const OUTPUT: ClauseRule = ClauseRule::new(ClauseKind::Output, &[Keyword::Output])
    .allow(&[EXPRESSION, FUNCTIONS, &[Keyword::Into, Keyword::As]]);

pub(super) const EXECUTE: ClauseRule =
    ClauseRule::new(ClauseKind::Execute, &[Keyword::Exec, Keyword::Execute]).allow(&[
        EXPRESSION,
        FUNCTIONS,
        &[Keyword::Default, Keyword::Output],
    ]);

pub(super) const UPDATE: ClauseRule = ClauseRule::new(ClauseKind::Update, &[Keyword::Update])
    .allow(&[&[Keyword::Top, Keyword::Percent, Keyword::With]]);

pub(super) const SET: ClauseRule = ClauseRule::new(ClauseKind::Set, &[Keyword::Set])
    .allow(&[
        EXPRESSION,
        FUNCTIONS,
        PREDICATES,
        &[Keyword::Default, Keyword::Collate],
    ]);

pub(super) const DELETE: ClauseRule = ClauseRule::new(ClauseKind::Delete, &[Keyword::Delete])
    .allow(&[&[Keyword::Top, Keyword::Percent, Keyword::With]])
    .allow_before_target(&[Keyword::From]);

pub(super) const MERGE: ClauseRule = ClauseRule::new(ClauseKind::Merge, &[Keyword::Merge])
    .allow(&[&[
        Keyword::Top,
        Keyword::Percent,
        Keyword::Into,
        Keyword::As,
        Keyword::With,
    ]]);

pub(super) const USING: ClauseRule =
    ClauseRule::new(ClauseKind::Using, &[Keyword::Using]).allow(&[&[Keyword::As]]);

pub(super) const ON: ClauseRule = ClauseRule::new(ClauseKind::On, &[Keyword::On]).allow(&[
    &[
        Keyword::Null,
        Keyword::Case,
        Keyword::End,
        Keyword::And,
        Keyword::Or,
        Keyword::Between,
        Keyword::Exists,
        Keyword::In,
        Keyword::Is,
        Keyword::Not,
        Keyword::Like,
    ],
    FUNCTIONS,
    PREDICATES,
]);

pub(super) const WHEN: ClauseRule = ClauseRule::new(ClauseKind::When, &[Keyword::When]).allow(&[
    &[
        Keyword::Not,
        Keyword::Matched,
        Keyword::And,
        Keyword::Or,
        Keyword::By,
        Keyword::Then,
        Keyword::Update,
        Keyword::Set,
        Keyword::Delete,
        Keyword::Insert,
        Keyword::Values,
        Keyword::Default,
        Keyword::Null,
        Keyword::Case,
        Keyword::End,
        Keyword::Is,
        Keyword::In,
        Keyword::Like,
        Keyword::Between,
        Keyword::Exists,
    ],
    FUNCTIONS,
    PREDICATES,
]);

impl Parser<'_> {
    /// Parses one clause starting at the cursor.
    ///
    /// `depth` is the subquery depth of the enclosing statement; a
    /// parenthesised `SELECT` inside the clause is parsed one level deeper
    /// and its tokens become part of this clause.
    pub(super) fn parse_clause(
        &mut self,
        rule: &ClauseRule,
        depth: usize,
    ) -> Result<Clause, ParseError> {
        let mut tokens = Vec::new();
        self.expect_keyword_into(rule.leading, &rule.expected(), &mut tokens)?;
        if let Some(second) = rule.second {
            self.cursor.collect_trivia(&mut tokens);
            self.expect_keyword_into(&[second], second.as_str(), &mut tokens)?;
        }

        let mut nesting = 0_usize;
        let mut case_depth = 0_usize;
        let mut seen_target = false;

        while let Some(kind) = self.cursor.current().map(Token::kind) {
            if rule.keywords_only {
                let permitted = match kind {
                    TokenKind::Keyword(keyword) => rule.permits(keyword, seen_target),
                    _ => self.cursor.current().is_some_and(Token::is_trivia),
                };
                if !permitted {
                    break;
                }
            }
            match kind {
                TokenKind::Character(Character::Semicolon) => break,
                TokenKind::Character(Character::CloseParenthesis) => {
                    if nesting == 0 {
                        break;
                    }
                    nesting -= 1;
                }
                TokenKind::Character(Character::OpenParenthesis) => {
                    tokens.extend(self.cursor.advance());
                    self.cursor.collect_trivia(&mut tokens);
                    if self.cursor.check_keyword(Keyword::Select) {
                        let subquery = self.parse_subquery(depth)?;
                        tokens.extend(subquery.tokens().cloned());
                        if self.cursor.check_character(Character::CloseParenthesis) {
                            tokens.extend(self.cursor.advance());
                            continue;
                        }
                    }
                    nesting += 1;
                    continue;
                }
                TokenKind::Keyword(keyword) => {
                    if nesting == 0 && case_depth == 0 && !rule.permits(keyword, seen_target) {
                        break;
                    }
                    match keyword {
                        Keyword::Case => case_depth += 1,
                        Keyword::End => case_depth = case_depth.saturating_sub(1),
                        _ => {}
                    }
                }
                TokenKind::Identifier | TokenKind::IncompleteIdentifier | TokenKind::Variable
                    if nesting == 0 =>
                {
                    seen_target = true;
                }
                _ => {}
            }
            tokens.extend(self.cursor.advance());
        }

        let clause = Clause::new(rule.kind, tokens);
        trace!(
            clause = %clause.kind(),
            begin = clause.begin_position(),
            end = clause.end_position(),
            tokens = clause.tokens().len(),
            "sealed clause"
        );
        Ok(clause)
    }

    /// Parses the clause if the cursor is on one of its leading keywords.
    pub(super) fn parse_optional_clause(
        &mut self,
        rule: &ClauseRule,
        depth: usize,
    ) -> Result<Option<Clause>, ParseError> {
        if self.cursor.check_any_keyword(rule.leading()) {
            self.parse_clause(rule, depth).map(Some)
        } else {
            Ok(None)
        }
    }
}
