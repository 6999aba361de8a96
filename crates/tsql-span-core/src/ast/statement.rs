//! Statements: clause containers, one struct per statement kind.

use super::clause::Clause;
use crate::lexer::{Span, Token};

/// Positions shared by every statement kind, derived from its clauses.
macro_rules! element_positions {
    ($($statement:ty),+ $(,)?) => {
        $(
            impl $statement {
                /// Every token of the statement in source order, nested
                /// statements included.
                pub fn tokens(&self) -> impl Iterator<Item = &Token> {
                    self.clauses()
                        .into_iter()
                        .flat_map(|clause| clause.tokens().iter())
                }

                /// 0-based character offset of the first token.
                #[must_use]
                pub fn begin_position(&self) -> usize {
                    self.clauses().first().map_or(0, |clause| clause.begin_position())
                }

                /// 0-based character offset of the last character.
                #[must_use]
                pub fn end_position(&self) -> usize {
                    self.clauses().last().map_or(0, |clause| clause.end_position())
                }

                /// Number of characters covered, inclusive on both ends.
                #[must_use]
                pub fn length(&self) -> usize {
                    self.end_position() - self.begin_position() + 1
                }

                #[must_use]
                pub fn span(&self) -> Span {
                    Span::new(self.begin_position(), self.end_position())
                }
            }
        )+
    };
}

/// A `UNION [ALL]`, `EXCEPT` or `INTERSECT` branch of a SELECT.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SetOperation {
    /// The operator keyword(s).
    pub operator: Clause,
    /// The right-hand query. A bare operand holds SELECT through HAVING.
    /// A parenthesised operand is a full query: the operator clause ends
    /// with its `(` and its last clause ends with the matching `)`.
    pub query: SelectStatement,
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectStatement {
    pub with: Option<Clause>,
    pub select: Clause,
    pub into: Option<Clause>,
    pub from: Option<Clause>,
    pub where_clause: Option<Clause>,
    pub group_by: Option<Clause>,
    pub having: Option<Clause>,
    pub set_operations: Vec<SetOperation>,
    pub order_by: Option<Clause>,
    pub for_clause: Option<Clause>,
    pub option: Option<Clause>,
}

impl SelectStatement {
    /// The present clauses in source order, set operation queries
    /// flattened in.
    #[must_use]
    pub fn clauses(&self) -> Vec<&Clause> {
        let mut clauses: Vec<&Clause> = self.with.iter().collect();
        clauses.push(&self.select);
        clauses.extend(
            [
                &self.into,
                &self.from,
                &self.where_clause,
                &self.group_by,
                &self.having,
            ]
            .into_iter()
            .flatten(),
        );
        for operation in &self.set_operations {
            clauses.push(&operation.operator);
            clauses.extend(operation.query.clauses());
        }
        clauses.extend(
            [&self.order_by, &self.for_clause, &self.option]
                .into_iter()
                .flatten(),
        );
        clauses
    }

    /// The clause that ends the statement in source order.
    pub(crate) fn last_clause_mut(&mut self) -> &mut Clause {
        if let Some(clause) = self
            .option
            .as_mut()
            .or(self.for_clause.as_mut())
            .or(self.order_by.as_mut())
        {
            return clause;
        }
        if let Some(operation) = self.set_operations.last_mut() {
            return operation.query.last_clause_mut();
        }
        self.having
            .as_mut()
            .or(self.group_by.as_mut())
            .or(self.where_clause.as_mut())
            .or(self.from.as_mut())
            .or(self.into.as_mut())
            .unwrap_or(&mut self.select)
    }
}

/// An INSERT statement. Exactly one of the four sources is present.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InsertStatement {
    pub with: Option<Clause>,
    pub insert: Clause,
    pub output: Option<Clause>,
    pub values: Option<Clause>,
    pub select: Option<Box<SelectStatement>>,
    pub default_values: Option<Clause>,
    pub execute: Option<Clause>,
}

impl InsertStatement {
    /// The present clauses in source order, the SELECT source flattened in.
    #[must_use]
    pub fn clauses(&self) -> Vec<&Clause> {
        let mut clauses: Vec<&Clause> = self.with.iter().collect();
        clauses.push(&self.insert);
        clauses.extend(&self.output);
        clauses.extend(&self.values);
        if let Some(select) = &self.select {
            clauses.extend(select.clauses());
        }
        clauses.extend(&self.default_values);
        clauses.extend(&self.execute);
        clauses
    }
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UpdateStatement {
    pub with: Option<Clause>,
    pub update: Clause,
    pub set: Clause,
    pub output: Option<Clause>,
    pub from: Option<Clause>,
    pub where_clause: Option<Clause>,
    pub option: Option<Clause>,
}

impl UpdateStatement {
    #[must_use]
    pub fn clauses(&self) -> Vec<&Clause> {
        let mut clauses: Vec<&Clause> = self.with.iter().collect();
        clauses.push(&self.update);
        clauses.push(&self.set);
        clauses.extend(
            [&self.output, &self.from, &self.where_clause, &self.option]
                .into_iter()
                .flatten(),
        );
        clauses
    }
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeleteStatement {
    pub with: Option<Clause>,
    pub delete: Clause,
    pub output: Option<Clause>,
    pub from: Option<Clause>,
    pub where_clause: Option<Clause>,
    pub option: Option<Clause>,
}

impl DeleteStatement {
    #[must_use]
    pub fn clauses(&self) -> Vec<&Clause> {
        let mut clauses: Vec<&Clause> = self.with.iter().collect();
        clauses.push(&self.delete);
        clauses.extend(
            [&self.output, &self.from, &self.where_clause, &self.option]
                .into_iter()
                .flatten(),
        );
        clauses
    }
}

/// A MERGE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MergeStatement {
    pub with: Option<Clause>,
    pub merge: Clause,
    pub using: Clause,
    pub on: Clause,
    /// The `WHEN ... THEN ...` branches, never empty.
    pub when: Vec<Clause>,
    pub output: Option<Clause>,
    pub option: Option<Clause>,
}

impl MergeStatement {
    #[must_use]
    pub fn clauses(&self) -> Vec<&Clause> {
        let mut clauses: Vec<&Clause> = self.with.iter().collect();
        clauses.extend([&self.merge, &self.using, &self.on]);
        clauses.extend(&self.when);
        clauses.extend([&self.output, &self.option].into_iter().flatten());
        clauses
    }
}

element_positions!(
    SelectStatement,
    InsertStatement,
    UpdateStatement,
    DeleteStatement,
    MergeStatement,
);

/// The kind of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    Merge,
}

impl StatementKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Merge => "MERGE",
        }
    }
}

impl core::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A top-level statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Statement {
    Select(SelectStatement),
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
    Merge(MergeStatement),
}

impl Statement {
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        match self {
            Self::Select(_) => StatementKind::Select,
            Self::Insert(_) => StatementKind::Insert,
            Self::Update(_) => StatementKind::Update,
            Self::Delete(_) => StatementKind::Delete,
            Self::Merge(_) => StatementKind::Merge,
        }
    }

    #[must_use]
    pub const fn as_select(&self) -> Option<&SelectStatement> {
        match self {
            Self::Select(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_insert(&self) -> Option<&InsertStatement> {
        match self {
            Self::Insert(i) => Some(i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_update(&self) -> Option<&UpdateStatement> {
        match self {
            Self::Update(u) => Some(u),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_delete(&self) -> Option<&DeleteStatement> {
        match self {
            Self::Delete(d) => Some(d),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_merge(&self) -> Option<&MergeStatement> {
        match self {
            Self::Merge(m) => Some(m),
            _ => None,
        }
    }

    /// The present clauses in source order.
    #[must_use]
    pub fn clauses(&self) -> Vec<&Clause> {
        match self {
            Self::Select(s) => s.clauses(),
            Self::Insert(i) => i.clauses(),
            Self::Update(u) => u.clauses(),
            Self::Delete(d) => d.clauses(),
            Self::Merge(m) => m.clauses(),
        }
    }

    /// Every token of the statement in source order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.clauses()
            .into_iter()
            .flat_map(|clause| clause.tokens().iter())
    }

    #[must_use]
    pub fn begin_position(&self) -> usize {
        match self {
            Self::Select(s) => s.begin_position(),
            Self::Insert(i) => i.begin_position(),
            Self::Update(u) => u.begin_position(),
            Self::Delete(d) => d.begin_position(),
            Self::Merge(m) => m.begin_position(),
        }
    }

    #[must_use]
    pub fn end_position(&self) -> usize {
        match self {
            Self::Select(s) => s.end_position(),
            Self::Insert(i) => i.end_position(),
            Self::Update(u) => u.end_position(),
            Self::Delete(d) => d.end_position(),
            Self::Merge(m) => m.end_position(),
        }
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.end_position() - self.begin_position() + 1
    }

    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.begin_position(), self.end_position())
    }
}
