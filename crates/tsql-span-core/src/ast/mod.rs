//! Parsed elements: clauses and the statements built from them.
//!
//! Elements never decompose their tokens further. A clause is the exact,
//! ordered token span of one named part of a statement.

mod clause;
mod statement;

pub use clause::{Clause, ClauseKind};
pub use statement::{
    DeleteStatement, InsertStatement, MergeStatement, SelectStatement, SetOperation, Statement,
    StatementKind, UpdateStatement,
};
