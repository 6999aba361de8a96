//! T-SQL statement parser.
//!
//! A hand-written recursive-descent parser that groups tokens into clauses
//! and clauses into statements, recursing into parenthesised subqueries.

mod clause;
mod cursor;
mod error;
mod reader;
mod statement;

pub use cursor::TokenCursor;
pub use error::ParseError;
pub use reader::StatementReader;
pub use statement::Parser;
