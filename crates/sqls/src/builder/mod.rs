//! Structured SQL statement builders.
//!
//! ## Design
//!
//! - SQL is still explicit (strings), but common patterns are structured.
//! - Placeholders are managed automatically and numbered in call order, so
//!   `args[i]` always binds to placeholder `i + 1`.
//! - Builders are mutated through `&mut Self` chains and finalized with
//!   [`SqlBuilder::build`], which can run any number of times.

#[macro_use]
mod where_builder;

pub mod delete;
pub mod insert;
pub mod insert_many;
pub mod select;
pub mod traits;
pub mod update;

pub use delete::DeleteStmt;
pub use insert::{InsertStmt, KeyVal};
pub use insert_many::InsertManyStmt;
pub use select::SelectStmt;
pub use traits::{BuiltQuery, SqlBuilder};
pub use update::UpdateStmt;
pub use where_builder::WhereBuilder;

/// Create a SELECT builder for `table` with the process-wide dialect.
///
/// # Example
/// ```ignore
/// let q = sqls::select_from("users").and_eq("active", false).build()?;
/// assert_eq!(q.sql, "SELECT * FROM users WHERE active=$1");
/// ```
pub fn select_from(table: &str) -> SelectStmt {
    SelectStmt::new(table)
}

/// Create a single-row INSERT builder for `table`.
pub fn insert_into(table: &str) -> InsertStmt {
    InsertStmt::new(table)
}

/// Create a multi-row INSERT builder for `table`.
///
/// # Example
/// ```ignore
/// let q = sqls::insert_many_into("users")
///     .columns(&["name", "age"])
///     .add_row(sqls::values!["John", 30])
///     .add_row(sqls::values!["Jane", 25])
///     .build()?;
/// ```
pub fn insert_many_into(table: &str) -> InsertManyStmt {
    InsertManyStmt::new(table)
}

/// Create an UPDATE builder for `table`.
pub fn update_table(table: &str) -> UpdateStmt {
    UpdateStmt::new(table)
}

/// Create a DELETE builder for `table`.
pub fn delete_from(table: &str) -> DeleteStmt {
    DeleteStmt::new(table)
}
