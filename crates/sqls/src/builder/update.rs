use super::insert::{KeyVal, append_returning};
use super::traits::SqlBuilder;
use super::where_builder::WhereBuilder;
use crate::dialect::{Dialect, current_dialect};
use crate::error::{SqlError, SqlResult};
use crate::value::Value;
use std::sync::Arc;

/// UPDATE builder.
///
/// SET values and WHERE values share one placeholder sequence, numbered in
/// call order.
#[derive(Debug, Clone)]
pub struct UpdateStmt {
    /// Table name
    table: String,
    /// Rendered `column=<placeholder>` assignments
    assignments: Vec<String>,
    /// WHERE predicates; also owns the SET values
    where_clause: WhereBuilder,
    /// RETURNING columns
    returning_cols: Vec<String>,
}

impl UpdateStmt {
    /// Create an UPDATE builder using the process-wide dialect.
    pub fn new(table: &str) -> Self {
        Self::with_dialect(table, current_dialect())
    }

    pub fn with_dialect(table: &str, dialect: Arc<Dialect>) -> Self {
        Self {
            table: table.to_string(),
            assignments: Vec::new(),
            where_clause: WhereBuilder::new(dialect),
            returning_cols: Vec::new(),
        }
    }

    /// Set a column.
    pub fn set(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        let placeholder = self.where_clause.bind(value);
        self.assignments.push(format!("{}={}", column, placeholder));
        self
    }

    /// Set an optional column (None => skip).
    pub fn set_opt<T: Into<Value>>(&mut self, column: &str, value: Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.set(column, v);
        }
        self
    }

    /// Set several columns at once, in iteration order.
    pub fn set_values<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<KeyVal>,
    {
        for kv in values {
            let KeyVal { key, val } = kv.into();
            self.set(&key, val);
        }
        self
    }

    /// Set a column to a raw SQL expression (no param).
    ///
    /// # Safety
    ///
    /// This directly concatenates SQL. The caller must ensure safety.
    pub fn set_raw(&mut self, column: &str, expr: &str) -> &mut Self {
        self.assignments.push(format!("{}={}", column, expr));
        self
    }

    impl_where_methods!(where_clause);

    /// Set RETURNING (string form).
    pub fn returning(&mut self, cols: &str) -> &mut Self {
        self.returning_cols = vec![cols.to_string()];
        self
    }

    /// Set RETURNING (array form).
    pub fn returning_cols(&mut self, cols: &[&str]) -> &mut Self {
        self.returning_cols = cols.iter().map(|s| s.to_string()).collect();
        self
    }
}

impl SqlBuilder for UpdateStmt {
    fn build_sql(&self) -> String {
        let mut sql = format!("UPDATE {} SET {}", self.table, self.assignments.join(","));
        self.where_clause.append_to(&mut sql);
        append_returning(&mut sql, &self.returning_cols);
        sql
    }

    fn args(&self) -> &[Value] {
        self.where_clause.args()
    }

    fn validate(&self) -> SqlResult<()> {
        if self.assignments.is_empty() {
            return Err(SqlError::malformed(format!(
                "UpdateStmt: no SET assignments for table '{}'",
                self.table
            )));
        }
        Ok(())
    }
}
