use super::insert::append_returning;
use super::traits::SqlBuilder;
use super::where_builder::WhereBuilder;
use crate::dialect::{Dialect, current_dialect};
use crate::value::Value;
use std::sync::Arc;

/// DELETE builder.
#[derive(Debug, Clone)]
pub struct DeleteStmt {
    table: String,
    where_clause: WhereBuilder,
    returning_cols: Vec<String>,
}

impl DeleteStmt {
    /// Create a DELETE builder using the process-wide dialect.
    pub fn new(table: &str) -> Self {
        Self::with_dialect(table, current_dialect())
    }

    pub fn with_dialect(table: &str, dialect: Arc<Dialect>) -> Self {
        Self {
            table: table.to_string(),
            where_clause: WhereBuilder::new(dialect),
            returning_cols: Vec::new(),
        }
    }

    impl_where_methods!(where_clause);

    /// Drop every WHERE predicate together with its bound values.
    pub fn clear_where(&mut self) -> &mut Self {
        self.where_clause.clear();
        self
    }

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

impl SqlBuilder for DeleteStmt {
    fn build_sql(&self) -> String {
        let mut sql = format!("DELETE FROM {}", self.table);
        self.where_clause.append_to(&mut sql);
        append_returning(&mut sql, &self.returning_cols);
        sql
    }

    fn args(&self) -> &[Value] {
        self.where_clause.args()
    }
}
