use super::insert::append_conflict_returning;
use super::traits::SqlBuilder;
use crate::dialect::{Dialect, current_dialect};
use crate::error::{SqlError, SqlResult};
use crate::value::Value;
use std::sync::Arc;

/// Multi-row INSERT builder: one statement, one VALUES group per row.
///
/// Rows are kept in a single flat buffer; row `r` owns placeholders
/// `r * width + 1 ..= (r + 1) * width`.
#[derive(Debug, Clone)]
pub struct InsertManyStmt {
    dialect: Arc<Dialect>,
    table: String,
    columns: Vec<String>,
    /// Flattened row values
    args: Vec<Value>,
    /// Number of complete rows in `args`
    row_count: usize,
    conflict: Option<String>,
    returning_cols: Vec<String>,
    /// Build error (validated at build time)
    build_error: Option<String>,
}

impl InsertManyStmt {
    /// Create a multi-row INSERT builder using the process-wide dialect.
    pub fn new(table: &str) -> Self {
        Self::with_dialect(table, current_dialect())
    }

    pub fn with_dialect(table: &str, dialect: Arc<Dialect>) -> Self {
        Self {
            dialect,
            table: table.to_string(),
            columns: Vec::new(),
            args: Vec::new(),
            row_count: 0,
            conflict: None,
            returning_cols: Vec::new(),
            build_error: None,
        }
    }

    /// Set the inserted columns. Every row must supply this many values.
    pub fn columns(&mut self, cols: &[&str]) -> &mut Self {
        self.columns = cols.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Append one row.
    ///
    /// A row whose width differs from the column count is not appended; the
    /// mismatch is reported by [`SqlBuilder::build`].
    pub fn add_row<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let row: Vec<Value> = values.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            if self.build_error.is_none() {
                self.build_error = Some(format!(
                    "InsertManyStmt: row {} has {} values, expected {} (columns: {})",
                    self.row_count + 1,
                    row.len(),
                    self.columns.len(),
                    self.columns.join(",")
                ));
            }
            return self;
        }

        self.args.extend(row);
        self.row_count += 1;
        self
    }

    /// Drop all rows, keeping table, columns, conflict and returning.
    pub fn clear(&mut self) -> &mut Self {
        self.args.clear();
        self.row_count = 0;
        self.build_error = None;
        self
    }

    /// Number of rows added so far.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Set the ON CONFLICT expression.
    pub fn on_conflict(&mut self, expr: &str) -> &mut Self {
        self.conflict = Some(expr.to_string());
        self
    }

    /// Set RETURNING columns (string form).
    pub fn returning(&mut self, cols: &str) -> &mut Self {
        self.returning_cols = vec![cols.to_string()];
        self
    }

    /// Set RETURNING columns (array form).
    pub fn returning_cols(&mut self, cols: &[&str]) -> &mut Self {
        self.returning_cols = cols.iter().map(|s| s.to_string()).collect();
        self
    }
}

impl SqlBuilder for InsertManyStmt {
    fn build_sql(&self) -> String {
        let width = self.columns.len();
        let mut sql = format!(
            "INSERT INTO {}({}) VALUES ",
            self.table,
            self.columns.join(",")
        );

        if self.row_count == 0 {
            sql.push_str("()");
        }
        for row in 0..self.row_count {
            if row > 0 {
                sql.push(',');
            }
            sql.push('(');
            sql.push_str(&self.dialect.params(row * width + 1, width));
            sql.push(')');
        }

        append_conflict_returning(&mut sql, self.conflict.as_deref(), &self.returning_cols);
        sql
    }

    fn args(&self) -> &[Value] {
        &self.args
    }

    fn validate(&self) -> SqlResult<()> {
        if let Some(ref err) = self.build_error {
            return Err(SqlError::malformed(err.clone()));
        }
        if self.columns.is_empty() {
            return Err(SqlError::malformed("InsertManyStmt: no columns set"));
        }
        if self.row_count == 0 {
            return Err(SqlError::malformed("InsertManyStmt: no rows added"));
        }
        if self.args.len() != self.row_count * self.columns.len() {
            return Err(SqlError::malformed(format!(
                "InsertManyStmt: {} values for {} rows of {} columns",
                self.args.len(),
                self.row_count,
                self.columns.len()
            )));
        }
        Ok(())
    }
}
