use super::traits::SqlBuilder;
use crate::dialect::{Dialect, current_dialect};
use crate::value::Value;
use std::sync::Arc;

/// A column/value pair for bulk assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyVal {
    pub key: String,
    pub val: Value,
}

impl KeyVal {
    pub fn new(key: impl Into<String>, val: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            val: val.into(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for KeyVal {
    fn from((key, val): (K, V)) -> Self {
        Self::new(key, val)
    }
}

/// Single-row INSERT builder.
#[derive(Debug, Clone)]
pub struct InsertStmt {
    dialect: Arc<Dialect>,
    /// Table name
    table: String,
    /// Column names, parallel to `args`
    columns: Vec<String>,
    args: Vec<Value>,
    /// ON CONFLICT expression (e.g. "(email) DO NOTHING")
    conflict: Option<String>,
    /// RETURNING columns
    returning_cols: Vec<String>,
}

impl InsertStmt {
    /// Create an INSERT builder using the process-wide dialect.
    pub fn new(table: &str) -> Self {
        Self::with_dialect(table, current_dialect())
    }

    pub fn with_dialect(table: &str, dialect: Arc<Dialect>) -> Self {
        Self {
            dialect,
            table: table.to_string(),
            columns: Vec::new(),
            args: Vec::new(),
            conflict: None,
            returning_cols: Vec::new(),
        }
    }

    /// Set a column value.
    pub fn set(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.columns.push(column.to_string());
        self.args.push(value.into());
        self
    }

    /// Set an optional column value (None => skip).
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
            self.columns.push(key);
            self.args.push(val);
        }
        self
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

/// Append ` ON CONFLICT ...` and ` RETURNING ...` when configured.
pub(crate) fn append_conflict_returning(
    sql: &mut String,
    conflict: Option<&str>,
    returning_cols: &[String],
) {
    if let Some(conflict) = conflict {
        sql.push_str(" ON CONFLICT ");
        sql.push_str(conflict);
    }
    append_returning(sql, returning_cols);
}

pub(crate) fn append_returning(sql: &mut String, returning_cols: &[String]) {
    if !returning_cols.is_empty() {
        sql.push_str(" RETURNING ");
        sql.push_str(&returning_cols.join(","));
    }
}

impl SqlBuilder for InsertStmt {
    fn build_sql(&self) -> String {
        let mut sql = if self.columns.is_empty() {
            format!("INSERT INTO {} DEFAULT VALUES", self.table)
        } else {
            format!(
                "INSERT INTO {} ({}) VALUES ({})",
                self.table,
                self.columns.join(","),
                self.dialect.params(1, self.columns.len())
            )
        };

        append_conflict_returning(&mut sql, self.conflict.as_deref(), &self.returning_cols);
        sql
    }

    fn args(&self) -> &[Value] {
        &self.args
    }
}
