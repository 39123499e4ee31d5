use super::traits::SqlBuilder;
use super::where_builder::WhereBuilder;
use crate::dialect::{Dialect, current_dialect};
use crate::value::Value;
use std::sync::Arc;

/// Structured SELECT query builder.
///
/// Clauses render in a fixed order regardless of call order:
/// columns, FROM, JOIN, WHERE, ORDER BY, GROUP BY, HAVING, LIMIT, OFFSET.
#[derive(Debug, Clone)]
pub struct SelectStmt {
    /// Main table expression
    table: String,
    /// SELECT columns (empty renders `*`)
    select_cols: Vec<String>,
    /// JOIN clauses
    join_clauses: Vec<String>,
    where_clause: WhereBuilder,
    order_by: Option<String>,
    group_by: Option<String>,
    having: Option<String>,
    /// LIMIT (0 = none)
    limit: u64,
    /// OFFSET (0 = none)
    offset: u64,
}

impl SelectStmt {
    /// Create a SELECT builder using the process-wide dialect.
    pub fn new(table: &str) -> Self {
        Self::with_dialect(table, current_dialect())
    }

    pub fn with_dialect(table: &str, dialect: Arc<Dialect>) -> Self {
        Self {
            table: table.to_string(),
            select_cols: Vec::new(),
            join_clauses: Vec::new(),
            where_clause: WhereBuilder::new(dialect),
            order_by: None,
            group_by: None,
            having: None,
            limit: 0,
            offset: 0,
        }
    }

    /// Set SELECT columns (string form, supports complex expressions).
    pub fn select(&mut self, cols: &str) -> &mut Self {
        self.select_cols = vec![cols.to_string()];
        self
    }

    /// Set SELECT columns (array form).
    pub fn select_cols(&mut self, cols: &[&str]) -> &mut Self {
        self.select_cols = cols.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Add `JOIN table ON lhs=rhs`.
    pub fn join(&mut self, table: &str, lhs: &str, rhs: &str) -> &mut Self {
        self.join_clauses
            .push(format!("JOIN {} ON {}={}", table, lhs, rhs));
        self
    }

    /// Add `LEFT JOIN table ON lhs=rhs`.
    pub fn left_join(&mut self, table: &str, lhs: &str, rhs: &str) -> &mut Self {
        self.join_clauses
            .push(format!("LEFT JOIN {} ON {}={}", table, lhs, rhs));
        self
    }

    impl_where_methods!(where_clause);

    /// Set ORDER BY (string form, e.g. `"id DESC"`).
    pub fn order_by(&mut self, expr: &str) -> &mut Self {
        self.order_by = Some(expr.to_string());
        self
    }

    /// Set ORDER BY (array form).
    pub fn order_by_cols(&mut self, cols: &[&str]) -> &mut Self {
        self.order_by = Some(cols.join(","));
        self
    }

    /// Set GROUP BY.
    pub fn group_by(&mut self, expr: &str) -> &mut Self {
        self.group_by = Some(expr.to_string());
        self
    }

    /// Set HAVING (raw condition, no params).
    pub fn having(&mut self, condition: &str) -> &mut Self {
        self.having = Some(condition.to_string());
        self
    }

    /// Set LIMIT; 0 removes it.
    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.limit = limit;
        self
    }

    /// Set OFFSET; 0 removes it.
    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.offset = offset;
        self
    }

    pub fn clear_select(&mut self) -> &mut Self {
        self.select_cols.clear();
        self
    }

    pub fn clear_join(&mut self) -> &mut Self {
        self.join_clauses.clear();
        self
    }

    /// Drop every WHERE predicate together with its bound values.
    pub fn clear_where(&mut self) -> &mut Self {
        self.where_clause.clear();
        self
    }

    pub fn clear_order_by(&mut self) -> &mut Self {
        self.order_by = None;
        self
    }

    pub fn clear_group_by(&mut self) -> &mut Self {
        self.group_by = None;
        self
    }

    pub fn clear_having(&mut self) -> &mut Self {
        self.having = None;
        self
    }
}

impl SqlBuilder for SelectStmt {
    fn build_sql(&self) -> String {
        let mut sql = String::from("SELECT ");
        if self.select_cols.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&self.select_cols.join(","));
        }
        sql.push_str(" FROM ");
        sql.push_str(&self.table);

        if !self.join_clauses.is_empty() {
            sql.push(' ');
            sql.push_str(&self.join_clauses.join(" "));
        }

        self.where_clause.append_to(&mut sql);

        if let Some(ref order_by) = self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }
        if let Some(ref group_by) = self.group_by {
            sql.push_str(" GROUP BY ");
            sql.push_str(group_by);
        }
        if let Some(ref having) = self.having {
            sql.push_str(" HAVING ");
            sql.push_str(having);
        }

        if self.limit > 0 {
            sql.push_str(&format!(" LIMIT {}", self.limit));
        }
        if self.offset > 0 {
            sql.push_str(&format!(" OFFSET {}", self.offset));
        }

        sql
    }

    fn args(&self) -> &[Value] {
        self.where_clause.args()
    }
}
