//! Shared WHERE clause builder for SELECT, UPDATE, DELETE.

use crate::dialect::Dialect;
use crate::value::Value;
use std::sync::Arc;

/// Reusable WHERE clause builder.
///
/// Predicates are rendered as soon as they are added, so every placeholder
/// number is fixed by the number of values bound before it. The owning
/// statement may also bind values of its own through [`WhereBuilder::bind`]
/// (UPDATE does for its SET list) and those share the same numbering.
#[derive(Debug, Clone)]
pub struct WhereBuilder {
    dialect: Arc<Dialect>,
    /// Rendered predicates, ANDed in insertion order
    conditions: Vec<String>,
    /// Bound values, in placeholder order
    args: Vec<Value>,
}

impl WhereBuilder {
    pub fn new(dialect: Arc<Dialect>) -> Self {
        Self {
            dialect,
            conditions: Vec::new(),
            args: Vec::new(),
        }
    }

    /// The dialect placeholders are rendered with.
    pub fn dialect(&self) -> &Arc<Dialect> {
        &self.dialect
    }

    /// Check if any predicates have been added.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Number of bound values so far.
    pub fn param_count(&self) -> usize {
        self.args.len()
    }

    /// Bound values in placeholder order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Rendered predicates in insertion order.
    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    /// Bind a value and return the placeholder that refers to it.
    pub fn bind(&mut self, value: impl Into<Value>) -> String {
        self.args.push(value.into());
        self.dialect.param(self.args.len()).into_owned()
    }

    fn push_bound(&mut self, column: &str, op: &str, value: Value) {
        self.args.push(value);
        let placeholder = self.dialect.param(self.args.len());

        let mut condition = String::with_capacity(column.len() + op.len() + placeholder.len());
        condition.push_str(column);
        condition.push_str(op);
        condition.push_str(&placeholder);
        self.conditions.push(condition);
    }

    /// Add `column=value`.
    pub fn and_eq(&mut self, column: &str, value: impl Into<Value>) {
        self.push_bound(column, "=", value.into());
    }

    /// Add `column IS NULL`.
    pub fn and_is_null(&mut self, column: &str) {
        self.conditions.push(format!("{} IS NULL", column));
    }

    /// Add `column IS NOT NULL`.
    pub fn and_is_not_null(&mut self, column: &str) {
        self.conditions.push(format!("{} IS NOT NULL", column));
    }

    /// Add `column<op>value`.
    ///
    /// `op` is inserted verbatim and must come from trusted code.
    pub fn and_compare(&mut self, column: &str, op: &str, value: impl Into<Value>) {
        self.push_bound(column, op, value.into());
    }

    /// Add `column IN (...)` over a contiguous placeholder range.
    ///
    /// An empty list renders `column IN ()`.
    pub fn and_in<I, V>(&mut self, column: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let start = self.args.len() + 1;
        self.args.extend(values.into_iter().map(Into::into));
        let count = self.args.len() + 1 - start;

        let condition = format!("{} IN ({})", column, self.dialect.params(start, count));
        self.conditions.push(condition);
    }

    /// Add a raw predicate.
    ///
    /// # Safety
    ///
    /// This directly concatenates SQL. The caller must ensure safety.
    pub fn and_raw(&mut self, sql: &str) {
        self.conditions.push(sql.to_string());
    }

    /// Drop every predicate and every bound value.
    pub fn clear(&mut self) {
        self.conditions.clear();
        self.args.clear();
    }

    /// Build the WHERE clause string (without "WHERE" prefix).
    pub fn build_clause(&self) -> String {
        self.conditions.join(" AND ")
    }

    /// Append ` WHERE ...` to `sql`, or nothing if no predicate was added.
    pub fn append_to(&self, sql: &mut String) {
        if self.conditions.is_empty() {
            return;
        }
        sql.push_str(" WHERE ");
        sql.push_str(&self.build_clause());
    }
}

/// Generate the WHERE methods of a statement that owns a [`WhereBuilder`]
/// in the field `$field`.
macro_rules! impl_where_methods {
    ($field:ident) => {
        /// Add WHERE: column=value
        pub fn and_eq(&mut self, column: &str, value: impl Into<$crate::Value>) -> &mut Self {
            self.$field.and_eq(column, value);
            self
        }

        /// Add WHERE: column IS NULL
        pub fn and_is_null(&mut self, column: &str) -> &mut Self {
            self.$field.and_is_null(column);
            self
        }

        /// Add WHERE: column IS NOT NULL
        pub fn and_is_not_null(&mut self, column: &str) -> &mut Self {
            self.$field.and_is_not_null(column);
            self
        }

        /// Add WHERE: column<op>value, with `op` inserted verbatim.
        pub fn and_compare(
            &mut self,
            column: &str,
            op: &str,
            value: impl Into<$crate::Value>,
        ) -> &mut Self {
            self.$field.and_compare(column, op, value);
            self
        }

        /// Add WHERE: column!=value
        pub fn and_ne(&mut self, column: &str, value: impl Into<$crate::Value>) -> &mut Self {
            self.and_compare(column, "!=", value)
        }

        /// Add WHERE: column>value
        pub fn and_gt(&mut self, column: &str, value: impl Into<$crate::Value>) -> &mut Self {
            self.and_compare(column, ">", value)
        }

        /// Add WHERE: column>=value
        pub fn and_gte(&mut self, column: &str, value: impl Into<$crate::Value>) -> &mut Self {
            self.and_compare(column, ">=", value)
        }

        /// Add WHERE: column<value
        pub fn and_lt(&mut self, column: &str, value: impl Into<$crate::Value>) -> &mut Self {
            self.and_compare(column, "<", value)
        }

        /// Add WHERE: column<=value
        pub fn and_lte(&mut self, column: &str, value: impl Into<$crate::Value>) -> &mut Self {
            self.and_compare(column, "<=", value)
        }

        /// Add WHERE: column LIKE pattern
        pub fn and_like(&mut self, column: &str, pattern: impl Into<$crate::Value>) -> &mut Self {
            self.and_compare(column, " LIKE ", pattern)
        }

        /// Add WHERE: column IN (...)
        pub fn and_in<I, V>(&mut self, column: &str, values: I) -> &mut Self
        where
            I: IntoIterator<Item = V>,
            V: Into<$crate::Value>,
        {
            self.$field.and_in(column, values);
            self
        }

        /// Add a raw WHERE predicate.
        ///
        /// # Safety
        ///
        /// This directly concatenates SQL. The caller must ensure safety.
        pub fn and_raw(&mut self, sql: &str) -> &mut Self {
            self.$field.and_raw(sql);
            self
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pg() -> WhereBuilder {
        WhereBuilder::new(Arc::new(Dialect::postgres()))
    }

    #[test]
    fn numbering_follows_insertion_order() {
        let mut w = pg();
        w.and_eq("active", true);
        w.and_in("state", ["Washington", "Oregon"]);
        w.and_is_null("token");
        w.and_compare("age", ">", 18);
        w.and_raw("first=last");

        assert_eq!(
            w.build_clause(),
            "active=$1 AND state IN ($2,$3) AND token IS NULL AND age>$4 AND first=last"
        );
        assert_eq!(
            w.args(),
            &[
                Value::Bool(true),
                Value::from("Washington"),
                Value::from("Oregon"),
                Value::Int(18),
            ]
        );
    }

    #[test]
    fn empty_in_list() {
        let mut w = pg();
        w.and_in("id", Vec::<i64>::new());
        w.and_eq("a", 1);
        assert_eq!(w.build_clause(), "id IN () AND a=$1");
        assert_eq!(w.param_count(), 1);
    }

    #[test]
    fn bind_shares_numbering() {
        let mut w = pg();
        assert_eq!(w.bind("x"), "$1");
        w.and_eq("id", 5);
        assert_eq!(w.build_clause(), "id=$2");
    }

    #[test]
    fn append_to_omits_where_when_empty() {
        let mut w = pg();
        let mut sql = String::from("DELETE FROM t");
        w.append_to(&mut sql);
        assert_eq!(sql, "DELETE FROM t");

        w.and_is_not_null("x");
        w.append_to(&mut sql);
        assert_eq!(sql, "DELETE FROM t WHERE x IS NOT NULL");
    }

    #[test]
    fn clear_drops_values() {
        let mut w = pg();
        w.and_eq("a", 1);
        w.clear();
        assert!(w.is_empty());
        assert_eq!(w.param_count(), 0);
        w.and_eq("b", 2);
        assert_eq!(w.build_clause(), "b=$1");
    }
}
