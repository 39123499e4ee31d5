use crate::error::SqlResult;
use crate::value::Value;
use tokio_postgres::types::ToSql;

/// Common interface of every statement builder.
pub trait SqlBuilder {
    /// Render the SQL text from the current state.
    fn build_sql(&self) -> String;

    /// Bound values in placeholder order.
    fn args(&self) -> &[Value];

    /// Validate builder state before finalizing.
    fn validate(&self) -> SqlResult<()> {
        Ok(())
    }

    /// Debug helper to get the SQL string (no validation).
    fn to_sql(&self) -> String {
        self.build_sql()
    }

    /// Finalize into SQL text plus arguments.
    ///
    /// May be called any number of times; each call renders the current
    /// state without mutating it.
    fn build(&self) -> SqlResult<BuiltQuery> {
        if let Err(err) = self.validate() {
            #[cfg(feature = "tracing")]
            tracing::warn!(target: "sqls.sql", error = %err, "rejected statement");
            return Err(err);
        }

        let query = BuiltQuery::new(self.build_sql(), self.args().to_vec());

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "sqls.sql",
            sql = %query.sql,
            args = query.args.len(),
            "built statement"
        );

        Ok(query)
    }
}

/// The result of building a query.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub args: Vec<Value>,
}

impl BuiltQuery {
    /// Create a new built query.
    pub fn new(sql: String, args: Vec<Value>) -> Self {
        Self { sql, args }
    }

    /// Split into `(sql, args)`.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }

    /// Get arguments as references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.args.iter().map(|v| v as &(dyn ToSql + Sync)).collect()
    }
}
