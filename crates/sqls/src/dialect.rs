//! Placeholder dialects and the process-wide dialect snapshot.
//!
//! A [`Dialect`] is immutable: it owns the placeholder prefix and the
//! [`ParamCache`] derived from it. Switching dialects means building a new
//! `Dialect` and swapping it in whole via [`set_dialect`], so no reader ever
//! sees a cache that belongs to a different prefix.
//!
//! Builders capture the current snapshot when they are created and keep it
//! for their whole lifetime. Pass a `Dialect` explicitly (e.g.
//! [`Dialect::select_from`]) to avoid the global altogether.

use crate::builder::{DeleteStmt, InsertManyStmt, InsertStmt, SelectStmt, UpdateStmt};
use crate::error::{SqlError, SqlResult};
use crate::placeholder::ParamCache;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Placeholder style shared by every statement rendered with it.
#[derive(Clone, Debug)]
pub struct Dialect {
    params: ParamCache,
}

impl Dialect {
    /// Create a dialect for an arbitrary placeholder prefix.
    ///
    /// The prefix must be non-empty and must not contain ASCII digits or
    /// commas, since the cached placeholder list is split on both.
    pub fn new(placeholder: impl Into<String>) -> SqlResult<Self> {
        let placeholder = placeholder.into();
        if placeholder.is_empty() {
            return Err(SqlError::config("placeholder prefix must not be empty"));
        }
        if placeholder.contains(|c: char| c == ',' || c.is_ascii_digit()) {
            return Err(SqlError::config(format!(
                "placeholder prefix '{}' must not contain digits or commas",
                placeholder
            )));
        }
        Ok(Self::with_prefix(placeholder))
    }

    fn with_prefix(placeholder: impl Into<String>) -> Self {
        Self {
            params: ParamCache::new(placeholder),
        }
    }

    /// `$1, $2, ...` (PostgreSQL).
    pub fn postgres() -> Self {
        Self::with_prefix("$")
    }

    /// `@1, @2, ...`, the default dialect.
    pub fn at_sign() -> Self {
        Self::with_prefix("@")
    }

    /// Build a dialect from configuration.
    pub fn from_config(config: &DialectConfig) -> SqlResult<Self> {
        Self::new(config.placeholder_prefix.as_str())
    }

    /// The placeholder prefix.
    pub fn placeholder(&self) -> &str {
        self.params.placeholder()
    }

    /// Render `count` comma-joined placeholders starting at `start` (1-based).
    ///
    /// `params(3, 2)` yields `$3,$4` for [`Dialect::postgres`].
    pub fn params(&self, start: usize, count: usize) -> Cow<'_, str> {
        self.params.params(start, count)
    }

    /// Render the single placeholder for `index`.
    pub fn param(&self, index: usize) -> Cow<'_, str> {
        self.params.params(index, 1)
    }

    /// Start a SELECT using this dialect.
    pub fn select_from(self: &Arc<Self>, table: &str) -> SelectStmt {
        SelectStmt::with_dialect(table, Arc::clone(self))
    }

    /// Start a single-row INSERT using this dialect.
    pub fn insert_into(self: &Arc<Self>, table: &str) -> InsertStmt {
        InsertStmt::with_dialect(table, Arc::clone(self))
    }

    /// Start a multi-row INSERT using this dialect.
    pub fn insert_many_into(self: &Arc<Self>, table: &str) -> InsertManyStmt {
        InsertManyStmt::with_dialect(table, Arc::clone(self))
    }

    /// Start an UPDATE using this dialect.
    pub fn update_table(self: &Arc<Self>, table: &str) -> UpdateStmt {
        UpdateStmt::with_dialect(table, Arc::clone(self))
    }

    /// Start a DELETE using this dialect.
    pub fn delete_from(self: &Arc<Self>, table: &str) -> DeleteStmt {
        DeleteStmt::with_dialect(table, Arc::clone(self))
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::at_sign()
    }
}

impl PartialEq for Dialect {
    fn eq(&self, other: &Self) -> bool {
        self.placeholder() == other.placeholder()
    }
}

impl Eq for Dialect {}

impl TryFrom<DialectConfig> for Dialect {
    type Error = SqlError;

    fn try_from(config: DialectConfig) -> SqlResult<Self> {
        Self::new(config.placeholder_prefix)
    }
}

/// Serializable dialect settings.
///
/// ```ignore
/// let config: DialectConfig = serde_json::from_str(r#"{"placeholder_prefix":"$"}"#)?;
/// sqls::configure(&config)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectConfig {
    /// Placeholder prefix, e.g. `"$"` or `"@"`.
    pub placeholder_prefix: String,
}

impl DialectConfig {
    pub fn new(placeholder_prefix: impl Into<String>) -> Self {
        Self {
            placeholder_prefix: placeholder_prefix.into(),
        }
    }

    /// Settings for `$`-numbered placeholders.
    pub fn postgres() -> Self {
        Self::new("$")
    }
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self::new("@")
    }
}

fn current() -> &'static RwLock<Arc<Dialect>> {
    static CURRENT: OnceLock<RwLock<Arc<Dialect>>> = OnceLock::new();
    CURRENT.get_or_init(|| RwLock::new(Arc::new(Dialect::default())))
}

/// Replace the process-wide dialect.
///
/// Builders created afterwards render with `dialect`; builders created
/// before keep the snapshot they captured.
pub fn set_dialect(dialect: Dialect) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "sqls.dialect",
        placeholder = dialect.placeholder(),
        "switching placeholder dialect"
    );

    let dialect = Arc::new(dialect);
    *current().write().unwrap_or_else(PoisonError::into_inner) = dialect;
}

/// Validate `config` and install it as the process-wide dialect.
pub fn configure(config: &DialectConfig) -> SqlResult<()> {
    set_dialect(Dialect::from_config(config)?);
    Ok(())
}

/// Snapshot of the process-wide dialect.
pub fn current_dialect() -> Arc<Dialect> {
    Arc::clone(&current().read().unwrap_or_else(PoisonError::into_inner))
}
