//! # sqls
//!
//! Parameterized SQL statement builders.
//!
//! ## Features
//!
//! - **Five statement shapes**: SELECT, INSERT, multi-row INSERT, UPDATE, DELETE
//! - **Stable numbering**: `args[i]` always binds to placeholder `i + 1`
//! - **Cached placeholders**: `$1,$2,...` ranges are sliced from a pre-rendered
//!   string instead of being formatted per call
//! - **Dialects**: any placeholder prefix (`$`, `@`, ...), process-wide or
//!   injected per builder
//! - **Driver-ready arguments**: [`Value`] implements `tokio_postgres::types::ToSql`
//!
//! Nothing here talks to a database: a finished [`BuiltQuery`] is handed to
//! whatever executes it.
//!
//! ```ignore
//! use sqls::prelude::*;
//!
//! sqls::set_dialect(Dialect::postgres());
//!
//! let q = update_table("users")
//!     .set("active", true)
//!     .and_eq("id", "123")
//!     .build()?;
//! assert_eq!(q.sql, "UPDATE users SET active=$1 WHERE id=$2");
//!
//! client.execute(&q.sql, &q.params_ref()).await?;
//! ```

pub mod builder;
pub mod dialect;
pub mod error;
pub mod placeholder;
pub mod prelude;
pub mod value;

pub use builder::{
    BuiltQuery, DeleteStmt, InsertManyStmt, InsertStmt, KeyVal, SelectStmt, SqlBuilder,
    UpdateStmt, WhereBuilder, delete_from, insert_into, insert_many_into, select_from,
    update_table,
};
pub use dialect::{Dialect, DialectConfig, configure, current_dialect, set_dialect};
pub use error::{SqlError, SqlResult};
pub use placeholder::{MAX_PARAM_COUNT, generate_params};
pub use value::Value;
