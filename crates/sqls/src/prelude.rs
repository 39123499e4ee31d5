//! Convenient imports for typical `sqls` usage.
//!
//! ```ignore
//! use sqls::prelude::*;
//! ```

pub use crate::{
    BuiltQuery, Dialect, KeyVal, SqlBuilder, SqlError, SqlResult, Value, delete_from, insert_into,
    insert_many_into, select_from, update_table, values,
};
