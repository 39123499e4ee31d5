//! Bound argument values.

use crate::error::{SqlError, SqlResult};
use bytes::BytesMut;
use chrono::{DateTime, Utc};
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};

/// A value bound to a numbered placeholder.
///
/// Arguments are stored in the order their placeholders appear in the
/// rendered SQL, so `args[i]` binds to placeholder `i + 1`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<Utc>),
    Uuid(uuid::Uuid),
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_value! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Int,
    u16 => Int,
    u32 => Int,
    f32 => Float,
    f64 => Float,
    String => Text,
    &str => Text,
    &String => Text,
    Vec<u8> => Bytes,
    &[u8] => Bytes,
    DateTime<Utc> => Timestamp,
    uuid::Uuid => Uuid,
    serde_json::Value => Json,
}

// Unsigned 64-bit and pointer-sized integers may not fit in `Int`.
impl TryFrom<u64> for Value {
    type Error = SqlError;

    fn try_from(v: u64) -> SqlResult<Self> {
        i64::try_from(v)
            .map(Value::Int)
            .map_err(|_| SqlError::malformed(format!("{} does not fit in a BIGINT", v)))
    }
}

impl TryFrom<usize> for Value {
    type Error = SqlError;

    fn try_from(v: usize) -> SqlResult<Self> {
        Value::try_from(v as u64)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql_checked(ty, out),
            Value::Int(v) => {
                if *ty == Type::INT2 {
                    i16::try_from(*v)?.to_sql_checked(ty, out)
                } else if *ty == Type::INT4 {
                    i32::try_from(*v)?.to_sql_checked(ty, out)
                } else {
                    v.to_sql_checked(ty, out)
                }
            }
            Value::Float(v) => {
                if *ty == Type::FLOAT4 {
                    let narrowed = *v as f32;
                    if v.is_finite() && narrowed.is_infinite() {
                        return Err(format!("{} is out of range for FLOAT4", v).into());
                    }
                    narrowed.to_sql_checked(ty, out)
                } else {
                    v.to_sql_checked(ty, out)
                }
            }
            Value::Text(v) => v.to_sql_checked(ty, out),
            Value::Bytes(v) => <&[u8] as ToSql>::to_sql_checked(&v.as_slice(), ty, out),
            Value::Timestamp(v) => v.to_sql_checked(ty, out),
            Value::Uuid(v) => v.to_sql_checked(ty, out),
            Value::Json(v) => v.to_sql_checked(ty, out),
        }
    }

    // Each variant re-checks the concrete type in `to_sql`.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

/// Build a `Vec<Value>` from heterogeneous expressions.
///
/// ```ignore
/// stmt.add_row(sqls::values!["John", 30, true]);
/// ```
#[macro_export]
macro_rules! values {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Value::from($value)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(Value::from("a"), Value::Text("a".to_string()));
        assert_eq!(Value::from(30), Value::Int(30));
        assert_eq!(Value::from(1.5f32), Value::Float(1.5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
        assert_eq!(Value::from(&b"ab"[..]), Value::Bytes(vec![b'a', b'b']));
        assert!(Value::from(None::<String>).is_null());
    }

    #[test]
    fn values_macro() {
        let row = values!["John", 30, false];
        assert_eq!(
            row,
            vec![Value::Text("John".into()), Value::Int(30), Value::Bool(false)]
        );
        let empty: Vec<Value> = values![];
        assert!(empty.is_empty());
    }

    #[test]
    fn int_narrows_to_int4() {
        let mut out = BytesMut::new();
        let is_null = Value::Int(7).to_sql_checked(&Type::INT4, &mut out).unwrap();
        assert!(matches!(is_null, IsNull::No));
        assert_eq!(&out[..], &7i32.to_be_bytes());
    }

    #[test]
    fn int_overflow_is_an_error() {
        let mut out = BytesMut::new();
        assert!(Value::Int(i64::MAX).to_sql_checked(&Type::INT4, &mut out).is_err());
    }

    #[test]
    fn float_overflow_is_an_error() {
        let mut out = BytesMut::new();
        assert!(Value::Float(1e300).to_sql_checked(&Type::FLOAT4, &mut out).is_err());

        let mut out = BytesMut::new();
        assert!(Value::Float(1.5).to_sql_checked(&Type::FLOAT4, &mut out).is_ok());
        assert_eq!(&out[..], &1.5f32.to_be_bytes());

        let mut out = BytesMut::new();
        assert!(Value::Float(f64::INFINITY).to_sql_checked(&Type::FLOAT4, &mut out).is_ok());
    }

    #[test]
    fn unsigned_conversions() {
        assert_eq!(Value::try_from(42u64).unwrap(), Value::Int(42));
        assert_eq!(Value::try_from(7usize).unwrap(), Value::Int(7));
        assert!(Value::try_from(u64::MAX).unwrap_err().is_malformed_input());
    }

    #[test]
    fn text_rejects_int_column() {
        let mut out = BytesMut::new();
        assert!(Value::from("x").to_sql_checked(&Type::INT8, &mut out).is_err());
    }

    #[test]
    fn null_binds_as_null() {
        let mut out = BytesMut::new();
        let is_null = Value::Null.to_sql_checked(&Type::TEXT, &mut out).unwrap();
        assert!(matches!(is_null, IsNull::Yes));
        assert!(out.is_empty());
    }
}
