use super::Kind;
use crate::{Error, Result};

/// A single column value, as read from a row source or put into a row sink.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit SQL-style null
    Null,
    I16(i16),
    I32(i32),
    I64(i64),
    Bool(bool),
    F32(f32),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
}

impl Value {
    /// Returns the storage kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::I16(_) => Kind::I16,
            Value::I32(_) => Kind::I32,
            Value::I64(_) => Kind::I64,
            Value::Bool(_) => Kind::Bool,
            Value::F32(_) => Kind::F32,
            Value::F64(_) => Kind::F64,
            Value::String(_) => Kind::String,
            Value::Bytes(_) => Kind::Bytes,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Converts the value to `kind` following loose column typing rules.
    ///
    /// Integers convert between widths when the value fits, booleans and
    /// integers convert into each other (`0` is false, anything else true)
    /// and integers widen into floats. `Null` stays `Null` whatever the
    /// requested kind.
    pub fn coerce(self, kind: Kind) -> Result<Value> {
        if self.is_null() || self.kind() == kind {
            return Ok(self);
        }

        let value = match (kind, self) {
            (Kind::I16, value) => Value::I16(i16::try_from(value.as_i64("i16")?)?),
            (Kind::I32, value) => Value::I32(i32::try_from(value.as_i64("i32")?)?),
            (Kind::I64, value) => Value::I64(value.as_i64("i64")?),
            (Kind::Bool, value) => Value::Bool(value.as_i64("bool")? != 0),
            (Kind::F32, Value::F64(v)) => Value::F32(v as f32),
            (Kind::F32, value) => Value::F32(value.as_i64("f32")? as f32),
            (Kind::F64, Value::F32(v)) => Value::F64(v as f64),
            (Kind::F64, value) => Value::F64(value.as_i64("f64")? as f64),
            (Kind::String, value) => return Err(Error::type_conversion(value, "String")),
            (Kind::Bytes, Value::String(v)) => Value::Bytes(v.into_bytes()),
            (Kind::Bytes, value) => return Err(Error::type_conversion(value, "Vec<u8>")),
            (Kind::Null, value) => value,
        };

        Ok(value)
    }

    fn as_i64(self, to_type: &'static str) -> Result<i64> {
        match self {
            Value::I16(v) => Ok(v.into()),
            Value::I32(v) => Ok(v.into()),
            Value::I64(v) => Ok(v),
            Value::Bool(v) => Ok(v.into()),
            value => Err(Error::type_conversion(value, to_type)),
        }
    }
}

macro_rules! impl_value_conversions {
    ( $( $variant:ident($ty:ty) ),+ ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        value => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )+
    };
}

impl_value_conversions!(
    I16(i16),
    I32(i32),
    I64(i64),
    Bool(bool),
    F32(f32),
    F64(f64),
    String(String),
    Bytes(Vec<u8>)
);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}
