use super::Error;
use crate::row::{Kind, Value};

/// Error when a row value cannot be converted to the expected type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    from: Kind,
    to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {:?} to {}", self.from, self.to_type)
    }
}

impl Error {
    /// Creates a type conversion error for `value` and the target type name.
    pub fn type_conversion(value: Value, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            from: value.kind(),
            to_type,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeConversion(_))
    }
}
