use super::Error;

/// Error when a field's declared type has no registered type adapter.
///
/// This is raised while a record plan is being built, never while rows are
/// being processed. Registering an adapter for the type with
/// `Orm::builder().register::<T>(..)` resolves it.
#[derive(Debug)]
pub(super) struct UnsupportedType {
    type_name: Box<str>,
}

impl std::error::Error for UnsupportedType {}

impl core::fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no type adapter registered for `{}`", self.type_name)
    }
}

impl Error {
    /// Creates an unsupported type error for the named Rust type.
    pub fn unsupported_type(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedType {
            type_name: type_name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}
