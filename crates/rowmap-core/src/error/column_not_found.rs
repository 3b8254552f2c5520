use super::Error;

/// Error when a row does not carry a column the record needs.
#[derive(Debug)]
pub(super) struct ColumnNotFound {
    column: Box<str>,
}

impl std::error::Error for ColumnNotFound {}

impl core::fmt::Display for ColumnNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "column `{}` not found in row", self.column)
    }
}

impl Error {
    /// Creates a column not found error.
    ///
    /// Row sources return this from [`RowSource::get`](crate::RowSource::get)
    /// when asked for a column they do not have.
    pub fn column_not_found(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ColumnNotFound(ColumnNotFound {
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a column not found error.
    pub fn is_column_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ColumnNotFound(_))
    }
}
