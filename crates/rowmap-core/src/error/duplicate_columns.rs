use super::Error;

/// Error when more than one field of a record writes the same column.
///
/// Detected when the record plan is built but only reported when a write is
/// attempted. Reading a record with duplicate columns still works.
#[derive(Debug)]
pub(super) struct DuplicateColumns {
    columns: Box<[String]>,
}

impl std::error::Error for DuplicateColumns {}

impl core::fmt::Display for DuplicateColumns {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "duplicate column definitions: {}", self.columns.join(", "))
    }
}

impl Error {
    /// Creates a duplicate columns error listing every offending column once.
    pub fn duplicate_columns<I>(columns: I) -> Error
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Error::from(super::ErrorKind::DuplicateColumns(DuplicateColumns {
            columns: columns.into_iter().map(Into::into).collect(),
        }))
    }

    /// Returns `true` if this error is a duplicate columns error.
    pub fn is_duplicate_columns(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateColumns(_))
    }
}
