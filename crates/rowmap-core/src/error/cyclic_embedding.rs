use super::Error;

/// Error when a record embeds itself, directly or through other records.
#[derive(Debug)]
pub(super) struct CyclicEmbedding {
    chain: Box<[String]>,
}

impl std::error::Error for CyclicEmbedding {}

impl core::fmt::Display for CyclicEmbedding {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cyclic embedding: {}", self.chain.join(" -> "))
    }
}

impl Error {
    /// Creates a cyclic embedding error.
    ///
    /// `chain` lists the record types from the outermost one to the type that
    /// closes the cycle.
    pub fn cyclic_embedding<I>(chain: I) -> Error
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Error::from(super::ErrorKind::CyclicEmbedding(CyclicEmbedding {
            chain: chain.into_iter().map(Into::into).collect(),
        }))
    }

    /// Returns `true` if this error is a cyclic embedding error.
    pub fn is_cyclic_embedding(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::CyclicEmbedding(_))
    }
}
