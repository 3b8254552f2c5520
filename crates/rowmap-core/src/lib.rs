pub mod adapter;
pub use adapter::{TypeAdapter, TypeAdapters};

mod error;
pub use error::{Error, IntoError};

pub mod naming;

pub mod row;
pub use row::{Kind, MemRows, RowSink, RowSource, Value, Values};

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
