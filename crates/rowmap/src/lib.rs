//! Maps plain Rust records to and from rows of named columns.
//!
//! Declare a record once, with `#[derive(Record)]` or a hand-written
//! [`Record`] impl, and [`Orm`] derives the column projection, reads
//! instances from a [`RowSource`] and writes them into [`Values`].
//!
//! ```
//! use rowmap::{Orm, Record};
//! use rowmap::core::{MemRows, Value};
//!
//! #[derive(Debug, Default, PartialEq, Record)]
//! struct User {
//!     id: i64,
//!     first_name: String,
//!     nickname: Option<String>,
//! }
//!
//! let orm = Orm::new();
//! assert_eq!(
//!     orm.projection::<User>().unwrap(),
//!     ["ID", "FIRST_NAME", "NICKNAME"]
//! );
//!
//! let mut rows = MemRows::new(["ID", "FIRST_NAME", "NICKNAME"])
//!     .with_row([Value::I64(1), Value::from("Ada"), Value::Null]);
//!
//! let users: Vec<User> = orm.read_all(&mut rows).unwrap();
//! assert_eq!(users[0].first_name, "Ada");
//!
//! let values = orm.write(&users[0]).unwrap();
//! assert_eq!(values.get("NICKNAME"), Some(&Value::Null));
//! ```

pub mod orm;
pub use orm::{ColumnReader, Orm, RecordReader};

pub mod plan;
pub use plan::RecordPlan;

mod record;
pub use record::{Field, Record};

pub use rowmap_core as core;
pub use rowmap_core::{Error, Result, RowSink, RowSource, TypeAdapter, TypeAdapters, Values};

pub use rowmap_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::record::{Field, Record};
    pub use std::vec::Vec;
}
