use super::TypeAdapter;
use crate::{Kind, Result, RowSink, RowSource, Value};

macro_rules! builtin_adapters {
    ( $( $(#[$m:meta])* $name:ident => $ty:ty, $kind:ident; )+ ) => {
        $(
            $(#[$m])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl TypeAdapter<$ty> for $name {
                fn from_row(&self, row: &dyn RowSource, column: &str) -> Result<$ty> {
                    <$ty>::try_from(row.get(column, Kind::$kind)?)
                }

                fn to_sink(&self, sink: &mut dyn RowSink, column: &str, value: &$ty) {
                    sink.put(column, Value::$kind(value.clone()));
                }
            }
        )+
    };
}

builtin_adapters! {
    /// `i16` stored as a 16-bit integer column.
    I16Adapter => i16, I16;
    /// `i32` stored as a 32-bit integer column.
    I32Adapter => i32, I32;
    /// `i64` stored as a 64-bit integer column.
    I64Adapter => i64, I64;
    /// `bool` stored as a boolean column.
    BoolAdapter => bool, Bool;
    /// `f32` stored as a single precision float column.
    F32Adapter => f32, F32;
    /// `f64` stored as a double precision float column.
    F64Adapter => f64, F64;
    /// `String` stored as a text column.
    StringAdapter => String, String;
    /// `Vec<u8>` stored as a blob column.
    BytesAdapter => Vec<u8>, Bytes;
}
