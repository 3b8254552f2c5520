/// The storage kind a type adapter asks a row source for.
///
/// Row sources coerce the raw column value to the requested kind before
/// handing it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    I16,
    I32,
    I64,
    Bool,
    F32,
    F64,
    String,
    Bytes,
}
