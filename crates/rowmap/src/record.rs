mod field;
pub use field::Field;
pub(crate) use field::FieldKind;

/// A struct whose fields map to row columns.
///
/// Usually derived with `#[derive(Record)]`. A hand-written impl lists the
/// persisted fields in declaration order:
///
/// ```
/// use rowmap::{Field, Record};
///
/// #[derive(Default)]
/// struct Tag {
///     id: i64,
///     label: String,
///     cached_len: usize,
/// }
///
/// impl Record for Tag {
///     fn fields() -> Vec<Field<Self>> {
///         vec![
///             Field::<Self>::scalar::<i64>("id", |t| &t.id, |t| &mut t.id),
///             Field::<Self>::scalar::<String>("label", |t| &t.label, |t| &mut t.label),
///             Field::<Self>::scalar::<usize>(
///                 "cached_len",
///                 |t| &t.cached_len,
///                 |t| &mut t.cached_len,
///             )
///             .ignored(),
///         ]
///     }
/// }
/// ```
pub trait Record: Default + 'static {
    /// The persistable fields of the record, including fields inherited from
    /// a parent record.
    fn fields() -> Vec<Field<Self>>;

    /// Name used in logs and error messages.
    fn record_name() -> &'static str {
        let name = std::any::type_name::<Self>();
        name.rsplit("::").next().unwrap_or(name)
    }
}
