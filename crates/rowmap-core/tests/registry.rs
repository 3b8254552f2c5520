use rowmap_core::adapter::I64Adapter;
use rowmap_core::{Kind, Result, RowSink, RowSource, TypeAdapter, TypeAdapters, Value};

use std::time::Duration;

struct DurationMillis;

impl TypeAdapter<Duration> for DurationMillis {
    fn from_row(&self, row: &dyn RowSource, column: &str) -> Result<Duration> {
        let millis = i64::try_from(row.get(column, Kind::I64)?)?;
        Ok(Duration::from_millis(u64::try_from(millis)?))
    }

    fn to_sink(&self, sink: &mut dyn RowSink, column: &str, value: &Duration) {
        sink.put(column, Value::I64(value.as_millis() as i64));
    }
}

#[test]
fn defaults_cover_scalars_and_their_options() {
    let registry = TypeAdapters::defaults();

    assert_eq!(registry.len(), 16);
    assert!(registry.contains::<i16>());
    assert!(registry.contains::<Option<i16>>());
    assert!(registry.contains::<i32>());
    assert!(registry.contains::<Option<i32>>());
    assert!(registry.contains::<i64>());
    assert!(registry.contains::<Option<i64>>());
    assert!(registry.contains::<bool>());
    assert!(registry.contains::<Option<bool>>());
    assert!(registry.contains::<f32>());
    assert!(registry.contains::<Option<f32>>());
    assert!(registry.contains::<f64>());
    assert!(registry.contains::<Option<f64>>());
    assert!(registry.contains::<String>());
    assert!(registry.contains::<Option<String>>());
    assert!(registry.contains::<Vec<u8>>());
    assert!(registry.contains::<Option<Vec<u8>>>());
}

#[test]
fn lookup_is_exact() {
    let registry = TypeAdapters::defaults();

    assert!(registry.get::<u32>().is_none());
    assert!(registry.get::<&'static str>().is_none());
    assert!(registry.get::<Option<Option<i32>>>().is_none());
    assert!(registry.get::<Duration>().is_none());
}

#[test]
fn register_on_a_copy_leaves_defaults_untouched() {
    let mut registry = TypeAdapters::default();
    registry.register::<Duration, _>(DurationMillis);

    assert!(registry.contains::<Duration>());
    assert!(!TypeAdapters::defaults().contains::<Duration>());
    assert_eq!(registry.len(), TypeAdapters::defaults().len() + 1);
}

#[test]
fn register_replaces_existing_entry() {
    struct Doubling;

    impl TypeAdapter<i64> for Doubling {
        fn from_row(&self, row: &dyn RowSource, column: &str) -> Result<i64> {
            Ok(I64Adapter.from_row(row, column)? * 2)
        }

        fn to_sink(&self, sink: &mut dyn RowSink, column: &str, value: &i64) {
            I64Adapter.to_sink(sink, column, &(value * 2))
        }
    }

    let mut registry = TypeAdapters::default();
    let before = registry.len();
    registry.register::<i64, _>(Doubling);
    assert_eq!(registry.len(), before);

    let mut values = rowmap_core::Values::new();
    registry.get::<i64>().unwrap().write_from(&21_i64, &mut values, "N");
    assert_eq!(values.get("N"), Some(&Value::I64(42)));
}

#[test]
fn register_nullable_adds_both_forms() {
    #[derive(Clone)]
    struct Millis;

    impl TypeAdapter<Duration> for Millis {
        fn from_row(&self, row: &dyn RowSource, column: &str) -> Result<Duration> {
            DurationMillis.from_row(row, column)
        }

        fn to_sink(&self, sink: &mut dyn RowSink, column: &str, value: &Duration) {
            DurationMillis.to_sink(sink, column, value)
        }
    }

    let mut registry = TypeAdapters::empty();
    registry.register_nullable::<Duration, _>(Millis);

    assert_eq!(registry.len(), 2);
    assert!(registry.contains::<Duration>());
    assert!(registry.contains::<Option<Duration>>());
    assert!(!registry.contains::<i64>());
}
