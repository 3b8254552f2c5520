use pretty_assertions::assert_eq;
use rowmap::core::{MemRows, Value};
use rowmap::{Orm, Record, RowSink, Values};
use std_util::{assert_err, assert_none, assert_ok};

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct User {
    id: i64,
    first_name: String,
    age: i32,
    score: f64,
    active: bool,
    avatar: Vec<u8>,
    nickname: Option<String>,
    level: Option<i16>,
}

fn ada() -> User {
    User {
        id: 1,
        first_name: "Ada".to_string(),
        age: 36,
        score: 9.5,
        active: true,
        avatar: vec![1, 2, 3],
        nickname: Some("countess".to_string()),
        level: None,
    }
}

#[test]
fn projection_follows_field_order() {
    let orm = Orm::new();

    assert_eq!(
        assert_ok!(orm.projection::<User>()),
        [
            "ID",
            "FIRST_NAME",
            "AGE",
            "SCORE",
            "ACTIVE",
            "AVATAR",
            "NICKNAME",
            "LEVEL"
        ]
    );
    assert_eq!(
        assert_ok!(orm.writable_columns::<User>()),
        assert_ok!(orm.projection::<User>())
    );
}

#[test]
fn write_then_read_round_trips() {
    let orm = Orm::new();
    let user = ada();

    let values = assert_ok!(orm.write(&user));
    assert_eq!(values.len(), 8);
    assert_eq!(values.get("ID"), Some(&Value::I64(1)));
    assert_eq!(values.get("FIRST_NAME"), Some(&Value::from("Ada")));
    assert_eq!(values.get("NICKNAME"), Some(&Value::from("countess")));
    assert_eq!(values.get("LEVEL"), Some(&Value::Null));

    let read: User = assert_ok!(orm.read(&values));
    assert_eq!(read, user);
}

#[test]
fn written_columns_keep_field_order() {
    let orm = Orm::new();
    let values = assert_ok!(orm.write(&ada()));

    assert_eq!(
        values.columns().collect::<Vec<_>>(),
        assert_ok!(orm.writable_columns::<User>())
    );
}

#[test]
fn null_columns_read_as_none() {
    let orm = Orm::new();
    let mut values = assert_ok!(orm.write(&ada()));
    values.put("NICKNAME", Value::Null);

    let read: User = assert_ok!(orm.read(&values));
    assert_none!(read.nickname);
    assert_none!(read.level);
}

#[test]
fn null_in_a_non_nullable_column_fails() {
    let orm = Orm::new();
    let mut values = assert_ok!(orm.write(&ada()));
    values.put("AGE", Value::Null);

    let err = assert_err!(orm.read::<User>(&values));
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert Null to i32");
}

#[test]
fn missing_column_fails_the_read() {
    let orm = Orm::new();
    let mut values = assert_ok!(orm.write(&ada()));
    values.remove("SCORE");

    let err = assert_err!(orm.read::<User>(&values));
    assert!(err.is_column_not_found());
    assert_eq!(err.to_string(), "column `SCORE` not found in row");
}

#[test]
fn read_into_keeps_fields_populated_before_a_failure() {
    let orm = Orm::new();
    let mut values = assert_ok!(orm.write(&ada()));
    values.remove("AGE");

    let mut user = User::default();
    assert_err!(orm.read_into(&values, &mut user));

    assert_eq!(user.id, 1);
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.age, 0);
    assert_eq!(user.score, 0.0);
}

#[test]
fn read_into_overwrites_an_existing_record() {
    let orm = Orm::new();
    let values = assert_ok!(orm.write(&ada()));

    let mut user = User {
        id: 99,
        level: Some(3),
        ..User::default()
    };
    let read = assert_ok!(orm.read_into(&values, &mut user));
    read.age += 1;

    assert_eq!(user.id, 1);
    assert_eq!(user.level, None);
    assert_eq!(user.age, 37);
}

#[test]
fn read_all_reads_every_row() {
    let orm = Orm::new();
    let columns = assert_ok!(orm.projection::<User>());

    let mut rows = MemRows::new(columns);
    for id in 1..=3 {
        let mut user = ada();
        user.id = id;
        let values = assert_ok!(orm.write(&user));
        rows.push(values.into_iter().map(|(_, value)| value));
    }

    let users: Vec<User> = assert_ok!(orm.read_all(&mut rows));
    assert_eq!(
        users.iter().map(|user| user.id).collect::<Vec<_>>(),
        [1, 2, 3]
    );
}

#[test]
fn read_all_on_empty_or_absent_source() {
    let orm = Orm::new();

    let mut rows = MemRows::new(["ID"]);
    let users: Vec<User> = assert_ok!(orm.read_all(&mut rows));
    assert!(users.is_empty());

    let mut absent: Option<MemRows> = None;
    let users: Vec<User> = assert_ok!(orm.read_all(&mut absent));
    assert!(users.is_empty());
}

#[test]
fn read_all_on_empty_values() {
    #[derive(Debug, Default, Record)]
    struct Transient {
        #[rowmap(ignore)]
        hits: u64,
    }

    let orm = Orm::new();

    let users: Vec<User> = assert_ok!(orm.read_all(&mut Values::new()));
    assert!(users.is_empty());

    let transient: Vec<Transient> = assert_ok!(orm.read_all(&mut Values::new()));
    assert!(transient.is_empty());

    let mut values = assert_ok!(orm.write(&ada()));
    let users: Vec<User> = assert_ok!(orm.read_all(&mut values));
    assert_eq!(users, [ada()]);
}

#[test]
fn read_all_stops_at_the_first_failing_row() {
    let orm = Orm::new();

    #[derive(Debug, Default, Record)]
    struct Point {
        x: i32,
    }

    let mut rows = MemRows::new(["X"])
        .with_row([Value::I32(1)])
        .with_row([Value::Null])
        .with_row([Value::I32(3)]);

    let err = assert_err!(orm.read_all::<Point, _>(&mut rows));
    assert!(err.is_type_conversion());
}

#[test]
fn reader_reuses_its_plan() {
    let orm = Orm::new();
    let reader = assert_ok!(orm.reader::<User>());
    let values = assert_ok!(orm.write(&ada()));

    assert_eq!(assert_ok!(reader.read(&values)), ada());
    assert!(std::sync::Arc::ptr_eq(
        reader.plan(),
        &assert_ok!(orm.plan::<User>())
    ));
}

#[test]
fn column_reader_reads_a_single_column() {
    let orm = Orm::new();
    let values: Values = [("ID", Value::I64(7)), ("NAME", Value::Null)]
        .into_iter()
        .collect();

    let id = assert_ok!(orm.column("ID").of::<i64>());
    assert_eq!(id.column(), "ID");
    assert_eq!(assert_ok!(id.read(&values)), 7);

    let name = assert_ok!(orm.column("NAME").of::<Option<String>>());
    assert_eq!(assert_ok!(name.read(&values)), None);

    let missing = assert_ok!(orm.column("AGE").of::<i32>());
    assert!(assert_err!(missing.read(&values)).is_column_not_found());
}

#[test]
fn column_reader_fails_fast_without_an_adapter() {
    let orm = Orm::new();

    let err = assert_err!(orm.column("ID").of::<u64>());
    assert!(err.is_unsupported_type());
    assert_eq!(err.to_string(), "no type adapter registered for `u64`");
}

#[test]
fn integer_columns_widen_into_wider_fields() {
    let orm = Orm::new();
    let mut values = assert_ok!(orm.write(&ada()));
    values.put("ID", Value::I16(5));
    values.put("SCORE", Value::I32(4));

    let read: User = assert_ok!(orm.read(&values));
    assert_eq!(read.id, 5);
    assert_eq!(read.score, 4.0);
}
