//! Tests for Table construction and row invariants

use chrono::NaiveDate;
use proptest::prelude::*;
use rowtext_domain::{Table, TableError, Value};

fn date(y: i32, m: u32, d: u32) -> Value {
    Value::from(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

#[test]
fn test_heterogeneous_rows() {
    let mut table = Table::new(["id", "username", "birthday"]).unwrap();
    table
        .extend(vec![
            vec![Value::from(1), Value::from("turicas"), date(1987, 4, 29)],
            vec![Value::from(2), Value::from("another-user"), date(2000, 1, 1)],
            vec![Value::from(3), Value::from("álvaro"), date(1900, 1, 1)],
        ])
        .unwrap();

    assert_eq!(table.len(), 3);
    let ids: Vec<&Value> = table.column("id").unwrap().collect();
    assert_eq!(ids, vec![&Value::Integer(1), &Value::Integer(2), &Value::Integer(3)]);
    assert_eq!(table.row(2).unwrap()[1].as_text(), Some("álvaro"));
}

#[test]
fn test_table_without_fields() {
    let mut table = Table::new(Vec::<String>::new()).unwrap();
    assert_eq!(table.field_count(), 0);
    table.append(Vec::<Value>::new()).unwrap();
    assert_eq!(table.len(), 1);
    assert!(table.append(vec![Value::Null]).is_err());
}

#[test]
fn test_duplicate_field_error_message() {
    let err = Table::new(["a", "a"]).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate field name: a");
}

#[test]
fn test_value_serialization() {
    let json = serde_json::to_string(&date(1987, 4, 29)).unwrap();
    assert_eq!(json, r#"{"type":"date","value":"1987-04-29"}"#);

    let value: Value = serde_json::from_str(r#"{"type":"integer","value":42}"#).unwrap();
    assert_eq!(value, Value::Integer(42));
}

proptest! {
    #[test]
    fn test_append_accepts_only_matching_arity(fields in 0usize..6, values in 0usize..6) {
        let names: Vec<String> = (0..fields).map(|i| format!("f{}", i)).collect();
        let mut table = Table::new(names).unwrap();
        let result = table.append((0..values).map(|i| i as i64));

        if fields == values {
            prop_assert!(result.is_ok());
            prop_assert_eq!(table.len(), 1);
        } else {
            prop_assert_eq!(
                result,
                Err(TableError::ArityMismatch { expected: fields, actual: values })
            );
            prop_assert!(table.is_empty());
        }
    }
}
