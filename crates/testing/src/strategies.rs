//! Proptest strategies for values and tables.

use chrono::NaiveDate;
use proptest::collection::{hash_set, vec};
use proptest::prelude::*;
use rowtext_domain::{Table, Value};

/// Any renderable value, including non-ASCII text, embedded line breaks and dates
pub fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        (-1.0e9f64..1.0e9).prop_map(Value::Float),
        "[a-zA-Z0-9 _-]{0,12}".prop_map(Value::Text),
        "[a-zñáéíóú]{0,8}".prop_map(Value::Text),
        "[a-z\r\n]{0,6}".prop_map(Value::Text),
        (1i32..9999, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
            Value::Date(NaiveDate::from_ymd_opt(y, m, d).expect("day 1..=28 is always valid"))
        }),
    ]
}

/// Tables with 1..=5 unique fields and 0..8 rows
pub fn table() -> impl Strategy<Value = Table> {
    hash_set("[a-z][a-z0-9_]{0,9}", 1..=5)
        .prop_flat_map(|names| {
            let names: Vec<String> = names.into_iter().collect();
            let arity = names.len();
            (Just(names), vec(vec(value(), arity), 0..8))
        })
        .prop_map(|(names, rows)| {
            let mut table = Table::new(names).expect("hash_set names are unique");
            table.extend(rows).expect("rows are generated with the table's arity");
            table
        })
}
