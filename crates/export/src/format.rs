//! Cell formatting

use rowtext_domain::{Table, Value};
use std::borrow::Cow;

/// Canonical display text of a value
///
/// Text is borrowed as-is unless it holds a line break: `\n` and `\r` are
/// written as the two-character escapes so every row stays on one line.
/// Everything else is rendered without any locale-sensitive formatting.
pub fn format_cell(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Integer(n) => Cow::Owned(n.to_string()),
        // Debug keeps the fractional part of integral floats ("1.0")
        Value::Float(f) => Cow::Owned(format!("{:?}", f)),
        Value::Text(s) => escape_line_breaks(s),
        Value::Date(d) => Cow::Owned(d.format("%Y-%m-%d").to_string()),
        Value::DateTime(dt) => Cow::Owned(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
    }
}

fn escape_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Format every cell of the table, row by row
pub fn format_rows(table: &Table) -> Vec<Vec<Cow<'_, str>>> {
    table
        .rows()
        .iter()
        .map(|row| row.iter().map(format_cell).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_numbers() {
        assert_eq!(format_cell(&Value::Integer(-42)), "-42");
        assert_eq!(format_cell(&Value::Float(1.0)), "1.0");
        assert_eq!(format_cell(&Value::Float(0.25)), "0.25");
        assert_eq!(format_cell(&Value::Float(f64::NAN)), "NaN");
        assert_eq!(format_cell(&Value::Float(f64::NEG_INFINITY)), "-inf");
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        assert_eq!(format_cell(&Value::Date(date)), "1900-01-01");

        let dt = date.and_hms_opt(7, 5, 3).unwrap();
        assert_eq!(format_cell(&Value::DateTime(dt)), "1900-01-01 07:05:03");
    }

    #[test]
    fn test_text_is_borrowed() {
        let value = Value::from("álvaro");
        assert!(matches!(format_cell(&value), Cow::Borrowed("álvaro")));
    }

    #[test]
    fn test_line_breaks_are_escaped() {
        let value = Value::from("first\r\nsecond\n");
        assert_eq!(format_cell(&value), r"first\r\nsecond\n");
        assert!(matches!(format_cell(&value), Cow::Owned(_)));
    }

    #[test]
    fn test_null_and_bool() {
        assert_eq!(format_cell(&Value::Null), "");
        assert_eq!(format_cell(&Value::Bool(false)), "false");
    }

    #[test]
    fn test_format_rows_keeps_order() {
        let mut table = Table::new(["a", "b"]).unwrap();
        table.append(vec![Value::from(1), Value::from("x")]).unwrap();
        table.append(vec![Value::from(2), Value::Null]).unwrap();

        let rows = format_rows(&table);
        assert_eq!(rows, vec![vec!["1", "x"], vec!["2", ""]]);
    }
}
