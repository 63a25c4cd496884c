//! In-memory table: ordered unique fields and ordered rows.

use crate::errors::{TableError, TableResult};
use crate::value::Value;
use indexmap::IndexSet;
use serde::Serialize;

/// One row of a table, positionally aligned to the table's fields
pub type Row = Vec<Value>;

/// Ordered collection of named fields and rows of typed values
///
/// Every row has exactly one value per field. The table is built by the
/// caller (construct, then append) and is only borrowed while rendering.
///
/// # Example
/// ```
/// # use rowtext_domain::{Table, Value};
/// let mut table = Table::new(["id", "username"]).unwrap();
/// table.append(vec![Value::from(1), Value::from("turicas")]).unwrap();
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.field_index("username"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    fields: IndexSet<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given field names
    ///
    /// Fails with [`TableError::DuplicateField`] if a name repeats.
    pub fn new<I, S>(fields: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::new();
        for field in fields {
            let field = field.into();
            if set.contains(&field) {
                return Err(TableError::DuplicateField(field));
            }
            set.insert(field);
        }

        Ok(Self {
            fields: set,
            rows: Vec::new(),
        })
    }

    /// Append one row
    ///
    /// Fails with [`TableError::ArityMismatch`] if the row does not have one
    /// value per field; the table is left unchanged in that case.
    pub fn append<I, V>(&mut self, row: I) -> TableResult<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let row: Row = row.into_iter().map(Into::into).collect();
        if row.len() != self.fields.len() {
            return Err(TableError::ArityMismatch {
                expected: self.fields.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append several rows, stopping at the first malformed one
    ///
    /// Rows before the malformed one stay appended.
    pub fn extend<R, I, V>(&mut self, rows: R) -> TableResult<()>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        for row in rows {
            self.append(row)?;
        }
        Ok(())
    }

    /// Field names in order
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.fields.iter().map(String::as_str)
    }

    /// Number of fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Position of a field by name
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.get_index_of(name)
    }

    /// All rows in insertion order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at `index`, if any
    pub fn row(&self, index: usize) -> Option<&[Value]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Values of one column, top to bottom
    pub fn column(&self, name: &str) -> TableResult<impl Iterator<Item = &Value> + '_> {
        let index = self
            .field_index(name)
            .ok_or_else(|| TableError::UnknownField(name.to_string()))?;
        Ok(self.rows.iter().map(move |row| &row[index]))
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_field_order() {
        let table = Table::new(["id", "username", "birthday"]).unwrap();
        let fields: Vec<&str> = table.fields().collect();
        assert_eq!(fields, vec!["id", "username", "birthday"]);
        assert_eq!(table.field_count(), 3);
        assert!(table.is_empty());
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = Table::new(["id", "name", "id"]).unwrap_err();
        assert_eq!(err, TableError::DuplicateField("id".to_string()));
    }

    #[test]
    fn test_append_checks_arity() {
        let mut table = Table::new(["a", "b"]).unwrap();
        let err = table.append(vec![Value::from(1)]).unwrap_err();
        assert_eq!(err, TableError::ArityMismatch { expected: 2, actual: 1 });
        assert!(table.is_empty());

        table.append(vec![Value::from(1), Value::from("x")]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.row(0).unwrap()[1], Value::from("x"));
        assert!(table.row(1).is_none());
    }

    #[test]
    fn test_extend_stops_at_first_bad_row() {
        let mut table = Table::new(["n"]).unwrap();
        let result = table.extend(vec![vec![1], vec![2], vec![3, 4], vec![5]]);
        assert!(result.is_err());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_column_lookup() {
        let mut table = Table::new(["id", "name"]).unwrap();
        table
            .extend(vec![
                vec![Value::from(1), Value::from("a")],
                vec![Value::from(2), Value::from("b")],
            ])
            .unwrap();

        let names: Vec<&Value> = table.column("name").unwrap().collect();
        assert_eq!(names, vec![&Value::from("a"), &Value::from("b")]);
        assert!(matches!(table.column("missing"), Err(TableError::UnknownField(_))));
    }
}
