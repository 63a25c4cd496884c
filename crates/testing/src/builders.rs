//! Fluent builder for constructing test tables.

use rowtext_domain::{Row, Table, Value};

/// Builder for creating Table test instances
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    fields: Vec<String>,
    rows: Vec<Row>,
}

impl TableBuilder {
    /// Empty builder: no fields, no rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one field name
    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    /// Append several field names in order
    pub fn with_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(names.into_iter().map(Into::into));
        self
    }

    /// Append a row; each item is converted with `Into<Value>`
    pub fn with_row<I, V>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Panics if the fields repeat or a row has the wrong arity
    pub fn build(self) -> Table {
        let mut table = Table::new(self.fields).expect("builder fields must be unique");
        table.extend(self.rows).expect("builder rows must match the fields");
        table
    }
}
