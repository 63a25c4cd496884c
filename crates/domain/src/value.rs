//! Typed cell values.
//!
//! A row is a sequence of [`Value`]s aligned positionally to the table's
//! fields. Values in one row (and in one column) may be heterogeneous.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single typed cell value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// Missing value, rendered as an empty cell
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed integer
    Integer(i64),

    /// Floating point number
    Float(f64),

    /// Free text
    Text(String),

    /// Calendar date
    Date(NaiveDate),

    /// Date and time without a timezone
    DateTime(NaiveDateTime),
}

impl Value {
    /// Short lowercase name of the value's type
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Date(_) => "date",
            Self::DateTime(_) => "datetime",
        }
    }

    /// Whether this is [`Value::Null`]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($variant:ident, $target:ty => $($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from!(Integer, i64 => i8, i16, i32, i64, u8, u16, u32);
impl_from!(Float, f64 => f32, f64);
impl_from!(Bool, bool => bool);
impl_from!(Text, String => String, &str, &String);
impl_from!(Date, NaiveDate => NaiveDate);
impl_from!(DateTime, NaiveDateTime => NaiveDateTime);

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
