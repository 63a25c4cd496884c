//! Error types for table construction.
//!
//! Rendering never fails on a well-formed table, so every structural problem
//! is rejected here, while the table is being built.

/// Errors raised while building or querying a [`Table`](crate::table::Table)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The same field name was given twice
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    /// A row's length does not match the number of fields
    #[error("Row has {actual} values but the table has {expected} fields")]
    ArityMismatch {
        /// Number of fields in the table
        expected: usize,
        /// Number of values in the rejected row
        actual: usize,
    },

    /// A field lookup by name found nothing
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

impl TableError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateField(_) => "DUPLICATE_FIELD",
            Self::ArityMismatch { .. } => "ARITY_MISMATCH",
            Self::UnknownField(_) => "UNKNOWN_FIELD",
        }
    }
}

/// Result type alias for table operations
pub type TableResult<T> = Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TableError::DuplicateField("id".into()).error_code(), "DUPLICATE_FIELD");
        assert_eq!(
            TableError::ArityMismatch { expected: 3, actual: 2 }.error_code(),
            "ARITY_MISMATCH"
        );
        assert_eq!(TableError::UnknownField("x".into()).error_code(), "UNKNOWN_FIELD");
    }

    #[test]
    fn test_arity_message() {
        let err = TableError::ArityMismatch { expected: 3, actual: 2 };
        assert_eq!(err.to_string(), "Row has 2 values but the table has 3 fields");
    }
}
