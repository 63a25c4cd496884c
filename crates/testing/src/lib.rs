//! Testing utilities for rowtext
//!
//! This crate provides:
//! - Fixture tables and their expected grids
//! - A builder for ad-hoc tables
//! - Property-based testing strategies
//!
//! # Examples
//!
//! ```
//! use rowtext_testing::{fixtures::*, builders::*};
//!
//! let table = sample_table();
//! assert_eq!(table.len(), 3);
//!
//! let custom = TableBuilder::new().with_fields(["a", "b"]).with_row(vec![1, 2]).build();
//! assert_eq!(custom.field_count(), 2);
//! ```

#![warn(missing_docs)]

pub mod builders;
pub mod fixtures;
pub mod strategies;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
