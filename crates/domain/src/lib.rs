//! rowtext domain types
//!
//! This crate provides the in-memory table model that the text exporter
//! renders, along with the rendering options shared with the configuration
//! layer.
//!
//! ## Architecture
//!
//! - **value**: typed cell values (numbers, text, dates)
//! - **table**: ordered unique fields and fixed-arity rows
//! - **layout**: border glyphs, width measurement mode, render options
//! - **errors**: table construction errors
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rowtext_domain::{Table, Value};
//!
//! let mut table = Table::new(["id", "username", "birthday"]).unwrap();
//! table
//!     .append(vec![
//!         Value::from(1),
//!         Value::from("turicas"),
//!         Value::from(NaiveDate::from_ymd_opt(1987, 4, 29).unwrap()),
//!     ])
//!     .unwrap();
//! assert_eq!(table.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod layout;
pub mod table;
pub mod value;

pub use errors::{TableError, TableResult};
pub use layout::{RenderGlyphs, RenderOptions, WidthMode};
pub use table::{Row, Table};
pub use value::Value;
