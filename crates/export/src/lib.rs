//! rowtext text exporter
//!
//! Renders a [`Table`] as an ASCII-art grid and sends it to a sink.
//!
//! ```text
//! +----+--------------+------------+
//! | id |   username   |  birthday  |
//! +----+--------------+------------+
//! |  1 |      turicas | 1987-04-29 |
//! |  3 |       álvaro | 1900-01-01 |
//! +----+--------------+------------+
//! ```
//!
//! Pipeline: cell formatting ([`format`]), column widths ([`width`]), grid
//! drawing ([`grid`]), output ([`sink`]).
//!
//! # Examples
//!
//! ```
//! use rowtext_domain::{RenderGlyphs, RenderOptions, Table, Value};
//! use rowtext_export::{Destination, ExportExt};
//!
//! let mut table = Table::new(["id", "name"]).unwrap();
//! table.append(vec![Value::from(1), Value::from("ana")]).unwrap();
//!
//! let text = table.to_text();
//! assert_eq!(text.lines().nth(3), Some("|  1 |  ana |"));
//!
//! let options = RenderOptions::with_glyphs(RenderGlyphs::default().with_vertical('*'));
//! let mut buffer = Vec::<u8>::new();
//! table
//!     .export_to_text(Destination::from(&mut buffer), Some("utf-8"), &options)
//!     .unwrap();
//! assert!(buffer.starts_with(b"+----+"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod format;
pub mod grid;
pub mod sink;
pub mod width;

pub use errors::{ExportError, ExportResult};
pub use format::format_cell;
pub use grid::GridRenderer;
pub use sink::{
    export_to_text, render, render_bytes, render_to_path, render_to_writer, Destination,
    ExportOutput, TextExporter,
};
pub use width::{column_widths, display_width};

use rowtext_domain::{RenderOptions, Table};

/// Export methods on [`Table`]
pub trait ExportExt {
    /// Render with default glyphs as text
    fn to_text(&self) -> String;

    /// Render and route to `destination`; see [`TextExporter::export`]
    fn export_to_text(
        &self,
        destination: Destination<'_>,
        encoding: Option<&str>,
        options: &RenderOptions,
    ) -> ExportResult<ExportOutput>;
}

impl ExportExt for Table {
    fn to_text(&self) -> String {
        render(self, &RenderOptions::default())
    }

    fn export_to_text(
        &self,
        destination: Destination<'_>,
        encoding: Option<&str>,
        options: &RenderOptions,
    ) -> ExportResult<ExportOutput> {
        sink::export_to_text(self, destination, encoding, options)
    }
}
