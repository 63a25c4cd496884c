//! Output sinks
//!
//! One renderer, four ways out: return the text, return encoded bytes, write
//! encoded bytes to a path, or write encoded bytes to a caller-owned writer.
//! Byte-oriented sinks always need an encoding.

use crate::errors::{ExportError, ExportResult};
use crate::grid::GridRenderer;
use rowtext_common::{CodecRegistry, ExportConfig};
use rowtext_domain::{RenderOptions, Table};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Where the rendered grid goes
pub enum Destination<'a> {
    /// Return the grid to the caller
    None,

    /// Create or truncate a file and write the encoded grid to it
    Path(PathBuf),

    /// Write the encoded grid to an open writer; the writer is not closed
    Writer(&'a mut dyn Write),
}

impl fmt::Debug for Destination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Writer(_) => write!(f, "Writer(..)"),
        }
    }
}

impl Default for Destination<'_> {
    fn default() -> Self {
        Self::None
    }
}

impl From<PathBuf> for Destination<'_> {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for Destination<'_> {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl<'a, W: Write> From<&'a mut W> for Destination<'a> {
    fn from(writer: &'a mut W) -> Self {
        Self::Writer(writer)
    }
}

/// Result of [`TextExporter::export`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutput {
    /// Rendered grid as text (no destination, no encoding)
    Text(String),

    /// Rendered grid as encoded bytes (no destination, explicit encoding)
    Bytes(Vec<u8>),

    /// Grid written to a path or writer
    Written {
        /// Number of bytes written
        bytes: usize,
    },
}

impl ExportOutput {
    /// The text, if this is a text result
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The bytes, if this is an encoded result
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// Renders tables and routes the result to a sink
#[derive(Debug, Clone, Default)]
pub struct TextExporter {
    renderer: GridRenderer,
    codecs: CodecRegistry,
    default_encoding: Option<String>,
}

impl TextExporter {
    /// Exporter with the given render options and the built-in codecs
    pub fn new(options: RenderOptions) -> Self {
        Self {
            renderer: GridRenderer::new(options),
            ..Self::default()
        }
    }

    /// Exporter described by a loaded configuration
    ///
    /// The configured default encoding is used by byte-oriented sinks when
    /// a call names no encoding. Text mode is unaffected.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            renderer: GridRenderer::new(config.render_options()),
            codecs: CodecRegistry::new(),
            default_encoding: config.default_encoding.clone(),
        }
    }

    /// Replace the codec registry
    pub fn with_codecs(mut self, codecs: CodecRegistry) -> Self {
        self.codecs = codecs;
        self
    }

    /// Render options in use
    pub fn options(&self) -> &RenderOptions {
        self.renderer.options()
    }

    /// Render the table as text
    #[instrument(skip(self, table), fields(rows = table.len(), columns = table.field_count()))]
    pub fn render(&self, table: &Table) -> String {
        self.renderer.render(table)
    }

    /// Render the table and encode it
    #[instrument(skip(self, table), fields(rows = table.len()))]
    pub fn render_bytes(&self, table: &Table, encoding: &str) -> ExportResult<Vec<u8>> {
        let codec = self.codecs.resolve(encoding)?;
        let bytes = codec.encode(&self.renderer.render(table))?;
        debug!(encoding = codec.name(), bytes = bytes.len(), "encoded grid");
        Ok(bytes)
    }

    /// Render, encode, and write the table to `path`
    ///
    /// The grid is encoded before the file is touched, so an encoding error
    /// never creates or truncates the file. An I/O error during the write
    /// can leave a partially written file behind. The file handle is closed
    /// on every path out of this function.
    #[instrument(skip(self, table, path), fields(path = %path.as_ref().display()))]
    pub fn render_to_path(
        &self,
        table: &Table,
        path: impl AsRef<Path>,
        encoding: &str,
    ) -> ExportResult<usize> {
        let bytes = self.render_bytes(table, encoding)?;

        let mut file = File::create(path.as_ref())?;
        file.write_all(&bytes)?;
        file.flush()?;

        debug!(bytes = bytes.len(), "wrote grid to file");
        Ok(bytes.len())
    }

    /// Render, encode, and write the table to an open writer
    ///
    /// The writer is flushed but stays open; it belongs to the caller.
    #[instrument(skip(self, table, writer))]
    pub fn render_to_writer<W>(&self, table: &Table, writer: &mut W, encoding: &str) -> ExportResult<usize>
    where
        W: Write + ?Sized,
    {
        let bytes = self.render_bytes(table, encoding)?;

        writer.write_all(&bytes)?;
        writer.flush()?;

        debug!(bytes = bytes.len(), "wrote grid to writer");
        Ok(bytes.len())
    }

    /// Unified entry point
    ///
    /// | destination | encoding | result                         |
    /// |-------------|----------|--------------------------------|
    /// | `None`      | none     | [`ExportOutput::Text`]          |
    /// | `None`      | given    | [`ExportOutput::Bytes`]         |
    /// | path/writer | none     | [`ExportError::InvalidArgument`] |
    /// | path/writer | given    | [`ExportOutput::Written`]       |
    ///
    /// For path and writer destinations the configured default encoding, if
    /// any, stands in for a missing one.
    pub fn export(
        &self,
        table: &Table,
        destination: Destination<'_>,
        encoding: Option<&str>,
    ) -> ExportResult<ExportOutput> {
        match destination {
            Destination::None => match encoding {
                None => Ok(ExportOutput::Text(self.render(table))),
                Some(encoding) => self.render_bytes(table, encoding).map(ExportOutput::Bytes),
            },
            Destination::Path(path) => {
                let encoding = self.require_encoding("path", encoding)?;
                let bytes = self.render_to_path(table, path, encoding)?;
                Ok(ExportOutput::Written { bytes })
            }
            Destination::Writer(writer) => {
                let encoding = self.require_encoding("writer", encoding)?;
                let bytes = self.render_to_writer(table, writer, encoding)?;
                Ok(ExportOutput::Written { bytes })
            }
        }
    }

    fn require_encoding<'s>(&'s self, destination: &str, encoding: Option<&'s str>) -> ExportResult<&'s str> {
        encoding.or(self.default_encoding.as_deref()).ok_or_else(|| {
            warn!(destination, "destination given without an encoding");
            ExportError::InvalidArgument(format!(
                "an encoding is required when exporting to a {}",
                destination
            ))
        })
    }
}

/// Render a table as text
pub fn render(table: &Table, options: &RenderOptions) -> String {
    GridRenderer::new(*options).render(table)
}

/// Render a table and encode it with the named codec
pub fn render_bytes(table: &Table, encoding: &str, options: &RenderOptions) -> ExportResult<Vec<u8>> {
    TextExporter::new(*options).render_bytes(table, encoding)
}

/// Render a table and write it, encoded, to a file
pub fn render_to_path(
    table: &Table,
    path: impl AsRef<Path>,
    encoding: &str,
    options: &RenderOptions,
) -> ExportResult<usize> {
    TextExporter::new(*options).render_to_path(table, path, encoding)
}

/// Render a table and write it, encoded, to an open writer
pub fn render_to_writer<W>(
    table: &Table,
    writer: &mut W,
    encoding: &str,
    options: &RenderOptions,
) -> ExportResult<usize>
where
    W: Write + ?Sized,
{
    TextExporter::new(*options).render_to_writer(table, writer, encoding)
}

/// Render a table and route it to `destination`; see [`TextExporter::export`]
pub fn export_to_text(
    table: &Table,
    destination: Destination<'_>,
    encoding: Option<&str>,
    options: &RenderOptions,
) -> ExportResult<ExportOutput> {
    TextExporter::new(*options).export(table, destination, encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowtext_domain::Value;

    fn small_table() -> Table {
        let mut table = Table::new(["n"]).unwrap();
        table.append(vec![Value::from("á")]).unwrap();
        table
    }

    #[test]
    fn test_text_mode_needs_no_encoding() {
        let output = export_to_text(&small_table(), Destination::None, None, &RenderOptions::default()).unwrap();
        assert_eq!(output.as_text(), Some("+---+\n| n |\n+---+\n| á |\n+---+"));
        assert_eq!(output.as_bytes(), None);
    }

    #[test]
    fn test_bytes_mode() {
        let output = export_to_text(
            &small_table(),
            Destination::None,
            Some("iso-8859-1"),
            &RenderOptions::default(),
        )
        .unwrap();
        let bytes = output.as_bytes().unwrap();
        assert!(bytes.windows(3).any(|w| w == b" \xe1 "));
    }

    #[test]
    fn test_writer_without_encoding_is_invalid() {
        let mut buffer: Vec<u8> = Vec::new();
        let err = export_to_text(
            &small_table(),
            Destination::from(&mut buffer),
            None,
            &RenderOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::InvalidArgument(_)));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_default_encoding_from_config() {
        let config = ExportConfig {
            default_encoding: Some("utf-8".to_string()),
            ..ExportConfig::default()
        };
        let exporter = TextExporter::from_config(&config);

        let mut buffer: Vec<u8> = Vec::new();
        let output = exporter
            .export(&small_table(), Destination::Writer(&mut buffer), None)
            .unwrap();
        assert_eq!(output, ExportOutput::Written { bytes: buffer.len() });
        assert_eq!(String::from_utf8(buffer).unwrap(), exporter.render(&small_table()));

        // text mode ignores the default encoding
        let output = exporter.export(&small_table(), Destination::None, None).unwrap();
        assert!(output.as_text().is_some());
    }

    #[test]
    fn test_unknown_encoding() {
        let err = render_bytes(&small_table(), "klingon", &RenderOptions::default()).unwrap_err();
        assert_eq!(err.error_code(), "ENCODING_ERROR");
    }

    #[test]
    fn test_destination_debug() {
        let mut buffer: Vec<u8> = Vec::new();
        assert_eq!(format!("{:?}", Destination::from(&mut buffer)), "Writer(..)");
        assert_eq!(format!("{:?}", Destination::default()), "None");
    }
}
