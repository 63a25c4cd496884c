//! Export error types

use rowtext_common::EncodingError;

/// Errors raised by the output sinks
///
/// Rendering itself never fails; every variant comes from argument checks,
/// encoding, or the destination.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The call's arguments do not fit together
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Codec lookup or conversion failed
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// The file or stream could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Encoding(_) => "ENCODING_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;
