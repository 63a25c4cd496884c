//! Shared infrastructure for the rowtext crates.
//!
//! This crate provides:
//! - Configuration management (glyphs, width mode, default encoding, logging)
//! - Telemetry setup with `tracing`
//! - The named codec registry used by byte-oriented sinks

pub mod codec;
pub mod config;
pub mod telemetry;

// Re-export commonly used types
pub use codec::{
    lookup, AsciiCodec, Codec, CodecRegistry, EncodingError, Latin1Codec, Utf16Codec, WhatwgCodec,
};
pub use config::{ExportConfig, TelemetryConfig};
pub use telemetry::{init_from_config, init_tracing};

/// Common error type used for configuration and setup
pub type Result<T> = std::result::Result<T, anyhow::Error>;
