//! Configuration management for the exporter.
//!
//! Settings are layered from built-in defaults, an optional TOML file, and
//! environment variables.
//!
//! ## Example Configuration
//!
//! ```toml
//! default_encoding = "utf-8"
//! width_mode = "graphemes"
//!
//! [glyphs]
//! horizontal = "-"
//! vertical = "|"
//! junction = "+"
//!
//! [telemetry]
//! log_level = "info"
//! json_format = false
//! ```

use crate::codec::CodecRegistry;
use anyhow::{Context, Result};
use rowtext_domain::{RenderGlyphs, RenderOptions, WidthMode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Default location of the configuration file, without extension
pub const DEFAULT_CONFIG_FILE: &str = "config/rowtext";

/// Prefix for environment overrides, e.g. `ROWTEXT__GLYPHS__VERTICAL=*`
pub const ENV_PREFIX: &str = "ROWTEXT";

/// Main exporter configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Border glyphs
    pub glyphs: RenderGlyphs,

    /// Cell width measurement
    pub width_mode: WidthMode,

    /// Encoding used for byte-oriented sinks when the caller names none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_encoding: Option<String>,

    /// Logging settings
    pub telemetry: TelemetryConfig,
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Log filter directive (trace, debug, info, warn, error, or target=level)
    pub log_level: String,

    /// Enable JSON logging format
    pub json_format: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_format: false,
        }
    }
}

impl ExportConfig {
    /// Load configuration from the default file and the environment.
    ///
    /// The configuration is loaded in the following order (later sources override earlier ones):
    /// 1. Default values
    /// 2. config/rowtext.toml (if exists)
    /// 3. Environment variables (prefixed with ROWTEXT__)
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rowtext_common::config::ExportConfig;
    ///
    /// let config = ExportConfig::load().expect("Failed to load configuration");
    /// println!("Junction glyph: {}", config.glyphs.junction);
    /// ```
    pub fn load() -> Result<Self> {
        Self::build(config::File::with_name(DEFAULT_CONFIG_FILE).required(false))
    }

    /// Load configuration from an explicit file plus the environment
    ///
    /// Unlike [`ExportConfig::load`], the file must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Self::build(config::File::from(path).required(true))
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    /// Parse an inline TOML document, without environment overrides
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()
            .context("Failed to build configuration")?;

        Self::finish(config)
    }

    fn build<S>(file: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            // Example: ROWTEXT__GLYPHS__JUNCTION=#
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()
            .context("Failed to build configuration")?;

        Self::finish(config)
    }

    fn finish(config: config::Config) -> Result<Self> {
        let export_config: ExportConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        export_config.validate()?;

        Ok(export_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (name, glyph) in [
            ("horizontal", self.glyphs.horizontal),
            ("vertical", self.glyphs.vertical),
            ("junction", self.glyphs.junction),
        ] {
            if glyph.is_control() {
                anyhow::bail!("Glyph '{}' must be a printable character", name);
            }
        }

        if let Some(encoding) = &self.default_encoding {
            CodecRegistry::new()
                .resolve(encoding)
                .with_context(|| format!("Invalid default encoding '{}'", encoding))?;
        }

        EnvFilter::try_new(&self.telemetry.log_level)
            .with_context(|| format!("Invalid log level '{}'", self.telemetry.log_level))?;

        Ok(())
    }

    /// Rendering options described by this configuration
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::with_glyphs(self.glyphs).width_mode(self.width_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = ExportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.render_options(), RenderOptions::default());
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn test_from_toml_str_partial_glyphs() {
        let config = ExportConfig::from_toml_str(
            r#"
            width_mode = "columns"
            default_encoding = "iso-8859-1"

            [glyphs]
            vertical = "*"
            "#,
        )
        .unwrap();

        assert_eq!(config.glyphs, RenderGlyphs::new('-', '*', '+'));
        assert_eq!(config.width_mode, WidthMode::Columns);
        assert_eq!(config.default_encoding.as_deref(), Some("iso-8859-1"));
    }

    #[test]
    fn test_rejects_unknown_encoding() {
        let result = ExportConfig::from_toml_str(r#"default_encoding = "klingon""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_control_glyph() {
        let config = ExportConfig {
            glyphs: RenderGlyphs::default().with_junction('\n'),
            ..ExportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_multi_character_glyph() {
        let result = ExportConfig::from_toml_str("[glyphs]\nhorizontal = \"==\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let result = ExportConfig::from_toml_str("[telemetry]\nlog_level = \"rowtext=loud\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[glyphs]\njunction = \"#\"\n\n[telemetry]\njson_format = true").unwrap();

        let config = ExportConfig::load_from(file.path()).unwrap();
        assert_eq!(config.glyphs.junction, '#');
        assert!(config.telemetry.json_format);
    }

    #[test]
    fn test_load_from_missing_file() {
        assert!(ExportConfig::load_from("does/not/exist.toml").is_err());
    }
}
