//! Rendering options shared by the exporter and the configuration layer.

use serde::{Deserialize, Serialize};

/// Border characters used when drawing the grid
///
/// Each glyph is a single character and can be overridden on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderGlyphs {
    /// Horizontal line character
    pub horizontal: char,

    /// Vertical column separator
    pub vertical: char,

    /// Corner and junction character
    pub junction: char,
}

impl RenderGlyphs {
    /// Glyph set with every character given explicitly
    pub const fn new(horizontal: char, vertical: char, junction: char) -> Self {
        Self {
            horizontal,
            vertical,
            junction,
        }
    }

    /// Override the horizontal line character
    pub fn with_horizontal(mut self, horizontal: char) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Override the vertical separator character
    pub fn with_vertical(mut self, vertical: char) -> Self {
        self.vertical = vertical;
        self
    }

    /// Override the junction character
    pub fn with_junction(mut self, junction: char) -> Self {
        self.junction = junction;
        self
    }
}

impl Default for RenderGlyphs {
    fn default() -> Self {
        Self::new('-', '|', '+')
    }
}

/// How the display width of a cell is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthMode {
    /// One unit per user-perceived character (extended grapheme cluster)
    #[default]
    Graphemes,

    /// Terminal columns; wide East Asian characters count as two
    Columns,
}

impl std::str::FromStr for WidthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "graphemes" => Ok(Self::Graphemes),
            "columns" => Ok(Self::Columns),
            other => Err(format!("Unknown width mode: {}", other)),
        }
    }
}

/// Everything the grid renderer needs besides the table itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Border glyphs
    pub glyphs: RenderGlyphs,

    /// Cell width measurement
    pub width_mode: WidthMode,
}

impl RenderOptions {
    /// Options with custom glyphs and the default width mode
    pub fn with_glyphs(glyphs: RenderGlyphs) -> Self {
        Self {
            glyphs,
            ..Self::default()
        }
    }

    /// Replace the width mode
    pub fn width_mode(mut self, width_mode: WidthMode) -> Self {
        self.width_mode = width_mode;
        self
    }
}
