//! Caption style configuration.
//!
//! Handles loading and validating a `capstrip.toml` style file. Config
//! files are sparse — override just the values you want:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! max_font_size = 48        # For captions up to 30 characters
//! min_font_size = 24        # Floor for very long captions
//! text_color = "#ffffff"    # Caption text color
//! bar_color = "#000000"     # Bar fill color
//! # font = "fonts/Face.ttf" # TTF/OTF path; bundled DejaVu Sans if unset
//! ```
//!
//! Unknown keys are rejected to catch typos early. [`StyleConfig`] is the
//! parsed file; [`StyleConfig::to_style`] resolves it into a render-ready
//! [`CaptionStyle`] by parsing colors and loading the font face.

use image::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::caption::{CaptionFont, CaptionStyle, FontError};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Font(#[from] FontError),
}

/// Caption style configuration loaded from `capstrip.toml`.
///
/// All fields have defaults; user files need only the overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Font size for captions up to 30 characters. Longer captions step
    /// down from here, one pixel per two extra characters.
    pub max_font_size: u32,
    /// Smallest font size the sizer will use.
    pub min_font_size: u32,
    /// Caption text color as `#rrggbb`.
    pub text_color: String,
    /// Bar fill color as `#rrggbb`.
    pub bar_color: String,
    /// Path to a TTF/OTF font file. When absent, the bundled DejaVu Sans
    /// is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            max_font_size: 48,
            min_font_size: 24,
            text_color: "#ffffff".to_string(),
            bar_color: "#000000".to_string(),
            font: None,
        }
    }
}

impl StyleConfig {
    /// Resolve into a render-ready [`CaptionStyle`].
    ///
    /// Validates size bounds, parses both colors, and loads the configured
    /// font face (or the bundled default).
    pub fn to_style(&self) -> Result<CaptionStyle, ConfigError> {
        if self.min_font_size == 0 {
            return Err(ConfigError::Validation(
                "min_font_size must be at least 1".into(),
            ));
        }
        if self.min_font_size > self.max_font_size {
            return Err(ConfigError::Validation(format!(
                "min_font_size ({}) must not exceed max_font_size ({})",
                self.min_font_size, self.max_font_size
            )));
        }

        let text_color = parse_color(&self.text_color, "text_color")?;
        let bar_color = parse_color(&self.bar_color, "bar_color")?;
        let font = match &self.font {
            Some(path) => CaptionFont::from_path(path)?,
            None => CaptionFont::bundled(),
        };

        Ok(CaptionStyle {
            max_font_size: self.max_font_size,
            min_font_size: self.min_font_size,
            text_color,
            bar_color,
            font,
        })
    }
}

/// Load a style config from a TOML file.
///
/// Rejects unknown keys; the result still needs [`StyleConfig::to_style`]
/// to resolve colors and the font.
pub fn load_config(path: &Path) -> Result<StyleConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: StyleConfig = toml::from_str(&content)?;
    Ok(config)
}

fn parse_color(value: &str, key: &str) -> Result<Rgb<u8>, ConfigError> {
    parse_hex_color(value).ok_or_else(|| {
        ConfigError::Validation(format!("{key} is not a #rrggbb color: {value:?}"))
    })
}

/// Parse a `#rrggbb` hex color.
fn parse_hex_color(value: &str) -> Option<Rgb<u8>> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb([r, g, b]))
}

/// Returns a fully-commented stock `capstrip.toml` with all keys documented.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Capstrip Style Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Font size (px) for captions up to 30 characters. Longer captions step
# down one pixel per two extra characters.
max_font_size = 48

# The sizer never goes below this, however long the caption gets.
min_font_size = 24

# Caption text color, #rrggbb.
text_color = "#ffffff"

# Bar fill color, #rrggbb.
bar_color = "#000000"

# Path to a TTF or OTF font file. When unset, a bundled DejaVu Sans is
# used, so captioning works with no fonts installed.
# font = "fonts/Face.ttf"
"##
}
