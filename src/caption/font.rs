//! Font loading and glyph-based text measurement.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Parse TTF/OTF | `ab_glyph::FontArc` |
//! | Measure line width | `imageproc::drawing::text_size` |
//! | Draw text | `imageproc::drawing::draw_text_mut` (see [`compose`](super::compose)) |
//!
//! The bundled default face is DejaVu Sans, embedded into the binary so
//! captioning works with no font files installed. A user-supplied face is
//! loaded from disk via [`CaptionFont::from_path`].

use ab_glyph::{FontArc, PxScale};
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

use super::measure::TextMeasurer;

static BUNDLED: LazyLock<FontArc> = LazyLock::new(|| {
    FontArc::try_from_slice(include_bytes!("../../assets/DejaVuSans.ttf"))
        .expect("embedded DejaVu Sans is a valid font")
});

#[derive(Error, Debug)]
pub enum FontError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid font data in {path}")]
    Invalid {
        path: String,
        #[source]
        source: ab_glyph::InvalidFont,
    },
}

/// A loaded font face, shared by measurement and drawing.
///
/// Cloning is cheap — the face data is reference-counted.
#[derive(Clone)]
pub struct CaptionFont {
    face: FontArc,
}

impl CaptionFont {
    /// The embedded DejaVu Sans default.
    pub fn bundled() -> Self {
        Self {
            face: BUNDLED.clone(),
        }
    }

    /// Load a TTF/OTF face from disk.
    pub fn from_path(path: &Path) -> Result<Self, FontError> {
        let data = std::fs::read(path)?;
        let face = FontArc::try_from_vec(data).map_err(|source| FontError::Invalid {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self { face })
    }

    pub(crate) fn face(&self) -> &FontArc {
        &self.face
    }

    pub(crate) fn scale(font_size: u32) -> PxScale {
        PxScale::from(font_size as f32)
    }
}

impl std::fmt::Debug for CaptionFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CaptionFont")
    }
}

impl TextMeasurer for CaptionFont {
    fn line_width(&self, line: &str, font_size: u32) -> u32 {
        imageproc::drawing::text_size(Self::scale(font_size), &self.face, line).0
    }
}
