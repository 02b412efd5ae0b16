//! Caption styling parameters.
//!
//! [`CaptionStyle`] is the resolved, ready-to-render form: colors are
//! pixels and the font face is loaded. Parsing user input (hex strings,
//! font paths) into this form is [`config`](crate::config)'s job.

use image::Rgb;

use super::font::CaptionFont;

/// Visual parameters for a caption bar.
#[derive(Debug, Clone)]
pub struct CaptionStyle {
    /// Font size used for captions up to 30 characters.
    pub max_font_size: u32,
    /// Lower bound the sizer never goes below, however long the caption.
    pub min_font_size: u32,
    /// Caption text color.
    pub text_color: Rgb<u8>,
    /// Bar fill color.
    pub bar_color: Rgb<u8>,
    /// Face used for both measurement and drawing.
    pub font: CaptionFont,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            max_font_size: 48,
            min_font_size: 24,
            text_color: Rgb([255, 255, 255]),
            bar_color: Rgb([0, 0, 0]),
            font: CaptionFont::bundled(),
        }
    }
}
