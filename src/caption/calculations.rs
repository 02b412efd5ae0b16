//! Pure calculation functions for caption layout.
//!
//! All functions here are pure and testable without any fonts or images.

/// Total horizontal margin reserved around caption text, in pixels.
///
/// Wrapped lines must fit within `canvas_width - SIDE_MARGIN`.
pub const SIDE_MARGIN: u32 = 40;

/// Vertical padding above and below the caption text block, in pixels.
pub const BAR_PADDING: u32 = 20;

/// Choose a font size for a caption based on its character count.
///
/// Captions up to 30 characters get `max_font_size`. Longer captions step
/// down one pixel per two extra characters, never falling below
/// `min_font_size`:
///
/// ```
/// # use capstrip::caption::calculations::font_size_for_caption;
/// assert_eq!(font_size_for_caption(11, 48, 24), 48);
/// assert_eq!(font_size_for_caption(60, 48, 24), 33);
/// assert_eq!(font_size_for_caption(500, 48, 24), 24);
/// ```
pub fn font_size_for_caption(caption_len: usize, max_font_size: u32, min_font_size: u32) -> u32 {
    if caption_len <= 30 {
        return max_font_size;
    }
    let reduction = ((caption_len - 30) / 2) as u32;
    max_font_size.saturating_sub(reduction).max(min_font_size)
}

/// Vertical advance between caption lines: the font size plus 30% leading.
pub fn line_height(font_size: u32) -> u32 {
    (font_size as f32 * 1.3).round() as u32
}

/// Height of the caption bar: one advance per line plus padding above and
/// below the text block.
pub fn bar_height(line_count: usize, line_height: u32) -> u32 {
    line_count as u32 * line_height + 2 * BAR_PADDING
}

/// Horizontal offset that centers a rendered line on the canvas.
///
/// Negative when the line is wider than the canvas (a single word that
/// exceeds the available width) — the line then overflows both margins
/// instead of being truncated.
pub fn centered_x(canvas_width: u32, line_width: u32) -> i32 {
    (canvas_width as i32 - line_width as i32) / 2
}

/// Vertical offset of the line at `index` within the caption bar.
///
/// The bar starts directly below the source image, so line 0 sits at
/// `source_height + BAR_PADDING`.
pub fn line_y(source_height: u32, line_height: u32, index: usize) -> i32 {
    (source_height + BAR_PADDING) as i32 + index as i32 * line_height as i32
}
