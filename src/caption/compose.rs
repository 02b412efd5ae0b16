//! Caption bar compositing.
//!
//! Allocates the output canvas, places the source image, and draws each
//! wrapped caption line centered in the bar. Pure pixel work — the only
//! side effect in the crate (the PNG write) lives in
//! [`operations`](super::operations).

use image::{RgbImage, imageops};
use imageproc::drawing::draw_text_mut;

use super::calculations::{centered_x, line_y};
use super::font::CaptionFont;
use super::layout::LayoutPlan;
use super::measure::TextMeasurer;
use super::style::CaptionStyle;

/// Render `source` onto a new canvas with the caption bar appended below.
///
/// The source is only read, never mutated. The returned canvas is
/// `plan.canvas_width × plan.canvas_height`: the bar region is filled with
/// `style.bar_color` and each line drawn centered in `style.text_color`.
/// A line wider than the canvas overflows both margins rather than being
/// truncated.
pub fn compose(source: &RgbImage, plan: &LayoutPlan, style: &CaptionStyle) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(plan.canvas_width, plan.canvas_height, style.bar_color);
    imageops::replace(&mut canvas, source, 0, 0);

    let scale = CaptionFont::scale(plan.font_size);
    for (i, line) in plan.lines.iter().enumerate() {
        let width = style.font.line_width(line, plan.font_size);
        let x = centered_x(plan.canvas_width, width);
        let y = line_y(source.height(), plan.line_height, i);
        draw_text_mut(&mut canvas, style.text_color, x, y, scale, style.font.face(), line);
    }
    canvas
}
