//! High-level caption overlay operations.
//!
//! These functions combine layout planning with compositing and the final
//! PNG write. Everything up to the write is a pure function of its inputs;
//! the write is the crate's only side effect and is never retried.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use image::RgbImage;
use thiserror::Error;

use super::compose::compose;
use super::layout::{LayoutPlan, plan_layout};
use super::style::CaptionStyle;
use crate::naming;
use crate::types::CaptionResult;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PNG write failed: {0}")]
    Write(String),
}

/// Result type for overlay operations.
pub type Result<T> = std::result::Result<T, OverlayError>;

/// Compose a captioned canvas without touching the filesystem.
///
/// Returns the canvas together with the plan that produced it, so callers
/// can report layout details (font size, line count, bar height).
pub fn render_captioned(
    image: &RgbImage,
    caption: &str,
    style: &CaptionStyle,
) -> (RgbImage, LayoutPlan) {
    let plan = plan_layout(
        image.width(),
        image.height(),
        caption,
        style.max_font_size,
        style.min_font_size,
        &style.font,
    );
    let canvas = compose(image, &plan, style);
    (canvas, plan)
}

/// Overlay `caption` onto `image` and persist the result as a PNG.
///
/// Creates `output_dir` if absent (idempotent), writes
/// `captioned_<YYYYMMDD_HHMMSS>_<seq>.png` into it, and returns the
/// metadata record for the written file. Directory creation and write
/// failures surface to the caller unretried.
pub fn overlay_caption(
    image: &RgbImage,
    caption: &str,
    style: &CaptionStyle,
    user_info: Option<BTreeMap<String, String>>,
    output_dir: &Path,
) -> Result<CaptionResult> {
    let (canvas, _plan) = render_captioned(image, caption, style);

    fs::create_dir_all(output_dir)?;
    let name = naming::next_output_name();
    let path = output_dir.join(&name.filename);
    canvas
        .save_with_format(&path, image::ImageFormat::Png)
        .map_err(|e| OverlayError::Write(format!("{}: {}", path.display(), e)))?;

    Ok(CaptionResult {
        path: path.to_string_lossy().into_owned(),
        filename: name.filename,
        timestamp: name.timestamp,
        caption: caption.to_string(),
        user_info,
        image_data: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient_source(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        })
    }

    #[test]
    fn render_appends_bar_below_source() {
        let source = gradient_source(500, 500);
        let (canvas, plan) = render_captioned(&source, "Hello World", &CaptionStyle::default());

        assert_eq!(plan.font_size, 48);
        assert_eq!(plan.lines, vec!["Hello World"]);
        assert_eq!(canvas.width(), 500);
        assert_eq!(canvas.height(), 602);
    }

    #[test]
    fn render_does_not_mutate_source() {
        let source = gradient_source(200, 100);
        let before = source.clone();
        let _ = render_captioned(&source, "some caption", &CaptionStyle::default());
        assert_eq!(source.as_raw(), before.as_raw());
    }

    #[test]
    fn overlay_writes_decodable_png() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = gradient_source(300, 200);
        let style = CaptionStyle::default();

        let (canvas, _) = render_captioned(&source, "written to disk", &style);
        let result =
            overlay_caption(&source, "written to disk", &style, None, tmp.path()).unwrap();

        let written = image::open(&result.path).unwrap().to_rgb8();
        assert_eq!(written.width(), canvas.width());
        assert_eq!(written.height(), canvas.height());
        assert_eq!(written.as_raw(), canvas.as_raw());
    }

    #[test]
    fn overlay_creates_missing_output_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let nested = tmp.path().join("a/b/captioned");
        let source = gradient_source(100, 100);

        let result =
            overlay_caption(&source, "nested", &CaptionStyle::default(), None, &nested).unwrap();
        assert!(nested.join(&result.filename).exists());
    }

    #[test]
    fn result_echoes_caption_and_user_info() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = gradient_source(100, 100);
        let info = BTreeMap::from([("user_id".to_string(), "abc".to_string())]);

        let result = overlay_caption(
            &source,
            "with metadata",
            &CaptionStyle::default(),
            Some(info.clone()),
            tmp.path(),
        )
        .unwrap();

        assert_eq!(result.caption, "with metadata");
        assert_eq!(result.user_info, Some(info));
        assert_eq!(result.image_data, None);
        assert!(result.filename.starts_with("captioned_"));
        assert!(result.filename.contains(&result.timestamp));
    }

    #[test]
    fn repeat_overlays_write_distinct_files() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = gradient_source(100, 100);
        let style = CaptionStyle::default();

        let first = overlay_caption(&source, "one", &style, None, tmp.path()).unwrap();
        let second = overlay_caption(&source, "two", &style, None, tmp.path()).unwrap();

        assert_ne!(first.filename, second.filename);
        assert!(tmp.path().join(&first.filename).exists());
        assert!(tmp.path().join(&second.filename).exists());
    }

    #[test]
    fn overlay_fails_cleanly_on_unwritable_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        // A regular file where the output directory should be
        let blocked = tmp.path().join("blocked");
        std::fs::write(&blocked, b"").unwrap();

        let source = gradient_source(50, 50);
        let result = overlay_caption(&source, "nope", &CaptionStyle::default(), None, &blocked);
        assert!(result.is_err());
    }
}
