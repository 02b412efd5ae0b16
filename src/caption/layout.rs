//! Caption layout planning.
//!
//! Combines the font sizer, the line wrapper, and the bar arithmetic into a
//! [`LayoutPlan`]: the full set of dimensions and line groupings needed to
//! render a caption bar consistently between measurement and drawing.

use super::calculations::{self, SIDE_MARGIN};
use super::measure::TextMeasurer;
use super::wrap::wrap_caption;

/// Computed dimensions and wrapped lines for one caption overlay.
///
/// For a plan produced by [`plan_layout`]:
/// - `canvas_width == source_width`
/// - `canvas_height == source_height + bar_height`
/// - `bar_height == lines.len() * line_height + 40`
/// - `line_height == round(font_size * 1.3)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    pub font_size: u32,
    /// Wrapped caption lines in reading order; never empty.
    pub lines: Vec<String>,
    pub line_height: u32,
    pub bar_height: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

/// Plan the caption bar for a source image of the given dimensions.
///
/// Pure: identical inputs always produce an identical plan.
pub fn plan_layout(
    source_width: u32,
    source_height: u32,
    caption: &str,
    max_font_size: u32,
    min_font_size: u32,
    measurer: &impl TextMeasurer,
) -> LayoutPlan {
    let font_size =
        calculations::font_size_for_caption(caption.chars().count(), max_font_size, min_font_size);
    let available = source_width.saturating_sub(SIDE_MARGIN);
    let lines = wrap_caption(caption, available, font_size, measurer);
    let line_height = calculations::line_height(font_size);
    let bar_height = calculations::bar_height(lines.len(), line_height);

    LayoutPlan {
        font_size,
        lines,
        line_height,
        bar_height,
        canvas_width: source_width,
        canvas_height: source_height + bar_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caption::measure::tests::FixedAdvance;

    const M: FixedAdvance = FixedAdvance(10);

    #[test]
    fn single_line_plan() {
        // "Hello World" = 11 chars -> font 48; 110 px < 460 available
        let plan = plan_layout(500, 500, "Hello World", 48, 24, &M);
        assert_eq!(plan.font_size, 48);
        assert_eq!(plan.lines, vec!["Hello World"]);
        assert_eq!(plan.line_height, 62);
        assert_eq!(plan.bar_height, 102);
        assert_eq!(plan.canvas_width, 500);
        assert_eq!(plan.canvas_height, 602);
    }

    #[test]
    fn empty_caption_still_gets_a_bar() {
        let plan = plan_layout(500, 500, "", 48, 24, &M);
        assert_eq!(plan.font_size, 48);
        assert_eq!(plan.lines, vec![""]);
        assert_eq!(plan.bar_height, 102);
        assert_eq!(plan.canvas_height, 602);
    }

    #[test]
    fn long_caption_shrinks_font_and_wraps() {
        // 60 chars -> font 33; at 10 px/char the words can't all fit 160 px
        let caption = "The quick brown fox jumps over the lazy dog by the riverside";
        assert_eq!(caption.chars().count(), 60);

        let plan = plan_layout(200, 300, caption, 48, 24, &M);
        assert_eq!(plan.font_size, 33);
        assert!(plan.lines.len() >= 2);
        assert_eq!(plan.line_height, 43);
        assert_eq!(plan.bar_height, plan.lines.len() as u32 * 43 + 40);
        assert_eq!(plan.canvas_height, 300 + plan.bar_height);
    }

    #[test]
    fn dimension_invariants_hold_across_inputs() {
        for (w, h, caption) in [
            (500, 500, "Hello World"),
            (120, 80, "a few words wrapped tightly"),
            (1920, 1080, ""),
            (39, 100, "narrower than the margin"),
        ] {
            let plan = plan_layout(w, h, caption, 48, 24, &M);
            assert_eq!(plan.canvas_width, w);
            assert_eq!(plan.canvas_height, h + plan.bar_height);
            assert_eq!(
                plan.bar_height,
                plan.lines.len() as u32 * plan.line_height + 40
            );
            assert!(!plan.lines.is_empty());
        }
    }

    #[test]
    fn plans_are_deterministic() {
        let a = plan_layout(640, 480, "same caption twice", 48, 24, &M);
        let b = plan_layout(640, 480, "same caption twice", 48, 24, &M);
        assert_eq!(a, b);
    }

    #[test]
    fn font_size_counts_characters_not_bytes() {
        // 31 multi-byte characters: still over the 30-char threshold only
        // by one, so no reduction yet.
        let caption = "å".repeat(31);
        let plan = plan_layout(500, 500, &caption, 48, 24, &M);
        assert_eq!(plan.font_size, 48);
    }
}
