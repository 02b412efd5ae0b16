//! CLI output formatting.
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! Caption: Hello World
//!     Font: 48px, 1 line, bar 102px
//!     Canvas: 500x602
//!     user_id: abc
//!     Wrote: captioned_output/captioned_20260807_153000_0000.png
//! ```

use crate::caption::LayoutPlan;
use crate::types::CaptionResult;

/// Format the summary for one overlay: the caption, the layout the engine
/// chose for it, any caller metadata, and where the PNG went.
pub fn format_caption_output(plan: &LayoutPlan, result: &CaptionResult) -> Vec<String> {
    let mut out = Vec::new();

    if result.caption.is_empty() {
        out.push("Caption: (empty)".to_string());
    } else {
        out.push(format!("Caption: {}", result.caption));
    }

    let noun = if plan.lines.len() == 1 { "line" } else { "lines" };
    out.push(format!(
        "    Font: {}px, {} {}, bar {}px",
        plan.font_size,
        plan.lines.len(),
        noun,
        plan.bar_height
    ));
    out.push(format!(
        "    Canvas: {}x{}",
        plan.canvas_width, plan.canvas_height
    ));

    if let Some(info) = &result.user_info {
        for (key, value) in info {
            out.push(format!("    {key}: {value}"));
        }
    }

    out.push(format!("    Wrote: {}", result.path));
    out
}

/// Print the overlay summary to stdout.
pub fn print_caption_output(plan: &LayoutPlan, result: &CaptionResult) {
    for line in format_caption_output(plan, result) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_plan() -> LayoutPlan {
        LayoutPlan {
            font_size: 48,
            lines: vec!["Hello World".to_string()],
            line_height: 62,
            bar_height: 102,
            canvas_width: 500,
            canvas_height: 602,
        }
    }

    fn sample_result() -> CaptionResult {
        CaptionResult {
            path: "out/captioned_20260807_153000_0000.png".into(),
            filename: "captioned_20260807_153000_0000.png".into(),
            timestamp: "20260807_153000".into(),
            caption: "Hello World".into(),
            user_info: None,
            image_data: None,
        }
    }

    #[test]
    fn single_line_summary() {
        let lines = format_caption_output(&sample_plan(), &sample_result());
        assert_eq!(
            lines,
            vec![
                "Caption: Hello World",
                "    Font: 48px, 1 line, bar 102px",
                "    Canvas: 500x602",
                "    Wrote: out/captioned_20260807_153000_0000.png",
            ]
        );
    }

    #[test]
    fn multi_line_plan_pluralizes() {
        let mut plan = sample_plan();
        plan.lines.push("second line".to_string());
        plan.bar_height = 164;

        let lines = format_caption_output(&plan, &sample_result());
        assert!(lines[1].contains("2 lines"));
    }

    #[test]
    fn empty_caption_is_labelled() {
        let mut result = sample_result();
        result.caption = String::new();

        let lines = format_caption_output(&sample_plan(), &result);
        assert_eq!(lines[0], "Caption: (empty)");
    }

    #[test]
    fn user_info_lines_appear_before_path() {
        let mut result = sample_result();
        result.user_info = Some(BTreeMap::from([("user_id".to_string(), "abc".to_string())]));

        let lines = format_caption_output(&sample_plan(), &result);
        assert!(lines.contains(&"    user_id: abc".to_string()));
        assert!(lines.last().unwrap().starts_with("    Wrote:"));
    }
}
